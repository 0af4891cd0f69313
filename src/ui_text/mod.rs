//! Plain text rendering of a laid-out week.
//!
//! Paints the slot grid as a table: a time label column, then one block per
//! day split into lane sub-columns. Used by the `week-grid` binary to
//! preview layouts in a terminal.

use crate::models::layout::{Cell, DayLayout, WeekLayout};

/// Constants for text grid rendering
pub const TIME_LABEL_WIDTH: usize = 6;
pub const DEFAULT_LANE_WIDTH: usize = 10;
pub const COLUMN_SEPARATOR: &str = "|";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGridOptions {
    /// Characters per lane sub-column
    pub lane_width: usize,
    /// Leave out rows where every day is empty
    pub skip_empty_rows: bool,
}

impl Default for TextGridOptions {
    fn default() -> Self {
        Self {
            lane_width: DEFAULT_LANE_WIDTH,
            skip_empty_rows: false,
        }
    }
}

pub fn render_week(layout: &WeekLayout) -> String {
    render_week_with(layout, &TextGridOptions::default())
}

pub fn render_week_with(layout: &WeekLayout, options: &TextGridOptions) -> String {
    let lane_width = options.lane_width.max(2);
    let day_widths: Vec<usize> = layout
        .days
        .iter()
        .map(|day| lanes_in_day(day) * lane_width)
        .collect();

    let mut lines = Vec::new();
    lines.push(layout.week.month_label());
    lines.push(layout.week.range_label());

    // Day headers
    let mut header = " ".repeat(TIME_LABEL_WIDTH);
    for (day, width) in layout.days.iter().zip(&day_widths) {
        header.push_str(COLUMN_SEPARATOR);
        header.push_str(&fit(&day.date.format("%a %d").to_string(), *width));
    }
    lines.push(header);

    let rows = layout.days.first().map_or(0, |day| day.slots.len());
    for row in 0..rows {
        if options.skip_empty_rows && layout.days.iter().all(|day| day.slots[row].is_empty()) {
            continue;
        }

        let label = &layout.days[0].slots[row].label;
        let mut line = format!("{:>width$}", label, width = TIME_LABEL_WIDTH);
        for (day, width) in layout.days.iter().zip(&day_widths) {
            line.push_str(COLUMN_SEPARATOR);
            let mut block = String::new();
            for cell in &day.slots[row].cells {
                block.push_str(&render_cell(cell, lane_width));
            }
            line.push_str(&fit(&block, *width));
        }
        lines.push(line.trim_end().to_string());
    }

    if !layout.dropped.is_empty() {
        lines.push(format!("{} event(s) dropped", layout.dropped.len()));
    }

    lines.join("\n")
}

/// Widest row of the day, at least one lane.
fn lanes_in_day(day: &DayLayout) -> usize {
    day.slots
        .iter()
        .map(|slot| slot.cells.len())
        .max()
        .unwrap_or(1)
        .max(1)
}

fn render_cell(cell: &Cell, lane_width: usize) -> String {
    match cell {
        Cell::Event(fragment) if fragment.continued => fit("  :", lane_width),
        Cell::Event(fragment) => fit(&format!(" {}", fragment.notes), lane_width),
        Cell::Filler { .. } => fit("  .", lane_width),
        Cell::Absent => " ".repeat(lane_width),
    }
}

/// Pad or truncate `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}
