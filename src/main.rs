// Week Grid
// Command line preview of the weekly layout engine

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use week_grid::models::event::EventRecord;
use week_grid::models::settings::ValidationMode;
use week_grid::services::layout::LayoutService;
use week_grid::models::week::WeekSpan;
use week_grid::services::navigation::{shift_week, WeekNavigator};
use week_grid::services::settings::SettingsService;
use week_grid::ui_text::{render_week_with, TextGridOptions};

#[derive(Debug, Parser)]
#[command(name = "week-grid", version, about = "Lay out a week of events as a slot grid")]
struct Cli {
    /// JSON file holding an array of {start, end, notes} records. Times are
    /// ISO 8601, either naive ("2025-10-06T09:00:00") or with an offset
    /// ("2025-10-06T09:00:00Z", "...+02:00"); offsets keep their wall-clock time
    events: PathBuf,

    /// Any date inside the week to show (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Weeks to move from that date, negative goes back
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    shift: i64,

    /// Override the configured slot length in minutes
    #[arg(long)]
    slot_minutes: Option<u32>,

    /// Drop invalid events instead of failing
    #[arg(long)]
    lenient: bool,

    /// Settings file (defaults to the per-user config location)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the layout as JSON instead of a text table
    #[arg(long)]
    json: bool,

    /// Hide rows with no events
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    log::info!("Starting Week Grid");

    let settings_service = match &cli.config {
        Some(path) => SettingsService::new(path.clone()),
        None => SettingsService::with_default_path(),
    };
    let mut settings = settings_service.get()?;
    if let Some(minutes) = cli.slot_minutes {
        settings.slot_minutes = minutes;
    }
    if cli.lenient {
        settings.validation = ValidationMode::Lenient;
    }

    let data = fs::read_to_string(&cli.events)
        .with_context(|| format!("failed to read events from {}", cli.events.display()))?;
    let records: Vec<EventRecord> = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse events from {}", cli.events.display()))?;
    log::debug!("Loaded {} event records", records.len());

    let week = resolve_week(&cli)?;

    let service = LayoutService::new(settings);
    let layout = service
        .layout_records(&records, &week)
        .with_context(|| format!("failed to lay out week of {}", week.first_day()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        let options = TextGridOptions {
            skip_empty_rows: cli.compact,
            ..TextGridOptions::default()
        };
        println!("{}", render_week_with(&layout, &options));
    }

    Ok(())
}

/// The week around `--date` (or today), moved by `--shift` weeks.
fn resolve_week(cli: &Cli) -> Result<WeekSpan> {
    let navigator = match cli.date {
        Some(date) => WeekNavigator::new(date),
        None => WeekNavigator::today(),
    };
    let current = navigator
        .current()
        .with_context(|| format!("no representable week contains {}", navigator.anchor()))?;
    shift_week(&current, cli.shift).with_context(|| {
        format!(
            "cannot shift the week of {} by {} weeks",
            current.first_day(),
            cli.shift
        )
    })
}
