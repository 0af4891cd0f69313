// Layout error module
// Typed failures raised while laying out a week

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("event #{index} ({notes:?}) ends at {end}, which is not after its start {start}")]
    InvalidEvent {
        index: usize,
        start: NaiveDateTime,
        end: NaiveDateTime,
        notes: String,
    },

    #[error("event #{index} is missing its {field} time")]
    MissingTime { index: usize, field: &'static str },

    #[error("slot length must divide a day evenly, got {0} minutes")]
    InvalidSlotLength(u32),
}

impl LayoutError {
    /// Index of the offending event in the caller's input, if any.
    pub fn event_index(&self) -> Option<usize> {
        match self {
            Self::InvalidEvent { index, .. } | Self::MissingTime { index, .. } => Some(*index),
            Self::InvalidSlotLength(_) => None,
        }
    }
}
