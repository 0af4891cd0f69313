// Settings module
// Layout engine configuration

use serde::{Deserialize, Serialize};

pub const MINUTES_PER_DAY: u32 = 24 * 60;
pub const DEFAULT_SLOT_MINUTES: u32 = 30;

/// A slot length is usable when it is positive and tiles the day exactly.
pub fn is_valid_slot_length(slot_minutes: u32) -> bool {
    slot_minutes != 0 && MINUTES_PER_DAY % slot_minutes == 0
}

/// How invalid events are handled at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Reject the whole layout on the first invalid event
    #[default]
    Strict,
    /// Drop invalid events and keep going
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub slot_minutes: u32,
    pub validation: ValidationMode,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            slot_minutes: DEFAULT_SLOT_MINUTES,
            validation: ValidationMode::Strict,
        }
    }
}

impl LayoutSettings {
    pub fn lenient() -> Self {
        Self {
            validation: ValidationMode::Lenient,
            ..Self::default()
        }
    }

    pub fn with_slot_minutes(mut self, slot_minutes: u32) -> Self {
        self.slot_minutes = slot_minutes;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !is_valid_slot_length(self.slot_minutes) {
            return Err(format!(
                "slot length must divide a day evenly, got {} minutes",
                self.slot_minutes
            ));
        }
        Ok(())
    }
}
