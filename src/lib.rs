// Week Grid Library
// Weekly calendar layout engine and its supporting services

pub mod models;
pub mod services;
pub mod ui_text;
pub mod utils;

pub use models::event::{CalendarEvent, EventRecord};
pub use models::layout::{Cell, DayLayout, EventFragment, Placement, SlotRow, WeekLayout};
pub use models::settings::{LayoutSettings, ValidationMode};
pub use models::week::WeekSpan;
pub use services::layout::{layout_week, LayoutError, LayoutService};
pub use services::navigation::{compute_week, shift_week, WeekNavigator};
