// Settings service module
// Loads and persists layout settings

mod service;

pub use service::SettingsService;
