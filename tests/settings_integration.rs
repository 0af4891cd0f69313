// Integration tests for settings persistence and settings-driven layout

mod fixtures;

use fixtures::{dates, events};
use std::fs;
use tempfile::TempDir;
use week_grid::models::settings::{LayoutSettings, ValidationMode};
use week_grid::services::layout::LayoutService;
use week_grid::services::navigation::compute_week;
use week_grid::services::settings::SettingsService;
use week_grid::CalendarEvent;

#[test]
fn test_settings_persistence() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let service = SettingsService::new(&path);
    let mut settings = service.get().expect("Failed to get settings");
    assert_eq!(settings, LayoutSettings::default());

    settings.slot_minutes = 15;
    settings.validation = ValidationMode::Lenient;
    service.update(&settings).expect("Failed to update settings");

    // Simulate a second launch reading the same file
    let reopened = SettingsService::new(&path);
    let loaded = reopened.get().expect("Failed to load settings");
    assert_eq!(loaded.slot_minutes, 15);
    assert_eq!(loaded.validation, ValidationMode::Lenient);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("validation = \"lenient\""));
}

#[test]
fn test_hand_written_file_drives_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "slot_minutes = 60\nvalidation = \"lenient\"\n").unwrap();

    let settings = SettingsService::new(&path).get().unwrap();
    let service = LayoutService::new(settings);

    let mut list = vec![events::monday((9, 0), (10, 0), "A")];
    list.push(CalendarEvent {
        start: dates::at(0, 12, 0),
        end: dates::at(0, 11, 0),
        notes: "broken".to_string(),
    });

    let layout = service.layout(&list, &compute_week(dates::monday()).unwrap()).unwrap();
    assert_eq!(layout.days[0].slots.len(), 24);
    assert_eq!(layout.dropped.len(), 1);
    assert_eq!(layout.dropped[0].index, 1);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "slot_minutes = \"half an hour\"\n").unwrap();

    let err = SettingsService::new(&path).get().unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse settings"));
}
