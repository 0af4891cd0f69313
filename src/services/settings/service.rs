use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::LayoutSettings;

const SETTINGS_FILE: &str = "settings.toml";

/// Loads and saves layout settings as TOML.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to the per-user config location.
    pub fn with_default_path() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "WeekGrid", "week-grid") {
            dirs.config_dir().join(SETTINGS_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings, or defaults if no file exists yet
    pub fn get(&self) -> Result<LayoutSettings> {
        if !self.path.exists() {
            log::info!(
                "No settings at {}, using defaults",
                self.path.display()
            );
            return Ok(LayoutSettings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: LayoutSettings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &LayoutSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create dir {}", parent.display()))?;
            }
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&LayoutSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::ValidationMode;
    use tempfile::TempDir;

    fn setup() -> (TempDir, SettingsService) {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join(SETTINGS_FILE));
        (dir, service)
    }

    #[test]
    fn test_get_default_settings() {
        let (_dir, service) = setup();
        let settings = service.get().unwrap();
        assert_eq!(settings, LayoutSettings::default());
    }

    #[test]
    fn test_update_settings() {
        let (_dir, service) = setup();

        let mut settings = service.get().unwrap();
        settings.slot_minutes = 15;
        settings.validation = ValidationMode::Lenient;
        service.update(&settings).unwrap();

        let updated = service.get().unwrap();
        assert_eq!(updated.slot_minutes, 15);
        assert_eq!(updated.validation, ValidationMode::Lenient);
    }

    #[test]
    fn test_update_invalid_settings() {
        let (_dir, service) = setup();

        let settings = LayoutSettings::default().with_slot_minutes(7);
        assert!(service.update(&settings).is_err());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_invalid_file_rejected() {
        let (_dir, service) = setup();
        fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        fs::write(service.path(), "slot_minutes = 50\n").unwrap();

        let err = service.get().unwrap_err();
        assert!(err.to_string().contains("Invalid settings"));
    }

    #[test]
    fn test_reset_settings() {
        let (_dir, service) = setup();
        service
            .update(&LayoutSettings::lenient().with_slot_minutes(60))
            .unwrap();

        service.reset().unwrap();
        assert_eq!(service.get().unwrap(), LayoutSettings::default());
    }
}
