//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::conversion::{OutputFormat, Pitch, Rate, Volume};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub voice: Option<String>,
    pub rate: Option<f32>,
    pub pitch: Option<f32>,
    pub volume: Option<f32>,
    pub format: Option<String>,
    pub output_dir: Option<String>,
    pub notify: Option<bool>,
    pub play: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            voice: None,
            rate: Some(1.0),
            pitch: Some(1.0),
            volume: Some(1.0),
            format: Some(OutputFormat::Compressed.as_str().to_string()),
            output_dir: Some(".".to_string()),
            notify: Some(false),
            play: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            voice: other.voice.or(self.voice),
            rate: other.rate.or(self.rate),
            pitch: other.pitch.or(self.pitch),
            volume: other.volume.or(self.volume),
            format: other.format.or(self.format),
            output_dir: other.output_dir.or(self.output_dir),
            notify: other.notify.or(self.notify),
            play: other.play.or(self.play),
        }
    }

    /// Get the rate as a clamped value object, or the default
    pub fn rate_or_default(&self) -> Rate {
        self.rate.map(Rate::new).unwrap_or_default()
    }

    /// Get the pitch as a clamped value object, or the default
    pub fn pitch_or_default(&self) -> Pitch {
        self.pitch.map(Pitch::new).unwrap_or_default()
    }

    /// Get the volume as a clamped value object, or the default
    pub fn volume_or_default(&self) -> Volume {
        self.volume.map(Volume::new).unwrap_or_default()
    }

    /// Get the output format, or the default if not set/invalid
    pub fn format_or_default(&self) -> OutputFormat {
        self.format
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the output directory, defaulting to the current directory
    pub fn output_dir_or_default(&self) -> PathBuf {
        self.output_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }

    pub fn play_or_default(&self) -> bool {
        self.play.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_other() {
        let base = AppConfig {
            voice: Some("en-us".to_string()),
            rate: Some(1.0),
            ..Default::default()
        };
        let override_config = AppConfig {
            rate: Some(1.5),
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.voice.as_deref(), Some("en-us"));
        assert_eq!(merged.rate, Some(1.5));
    }

    #[test]
    fn empty_config_yields_defaults() {
        let config = AppConfig::empty();
        assert_eq!(config.rate_or_default().value(), 1.0);
        assert_eq!(config.format_or_default(), OutputFormat::Compressed);
        assert_eq!(config.output_dir_or_default(), PathBuf::from("."));
        assert!(!config.notify_or_default());
        assert!(!config.play_or_default());
    }

    #[test]
    fn invalid_format_string_falls_back() {
        let config = AppConfig {
            format: Some("surround-sound".to_string()),
            ..Default::default()
        };
        assert_eq!(config.format_or_default(), OutputFormat::Compressed);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = AppConfig {
            rate: Some(9.0),
            pitch: Some(0.0),
            volume: Some(2.0),
            ..Default::default()
        };
        assert_eq!(config.rate_or_default().value(), 2.0);
        assert_eq!(config.pitch_or_default().value(), 0.5);
        assert_eq!(config.volume_or_default().value(), 1.0);
    }

    #[test]
    fn toml_round_trip() {
        let config = AppConfig {
            voice: Some("en-gb".to_string()),
            format: Some("uncompressed".to_string()),
            notify: Some(true),
            ..Default::default()
        };
        let serialized = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.voice.as_deref(), Some("en-gb"));
        assert_eq!(parsed.format_or_default(), OutputFormat::Uncompressed);
        assert_eq!(parsed.notify, Some(true));
    }
}
