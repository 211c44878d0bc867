//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::conversion::{OutputFormat, Pitch, Rate, Volume};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field, validating the value against its type
    match key {
        "voice" => config.voice = Some(value.to_string()),
        "rate" => config.rate = Some(parse_slider(key, value, Rate::MIN, Rate::MAX)?),
        "pitch" => config.pitch = Some(parse_slider(key, value, Pitch::MIN, Pitch::MAX)?),
        "volume" => config.volume = Some(parse_slider(key, value, Volume::MIN, Volume::MAX)?),
        "format" => {
            let format: OutputFormat =
                value.parse().map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be 'compressed' or 'uncompressed'".to_string(),
                })?;
            config.format = Some(format.as_str().to_string());
        }
        "output_dir" => config.output_dir = Some(value.to_string()),
        "notify" => config.notify = Some(parse_bool(key, value)?),
        "play" => config.play = Some(parse_bool(key, value)?),
        _ => unreachable!(), // Already validated
    }

    // Save config
    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "voice" => config.voice,
        "rate" => config.rate.map(|v| v.to_string()),
        "pitch" => config.pitch.map(|v| v.to_string()),
        "volume" => config.volume.map(|v| v.to_string()),
        "format" => config.format,
        "output_dir" => config.output_dir,
        "notify" => config.notify.map(|b| b.to_string()),
        "play" => config.play.map(|b| b.to_string()),
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    let not_set = || "(not set)".to_string();
    presenter.key_value("voice", &config.voice.unwrap_or_else(not_set));
    presenter.key_value(
        "rate",
        &config.rate.map(|v| v.to_string()).unwrap_or_else(not_set),
    );
    presenter.key_value(
        "pitch",
        &config.pitch.map(|v| v.to_string()).unwrap_or_else(not_set),
    );
    presenter.key_value(
        "volume",
        &config.volume.map(|v| v.to_string()).unwrap_or_else(not_set),
    );
    presenter.key_value("format", &config.format.unwrap_or_else(not_set));
    presenter.key_value("output_dir", &config.output_dir.unwrap_or_else(not_set));
    presenter.key_value(
        "notify",
        &config.notify.map(|b| b.to_string()).unwrap_or_else(not_set),
    );
    presenter.key_value(
        "play",
        &config.play.map(|b| b.to_string()).unwrap_or_else(not_set),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must be 'true' or 'false'".to_string(),
        }),
    }
}

fn parse_slider(key: &str, value: &str, min: f32, max: f32) -> Result<f32, ConfigError> {
    let parsed: f32 = value.parse().map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be a number".to_string(),
    })?;
    if !(min..=max).contains(&parsed) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(parsed)
}
