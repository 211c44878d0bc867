//! Main app runners

use std::process::ExitCode;

use tokio::io::AsyncReadExt;

use crate::application::convert::{ConvertError, ConvertInput, ConvertTextUseCase};
use crate::application::ports::SpeechSynthesizer;
use crate::domain::config::AppConfig;
use crate::domain::conversion::VoiceHandle;
use crate::infrastructure::capture::create_capture;
use crate::infrastructure::notification::create_notifier;
use crate::infrastructure::{EspeakSynthesizer, RodioPlayer, XdgConfigStore};

use super::args::{Cli, ConvertOptions};
use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Merge file config under the CLI-provided config
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    use crate::application::ports::ConfigStore;

    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring config file: {}", e);
            AppConfig::empty()
        }
    };
    file_config.merge(cli_config)
}

/// Resolve the text to convert: positional argument, input file, or stdin
pub async fn resolve_text(cli: &Cli) -> Result<String, String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.input {
        return tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e));
    }

    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .map_err(|e| format!("Failed to read stdin: {}", e))?;
    Ok(text)
}

/// Look the requested voice up in the engine's list, like the voice picker
/// did: an unknown name falls back to the engine default with a warning.
async fn resolve_voice<S: SpeechSynthesizer>(
    synthesizer: &S,
    name: Option<&str>,
    presenter: &Presenter,
) -> Option<VoiceHandle> {
    let name = name?;
    match synthesizer.voices().await {
        Ok(voices) => {
            let found = voices
                .into_iter()
                .find(|v| v.name == name || v.language == name);
            if found.is_none() {
                presenter.warn(&format!("Voice '{}' not found, using default", name));
            }
            found
        }
        Err(e) => {
            presenter.warn(&format!("Could not list voices: {}", e));
            None
        }
    }
}

/// Run one text-to-speech conversion
pub async fn run_convert(options: ConvertOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    // Create adapters
    let synthesizer = EspeakSynthesizer::new();
    let capture = create_capture();
    let player = RodioPlayer::new();
    let notifier = create_notifier();

    let voice = resolve_voice(&synthesizer, options.voice.as_deref(), &presenter).await;

    // Create use case
    let use_case = ConvertTextUseCase::new(synthesizer, capture, player, notifier);

    // Signal handling: interruption cancels the in-flight session
    let shutdown = ShutdownSignal::new(use_case.sessions());
    if let Err(e) = shutdown.setup().await {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    let input = ConvertInput {
        text: options.text.clone(),
        voice,
        rate: options.rate,
        pitch: options.pitch,
        volume: options.volume,
        format: options.format,
        enable_play: options.play,
        enable_notify: options.notify,
    };

    presenter.start_spinner("Converting text to speech...");

    match use_case.execute(input).await {
        Ok(output) => {
            presenter.spinner_success(&format!(
                "Captured {} of {}",
                output.blob.human_readable_size(),
                output.blob.mime_type()
            ));

            if output.captured_nothing() {
                presenter.warn("Conversion finished but no audio was captured");
            }

            // Write the artifact
            if let Err(e) = tokio::fs::create_dir_all(&options.output_dir).await {
                presenter.error(&format!(
                    "Failed to create {}: {}",
                    options.output_dir.display(),
                    e
                ));
                return ExitCode::from(EXIT_ERROR);
            }
            let destination = options.output_dir.join(&output.file_name);
            if let Err(e) = tokio::fs::write(&destination, output.blob.data()).await {
                presenter.error(&format!("Failed to write {}: {}", destination.display(), e));
                return ExitCode::from(EXIT_ERROR);
            }

            presenter.success(&format!("Saved {}", destination.display()));
            presenter.output(&destination.to_string_lossy());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(ConvertError::EmptyInput) => {
            presenter.stop_spinner();
            presenter.error(&ConvertError::EmptyInput.to_string());
            ExitCode::from(EXIT_USAGE_ERROR)
        }
        Err(e) => {
            presenter.stop_spinner();
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// List the voices the engine offers
pub async fn run_voices() -> ExitCode {
    let presenter = Presenter::new();
    let synthesizer = EspeakSynthesizer::new();

    match synthesizer.voices().await {
        Ok(voices) if voices.is_empty() => {
            presenter.warn("The speech engine reported no voices");
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(voices) => {
            for voice in voices {
                presenter.key_value(&voice.name, &voice.language);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
