//! VoxFile CLI entry point

use std::process::ExitCode;

use clap::Parser;

use voxfile::cli::{
    app::{load_merged_config, resolve_text, run_convert, run_voices, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, ConvertOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use voxfile::domain::config::AppConfig;
use voxfile::domain::conversion::OutputFormat;
use voxfile::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Voices) => {
            return run_voices().await;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        voice: cli.voice.clone(),
        rate: cli.rate,
        pitch: cli.pitch,
        volume: cli.volume,
        format: cli
            .format
            .map(|f| OutputFormat::from(f).as_str().to_string()),
        output_dir: cli
            .output
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()),
        notify: if cli.notify { Some(true) } else { None },
        play: if cli.play { Some(true) } else { None },
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    // Resolve the text to convert
    let text = match resolve_text(&cli).await {
        Ok(text) => text,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let options = ConvertOptions {
        text,
        voice: config.voice.clone(),
        rate: config.rate_or_default(),
        pitch: config.pitch_or_default(),
        volume: config.volume_or_default(),
        format: config.format_or_default(),
        output_dir: config.output_dir_or_default(),
        play: config.play_or_default(),
        notify: config.notify_or_default(),
    };

    run_convert(options).await
}
