//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::conversion::{OutputFormat, Pitch, Rate, Volume};

/// VoxFile - convert text to natural-sounding speech audio files
#[derive(Parser, Debug)]
#[command(name = "voxfile")]
#[command(version = "1.0.0")]
#[command(about = "Convert text to speech and save it as an audio file")]
#[command(long_about = None)]
pub struct Cli {
    /// Text to convert. Reads --input or stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(short = 'i', long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Voice to speak with (see `voxfile voices`)
    #[arg(short = 'v', long, value_name = "NAME")]
    pub voice: Option<String>,

    /// Speech rate multiplier (0.5 - 2.0)
    #[arg(short = 'r', long, value_name = "RATE")]
    pub rate: Option<f32>,

    /// Voice pitch multiplier (0.5 - 2.0)
    #[arg(short = 'p', long, value_name = "PITCH")]
    pub pitch: Option<f32>,

    /// Output volume (0.0 - 1.0)
    #[arg(long, value_name = "VOLUME")]
    pub volume: Option<f32>,

    /// Output format preference
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Directory to write the audio file into
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Play the audio out loud after converting
    #[arg(long)]
    pub play: bool,

    /// Show desktop notifications
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the voices the speech engine offers
    Voices,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show the config file path
    Path,
}

/// Output format CLI argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Compressed,
    Uncompressed,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Compressed => OutputFormat::Compressed,
            FormatArg::Uncompressed => OutputFormat::Uncompressed,
        }
    }
}

/// Valid configuration keys
pub const VALID_CONFIG_KEYS: [&str; 8] = [
    "voice",
    "rate",
    "pitch",
    "volume",
    "format",
    "output_dir",
    "notify",
    "play",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

/// Resolved options for one conversion
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub text: String,
    pub voice: Option<String>,
    pub rate: Rate,
    pub pitch: Pitch,
    pub volume: Volume,
    pub format: OutputFormat,
    pub output_dir: PathBuf,
    pub play: bool,
    pub notify: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_positional_text() {
        let cli = Cli::parse_from(["voxfile", "hello world"]);
        assert_eq!(cli.text.as_deref(), Some("hello world"));
    }

    #[test]
    fn cli_parses_sliders() {
        let cli = Cli::parse_from(["voxfile", "hi", "-r", "1.5", "-p", "0.8", "--volume", "0.3"]);
        assert_eq!(cli.rate, Some(1.5));
        assert_eq!(cli.pitch, Some(0.8));
        assert_eq!(cli.volume, Some(0.3));
    }

    #[test]
    fn cli_parses_format() {
        let cli = Cli::parse_from(["voxfile", "hi", "-f", "uncompressed"]);
        assert_eq!(cli.format, Some(FormatArg::Uncompressed));
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["voxfile", "hi", "--play", "-n"]);
        assert!(cli.play);
        assert!(cli.notify);
    }

    #[test]
    fn cli_parses_voices_subcommand() {
        let cli = Cli::parse_from(["voxfile", "voices"]);
        assert!(matches!(cli.command, Some(Commands::Voices)));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["voxfile", "config", "set", "voice", "en-gb"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "voice");
            assert_eq!(value, "en-gb");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn text_conflicts_with_input_file() {
        let result = Cli::try_parse_from(["voxfile", "hi", "-i", "text.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn format_arg_converts_to_output_format() {
        assert_eq!(
            OutputFormat::from(FormatArg::Compressed),
            OutputFormat::Compressed
        );
        assert_eq!(
            OutputFormat::from(FormatArg::Uncompressed),
            OutputFormat::Uncompressed
        );
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("voice"));
        assert!(is_valid_config_key("output_dir"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
