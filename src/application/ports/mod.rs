//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod notifier;
pub mod player;
pub mod recorder;
pub mod synthesizer;

// Re-export common types
pub use config::ConfigStore;
pub use notifier::{NotificationError, NotificationIcon, Notifier};
pub use player::{AudioPlayer, PlaybackError};
pub use recorder::{CaptureBackend, CaptureError, Recorder};
pub use synthesizer::{SpeechSynthesizer, SynthesisError, SynthesisEvent, SynthesisHandle};
