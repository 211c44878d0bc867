//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like espeak-ng, ffmpeg, the audio
//! output device and the desktop notification service.

pub mod capture;
pub mod config;
pub mod notification;
pub mod playback;
pub mod synthesis;

// Re-export adapters
pub use capture::SystemCapture;
pub use config::XdgConfigStore;
pub use notification::NotifyRustNotifier;
pub use playback::RodioPlayer;
pub use synthesis::EspeakSynthesizer;
