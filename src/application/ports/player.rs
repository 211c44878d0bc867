//! Audio playback port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::conversion::AudioBlob;

/// Playback errors
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    #[error("No audio output device available: {0}")]
    DeviceNotAvailable(String),

    #[error("Cannot decode {mime_type} audio: {message}")]
    DecodeFailed { mime_type: String, message: String },

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Port for playing a finished conversion out loud (the listen mode)
#[async_trait]
pub trait AudioPlayer: Send + Sync {
    /// Play the blob to completion through the default output device.
    async fn play(&self, blob: &AudioBlob) -> Result<(), PlaybackError>;
}
