//! Capture port interfaces

use async_trait::async_trait;
use thiserror::Error;

use crate::application::routing::AudioStream;
use crate::domain::conversion::NegotiatedEncoding;

/// Capture errors
#[derive(Debug, Clone, Error)]
pub enum CaptureError {
    #[error("Failed to start recorder: {0}")]
    StartFailed(String),

    #[error("Encoder not available: {0}")]
    EncoderNotFound(String),

    #[error("Failed to finalize recording: {0}")]
    FinalizeFailed(String),
}

/// Port for the platform audio-capture subsystem.
///
/// Mirrors the recorder contract of the original platform: a capability
/// query plus a per-session recorder bound to a live stream.
pub trait CaptureBackend: Send + Sync {
    /// Whether this backend can produce `mime_type`
    fn is_type_supported(&self, mime_type: &str) -> bool;

    /// Bind a recorder to a live stream, configured with the negotiated
    /// encoding. Chunk accumulation starts immediately: every non-empty
    /// chunk arriving on the stream is appended to an ordered buffer.
    fn open(
        &self,
        stream: AudioStream,
        encoding: &NegotiatedEncoding,
    ) -> Result<Box<dyn Recorder>, CaptureError>;
}

/// One recording bound to a routing path
#[async_trait]
pub trait Recorder: Send {
    /// Stop the recording and finalize.
    ///
    /// Chunks already delivered to the stream are drained before the buffer
    /// is concatenated, so the result is complete at this point. A recording
    /// that never received data finalizes to an empty byte vector, not an
    /// error.
    async fn stop(self: Box<Self>) -> Result<Vec<u8>, CaptureError>;
}
