//! Rodio-based audio playback adapter

use std::io::Cursor;

use async_trait::async_trait;
use rodio::{Decoder, OutputStream, Sink};

use crate::application::ports::{AudioPlayer, PlaybackError};
use crate::domain::conversion::AudioBlob;

/// Audio player using rodio
pub struct RodioPlayer;

impl RodioPlayer {
    /// Create a new rodio-based player
    pub fn new() -> Self {
        Self
    }
}

impl Default for RodioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioPlayer for RodioPlayer {
    async fn play(&self, blob: &AudioBlob) -> Result<(), PlaybackError> {
        if blob.is_empty() {
            return Ok(());
        }

        let bytes = blob.data().to_vec();
        let mime_type = blob.mime_type().to_string();

        // Audio playback blocks until the sink drains, so run it off the
        // async runtime.
        tokio::task::spawn_blocking(move || play_sync(bytes, mime_type))
            .await
            .map_err(|e| PlaybackError::PlaybackFailed(format!("Task join error: {}", e)))?
    }
}

/// Play a blob synchronously (called from spawn_blocking)
fn play_sync(bytes: Vec<u8>, mime_type: String) -> Result<(), PlaybackError> {
    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| PlaybackError::DeviceNotAvailable(e.to_string()))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| PlaybackError::PlaybackFailed(e.to_string()))?;

    let source = Decoder::new(Cursor::new(bytes)).map_err(|e| PlaybackError::DecodeFailed {
        mime_type,
        message: e.to_string(),
    })?;

    sink.append(source);
    sink.sleep_until_end();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversion::NegotiatedEncoding;

    #[tokio::test]
    async fn empty_blob_is_a_no_op() {
        let player = RodioPlayer::new();
        let blob = AudioBlob::new(Vec::new(), NegotiatedEncoding::new("audio/wav"));
        assert!(player.play(&blob).await.is_ok());
    }

    #[tokio::test]
    #[ignore = "Requires audio hardware"]
    async fn plays_generated_wav() {
        // 8kHz mono 16-bit, 0.05s of silence
        let mut wav = Vec::new();
        let data_len: u32 = 800;
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data_len).to_le_bytes());
        wav.extend_from_slice(b"WAVEfmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes());
        wav.extend_from_slice(&8000u32.to_le_bytes());
        wav.extend_from_slice(&16000u32.to_le_bytes());
        wav.extend_from_slice(&2u16.to_le_bytes());
        wav.extend_from_slice(&16u16.to_le_bytes());
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&data_len.to_le_bytes());
        wav.extend_from_slice(&vec![0u8; data_len as usize]);

        let player = RodioPlayer::new();
        let blob = AudioBlob::new(wav, NegotiatedEncoding::new("audio/wav"));
        assert!(player.play(&blob).await.is_ok());
    }
}
