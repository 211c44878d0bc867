//! Capture backend: capability probing and recorder dispatch

use crate::application::ports::{CaptureBackend, CaptureError, Recorder};
use crate::application::routing::AudioStream;
use crate::domain::conversion::NegotiatedEncoding;

use super::ffmpeg::{encoder_args, probe_ffmpeg, FfmpegRecorder};
use super::passthrough::PassthroughRecorder;

/// Capture backend backed by the platform's encoders.
///
/// WAV is always supported (the synthesis engine emits it natively); the
/// compressed mime types are supported exactly when the ffmpeg binary is
/// present to encode them.
pub struct SystemCapture {
    ffmpeg_available: bool,
}

impl SystemCapture {
    /// Create a backend, probing for the ffmpeg encoder once
    pub fn new() -> Self {
        Self {
            ffmpeg_available: probe_ffmpeg(),
        }
    }

    /// Create with a forced encoder availability (tests)
    #[cfg(test)]
    pub fn with_ffmpeg(ffmpeg_available: bool) -> Self {
        Self { ffmpeg_available }
    }
}

impl Default for SystemCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureBackend for SystemCapture {
    fn is_type_supported(&self, mime_type: &str) -> bool {
        if mime_type.contains("wav") {
            return true;
        }
        self.ffmpeg_available && encoder_args(mime_type).is_some()
    }

    fn open(
        &self,
        stream: AudioStream,
        encoding: &NegotiatedEncoding,
    ) -> Result<Box<dyn Recorder>, CaptureError> {
        if encoding.mime_type().contains("wav") {
            return Ok(Box::new(PassthroughRecorder::new(stream)));
        }
        if !self.ffmpeg_available {
            return Err(CaptureError::EncoderNotFound(format!(
                "ffmpeg is required to encode {}",
                encoding.mime_type()
            )));
        }
        Ok(Box::new(FfmpegRecorder::new(stream, encoding)?))
    }
}
