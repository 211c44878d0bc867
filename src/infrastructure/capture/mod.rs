//! Capture infrastructure module
//!
//! Records the routed synthesis stream into an encoded blob. WAV is a
//! passthrough of the engine's own output; compressed containers are
//! delegated to the platform's ffmpeg encoder. No encoding happens in
//! process.

mod backend;
mod ffmpeg;
mod passthrough;

pub use backend::SystemCapture;
pub use ffmpeg::FfmpegRecorder;
pub use passthrough::PassthroughRecorder;

/// Create the default capture backend, probing encoder availability
pub fn create_capture() -> SystemCapture {
    SystemCapture::new()
}
