//! ffmpeg encoder recorder
//!
//! Pipes the routed WAV stream through the platform's ffmpeg binary,
//! capturing the encoded container from its stdout. All codec work happens
//! in the external encoder.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::application::ports::{CaptureError, Recorder};
use crate::application::routing::AudioStream;
use crate::domain::conversion::NegotiatedEncoding;

/// Check whether the ffmpeg binary is runnable
pub(super) fn probe_ffmpeg() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Output-side encoder arguments for a mime type, or None when the
/// container is not one the backend offers
pub(super) fn encoder_args(mime_type: &str) -> Option<&'static [&'static str]> {
    if mime_type.contains("webm") {
        Some(&["-f", "webm", "-codec:a", "libopus"])
    } else if mime_type.contains("ogg") {
        Some(&["-f", "ogg", "-codec:a", "libvorbis"])
    } else if mime_type.contains("mp3") || mime_type.contains("mpeg") {
        Some(&["-f", "mp3", "-codec:a", "libmp3lame"])
    } else {
        None
    }
}

/// Recorder that encodes the stream through an ffmpeg subprocess
pub struct FfmpegRecorder {
    stop_tx: oneshot::Sender<()>,
    task: JoinHandle<Result<Vec<u8>, CaptureError>>,
}

impl FfmpegRecorder {
    pub fn new(
        mut stream: AudioStream,
        encoding: &NegotiatedEncoding,
    ) -> Result<Self, CaptureError> {
        let output_args = encoder_args(encoding.mime_type()).ok_or_else(|| {
            CaptureError::EncoderNotFound(format!("no encoder for {}", encoding.mime_type()))
        })?;

        let mut child = Command::new("ffmpeg")
            .args(["-hide_banner", "-loglevel", "error", "-f", "wav", "-i", "pipe:0"])
            .args(output_args)
            .arg("pipe:1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| CaptureError::StartFailed(e.to_string()))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| CaptureError::StartFailed("encoder stdin unavailable".to_string()))?;
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| CaptureError::StartFailed("encoder stdout unavailable".to_string()))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| CaptureError::StartFailed("encoder stderr unavailable".to_string()))?;

        let (stop_tx, mut stop_rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            // Drain encoder output concurrently with feeding it; otherwise a
            // full stdout pipe stalls the encoder against a blocked stdin.
            let collect = tokio::spawn(async move {
                let mut encoded = Vec::new();
                stdout.read_to_end(&mut encoded).await.map(|_| encoded)
            });
            let diagnostics = tokio::spawn(async move {
                let mut text = String::new();
                let _ = stderr.read_to_string(&mut text).await;
                text
            });

            let mut fed: usize = 0;
            loop {
                tokio::select! {
                    chunk = stream.next_chunk() => match chunk {
                        Some(chunk) if !chunk.is_empty() => {
                            fed += chunk.len();
                            if stdin.write_all(&chunk).await.is_err() {
                                // encoder went away; diagnostics below
                                break;
                            }
                        }
                        Some(_) => {}
                        None => break,
                    },
                    _ = &mut stop_rx => {
                        stream.shut_off();
                        while let Some(chunk) = stream.next_chunk().await {
                            if chunk.is_empty() {
                                continue;
                            }
                            fed += chunk.len();
                            if stdin.write_all(&chunk).await.is_err() {
                                break;
                            }
                        }
                        break;
                    }
                }
            }
            drop(stdin);

            if fed == 0 {
                // nothing was routed; an empty capture is a soft result,
                // not an encoder failure
                let _ = child.start_kill();
                let _ = child.wait().await;
                collect.abort();
                diagnostics.abort();
                return Ok(Vec::new());
            }

            let status = child
                .wait()
                .await
                .map_err(|e| CaptureError::FinalizeFailed(e.to_string()))?;
            let encoded = collect
                .await
                .map_err(|e| CaptureError::FinalizeFailed(e.to_string()))?
                .map_err(|e| CaptureError::FinalizeFailed(e.to_string()))?;

            if !status.success() {
                let detail = diagnostics.await.unwrap_or_default();
                let reason = if detail.trim().is_empty() {
                    format!("encoder exited with {}", status)
                } else {
                    detail.trim().to_string()
                };
                return Err(CaptureError::FinalizeFailed(reason));
            }

            Ok(encoded)
        });

        Ok(Self { stop_tx, task })
    }
}

#[async_trait]
impl Recorder for FfmpegRecorder {
    async fn stop(self: Box<Self>) -> Result<Vec<u8>, CaptureError> {
        let Self { stop_tx, task } = *self;
        let _ = stop_tx.send(());
        task.await
            .map_err(|e| CaptureError::FinalizeFailed(e.to_string()))?
    }
}
