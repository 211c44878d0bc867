//! espeak-ng synthesizer adapter
//!
//! Runs the engine as a subprocess with `--stdout`, feeding the text on
//! stdin and pumping the rendered WAV stream into the routing-path sink.
//! Lifecycle events mirror the process: Started on spawn, Finished on clean
//! exit, Error with the stderr tail otherwise. Cancellation kills the child.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;
use tokio::sync::{mpsc, oneshot};

use crate::application::ports::{
    SpeechSynthesizer, SynthesisError, SynthesisEvent, SynthesisHandle,
};
use crate::application::routing::AudioSink;
use crate::domain::conversion::{Pitch, Rate, Utterance, VoiceHandle, Volume};

/// Engine defaults the parameter multipliers scale against
const DEFAULT_WORDS_PER_MINUTE: f32 = 175.0;
const DEFAULT_PITCH_SCALE: f32 = 50.0;
const DEFAULT_AMPLITUDE: f32 = 100.0;

/// Read size for the WAV stdout pump
const CHUNK_SIZE: usize = 8192;

/// Speech synthesizer using the espeak-ng command-line engine
pub struct EspeakSynthesizer {
    program: String,
}

impl EspeakSynthesizer {
    /// Create a synthesizer using the default engine binary
    pub fn new() -> Self {
        Self {
            program: "espeak-ng".to_string(),
        }
    }

    /// Create with a custom engine binary (e.g. plain espeak)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Map the rate multiplier onto the engine's words-per-minute flag
    fn words_per_minute(rate: Rate) -> u32 {
        (DEFAULT_WORDS_PER_MINUTE * rate.value()).round() as u32
    }

    /// Map the pitch multiplier onto the engine's 0-99 pitch scale
    fn pitch_scale(pitch: Pitch) -> u32 {
        (DEFAULT_PITCH_SCALE * pitch.value()).round().min(99.0) as u32
    }

    /// Map the volume onto the engine's 0-200 amplitude scale
    fn amplitude(volume: Volume) -> u32 {
        (DEFAULT_AMPLITUDE * volume.value()).round() as u32
    }

    /// Build the engine arguments for an utterance. Text goes on stdin.
    fn build_args(utterance: &Utterance) -> Vec<String> {
        let mut args = vec!["--stdout".to_string()];
        if let Some(voice) = &utterance.voice {
            args.push("-v".to_string());
            args.push(voice.name.clone());
        }
        args.push("-s".to_string());
        args.push(Self::words_per_minute(utterance.rate).to_string());
        args.push("-p".to_string());
        args.push(Self::pitch_scale(utterance.pitch).to_string());
        args.push("-a".to_string());
        args.push(Self::amplitude(utterance.volume).to_string());
        args
    }

    fn spawn_error(&self, e: std::io::Error) -> SynthesisError {
        if e.kind() == std::io::ErrorKind::NotFound {
            SynthesisError::EngineNotFound(self.program.clone())
        } else {
            SynthesisError::StartFailed(e.to_string())
        }
    }
}

impl Default for EspeakSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizer for EspeakSynthesizer {
    async fn speak(
        &self,
        utterance: &Utterance,
        sink: AudioSink,
    ) -> Result<SynthesisHandle, SynthesisError> {
        let mut child = Command::new(&self.program)
            .args(Self::build_args(utterance))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| SynthesisError::StartFailed("engine stdin unavailable".to_string()))?;
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| SynthesisError::StartFailed("engine stdout unavailable".to_string()))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| SynthesisError::StartFailed("engine stderr unavailable".to_string()))?;

        let (events_tx, events_rx) = mpsc::channel(8);
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let text = utterance.text.clone();

        tokio::spawn(async move {
            let _ = events_tx.send(SynthesisEvent::Started).await;

            // Feed text and pump audio concurrently; a full stdout pipe
            // would otherwise stall the engine against a blocked stdin.
            let run = async {
                let feed = async {
                    let _ = stdin.write_all(text.as_bytes()).await;
                    let _ = stdin.write_all(b"\n").await;
                    drop(stdin);
                };
                let pump = async {
                    let mut buf = [0u8; CHUNK_SIZE];
                    loop {
                        match stdout.read(&mut buf).await {
                            Ok(0) => break Ok(()),
                            Ok(n) => {
                                if !sink.write(buf[..n].to_vec()).await {
                                    // recorder went away; keep draining so
                                    // the engine can finish
                                    break Ok(());
                                }
                            }
                            Err(e) => break Err(e),
                        }
                    }
                };
                let (_, pumped) = tokio::join!(feed, pump);
                pumped
            };

            tokio::select! {
                pumped = run => {
                    let mut diagnostics = String::new();
                    let _ = stderr.read_to_string(&mut diagnostics).await;

                    let event = match (child.wait().await, pumped) {
                        (Ok(status), Ok(())) => {
                            if status.success() {
                                SynthesisEvent::Finished
                            } else if diagnostics.trim().is_empty() {
                                SynthesisEvent::Error(format!("engine exited with {}", status))
                            } else {
                                SynthesisEvent::Error(diagnostics.trim().to_string())
                            }
                        }
                        (_, Err(e)) => SynthesisEvent::Error(e.to_string()),
                        (Err(e), Ok(())) => SynthesisEvent::Error(e.to_string()),
                    };
                    let _ = events_tx.send(event).await;
                }
                _ = cancel_rx => {
                    // cancelled: kill the engine, emit nothing further
                    let _ = child.start_kill();
                    let _ = child.wait().await;
                }
            }
        });

        Ok(SynthesisHandle::new(events_rx, cancel_tx))
    }

    async fn voices(&self) -> Result<Vec<VoiceHandle>, SynthesisError> {
        let output = Command::new(&self.program)
            .arg("--voices")
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SynthesisError::EngineNotFound(self.program.clone())
                } else {
                    SynthesisError::VoiceListFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            return Err(SynthesisError::VoiceListFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(parse_voice_list(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Parse the engine's `--voices` table.
///
/// Columns: Pty Language Age/Gender VoiceName File Other. The first line is
/// the header; malformed rows are skipped.
fn parse_voice_list(listing: &str) -> Vec<VoiceHandle> {
    listing
        .lines()
        .skip(1)
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 4 {
                return None;
            }
            Some(VoiceHandle::new(fields[3], fields[1]))
        })
        .collect()
}
