//! Convert text to speech use case

use std::sync::Arc;
use thiserror::Error;

use crate::domain::conversion::{
    negotiate_encoding, output_file_name, AudioBlob, CaptureSession, InvalidStateTransition,
    OutputFormat, Pitch, Rate, Utterance, VoiceHandle, Volume,
};

use super::ports::{
    AudioPlayer, CaptureBackend, CaptureError, NotificationIcon, Notifier, SpeechSynthesizer,
    SynthesisError, SynthesisEvent,
};
use super::routing::RoutingPath;
use super::sessions::SessionManager;

/// Errors from the convert use case
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Please enter some text to convert")]
    EmptyInput,

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("Conversion was cancelled")]
    Cancelled,

    #[error("Capture session error: {0}")]
    Session(#[from] InvalidStateTransition),
}

/// Input parameters for the convert use case
#[derive(Debug, Clone, Default)]
pub struct ConvertInput {
    /// Text to vocalize
    pub text: String,
    /// Voice to use, engine default when None
    pub voice: Option<VoiceHandle>,
    pub rate: Rate,
    pub pitch: Pitch,
    pub volume: Volume,
    /// Preferred output format
    pub format: OutputFormat,
    /// Whether to play the result out loud after conversion
    pub enable_play: bool,
    /// Whether to show desktop notifications
    pub enable_notify: bool,
}

impl ConvertInput {
    /// Create an input for `text` with default parameters
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Output from the convert use case
#[derive(Debug, Clone)]
pub struct ConvertOutput {
    /// The finalized audio
    pub blob: AudioBlob,
    /// Derived output filename (first three words + `_speech.<ext>`)
    pub file_name: String,
}

impl ConvertOutput {
    /// True when synthesis completed but no audio reached the recorder.
    /// Callers should warn instead of silently delivering an empty file.
    pub fn captured_nothing(&self) -> bool {
        self.blob.is_empty()
    }
}

/// Text-to-speech conversion use case: one end-to-end capture session.
///
/// Opens an audio routing path, starts a recorder against it, starts speech
/// synthesis into the same path, and on the utterance's terminal event stops
/// the recorder and finalizes the blob. Settles exactly once; the routing
/// path is torn down on every exit.
pub struct ConvertTextUseCase<S, C, P, N>
where
    S: SpeechSynthesizer,
    C: CaptureBackend,
    P: AudioPlayer,
    N: Notifier,
{
    synthesizer: S,
    capture: C,
    player: P,
    notifier: N,
    sessions: Arc<SessionManager>,
}

impl<S, C, P, N> ConvertTextUseCase<S, C, P, N>
where
    S: SpeechSynthesizer,
    C: CaptureBackend,
    P: AudioPlayer,
    N: Notifier,
{
    /// Create a new use case instance
    pub fn new(synthesizer: S, capture: C, player: P, notifier: N) -> Self {
        Self {
            synthesizer,
            capture,
            player,
            notifier,
            sessions: Arc::new(SessionManager::new()),
        }
    }

    /// Get the session manager for external teardown (signal handling)
    pub fn sessions(&self) -> Arc<SessionManager> {
        Arc::clone(&self.sessions)
    }

    /// Execute the conversion workflow
    pub async fn execute(&self, input: ConvertInput) -> Result<ConvertOutput, ConvertError> {
        // Reject blank input before any platform call is made.
        if input.text.trim().is_empty() {
            return Err(ConvertError::EmptyInput);
        }

        if input.enable_notify {
            let _ = self
                .notifier
                .notify(
                    "VoxFile",
                    "Converting text to speech...",
                    NotificationIcon::Converting,
                )
                .await;
        }

        let mut session = CaptureSession::new();
        let result = self.run_capture(&input, &mut session).await;
        if result.is_err() {
            session.fail();
        }

        match result {
            Ok(output) => {
                if input.enable_notify {
                    if output.captured_nothing() {
                        let _ = self
                            .notifier
                            .notify(
                                "VoxFile",
                                "Conversion finished but no audio was captured",
                                NotificationIcon::Warning,
                            )
                            .await;
                    } else {
                        let _ = self
                            .notifier
                            .notify("VoxFile", "Conversion complete!", NotificationIcon::Success)
                            .await;
                    }
                }

                // Listen mode is non-fatal: the file is already captured.
                if input.enable_play && !output.captured_nothing() {
                    if let Err(e) = self.player.play(&output.blob).await {
                        eprintln!("Warning: playback failed: {}", e);
                    }
                }

                Ok(output)
            }
            Err(e) => {
                if input.enable_notify {
                    let _ = self
                        .notifier
                        .notify("VoxFile", &e.to_string(), NotificationIcon::Error)
                        .await;
                }
                Err(e)
            }
        }
    }

    /// The capture session proper: routing -> recording -> finalizing.
    async fn run_capture(
        &self,
        input: &ConvertInput,
        session: &mut CaptureSession,
    ) -> Result<ConvertOutput, ConvertError> {
        session.begin_routing()?;
        let (path, stream) = RoutingPath::open();
        let encoding =
            negotiate_encoding(input.format, |mime| self.capture.is_type_supported(mime));

        let recorder = match self.capture.open(stream, &encoding) {
            Ok(recorder) => recorder,
            Err(e) => {
                path.close();
                return Err(e.into());
            }
        };
        session.begin_recording()?;

        // At most one utterance may be active engine-wide: cancel whatever
        // holds the slot before starting our own.
        let mut slot = self.sessions.acquire().await;

        let utterance = Utterance::new(input.text.clone())
            .with_voice(input.voice.clone())
            .with_rate(input.rate)
            .with_pitch(input.pitch)
            .with_volume(input.volume);

        let mut handle = match self.synthesizer.speak(&utterance, path.sink()).await {
            Ok(handle) => handle,
            Err(e) => {
                let _ = recorder.stop().await;
                path.close();
                return Err(e.into());
            }
        };

        // Suspend until the utterance reaches a terminal event or the slot
        // is revoked by a newer conversion or shutdown.
        let outcome = loop {
            tokio::select! {
                event = handle.next_event() => match event {
                    Some(SynthesisEvent::Started) => continue,
                    Some(SynthesisEvent::Finished) => break Ok(()),
                    Some(SynthesisEvent::Error(reason)) => {
                        break Err(ConvertError::Synthesis(SynthesisError::Failed(reason)));
                    }
                    None => {
                        break Err(ConvertError::Synthesis(SynthesisError::Failed(
                            "engine stopped without a terminal event".to_string(),
                        )));
                    }
                },
                _ = slot.cancelled() => {
                    handle.cancel();
                    break Err(ConvertError::Cancelled);
                }
            }
        };

        // The recorder is stopped on success and failure alike so the
        // session never leaks, and the path is closed exactly once.
        session.begin_finalizing()?;
        let stopped = recorder.stop().await;
        path.close();

        outcome?;
        let blob = AudioBlob::new(stopped?, encoding);
        let file_name = output_file_name(&input.text, blob.extension());
        session.complete()?;

        Ok(ConvertOutput { blob, file_name })
    }
}
