//! Speech synthesis port interface

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

use crate::application::routing::AudioSink;
use crate::domain::conversion::{Utterance, VoiceHandle};

/// Synthesis errors
#[derive(Debug, Clone, Error)]
pub enum SynthesisError {
    #[error("Speech engine not found: {0}. Install espeak-ng or configure another engine")]
    EngineNotFound(String),

    #[error("Failed to start synthesis: {0}")]
    StartFailed(String),

    #[error("Speech synthesis error: {0}")]
    Failed(String),

    #[error("Failed to list voices: {0}")]
    VoiceListFailed(String),
}

/// Lifecycle events the engine emits for one utterance.
///
/// Exactly one terminal event (`Finished` or `Error`) is delivered per
/// utterance unless the handle is cancelled first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisEvent {
    Started,
    Finished,
    Error(String),
}

/// Handle to one in-flight utterance.
///
/// Audio is delivered out-of-band through the routing path the utterance was
/// started with; this handle only carries lifecycle events and cancellation.
pub struct SynthesisHandle {
    events: mpsc::Receiver<SynthesisEvent>,
    cancel: Option<oneshot::Sender<()>>,
}

impl SynthesisHandle {
    /// Create a handle from its event channel and cancel trigger.
    /// Adapters construct this; the pipeline consumes it.
    pub fn new(events: mpsc::Receiver<SynthesisEvent>, cancel: oneshot::Sender<()>) -> Self {
        Self {
            events,
            cancel: Some(cancel),
        }
    }

    /// Next lifecycle event. `None` means the engine went away without a
    /// terminal event, which callers must treat as a failure.
    pub async fn next_event(&mut self) -> Option<SynthesisEvent> {
        self.events.recv().await
    }

    /// Stop the utterance. The engine emits no further events afterwards.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
    }
}

/// Port for the platform speech-synthesis engine
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Start speaking `utterance`, routing rendered audio into `sink`.
    ///
    /// Returns once the utterance has been handed to the engine; rendering
    /// continues in the background and completion is reported through the
    /// handle's lifecycle events. All audio for the utterance is written to
    /// the sink before the terminal event is emitted.
    async fn speak(
        &self,
        utterance: &Utterance,
        sink: AudioSink,
    ) -> Result<SynthesisHandle, SynthesisError>;

    /// Enumerate the voices the engine offers.
    async fn voices(&self) -> Result<Vec<VoiceHandle>, SynthesisError>;
}
