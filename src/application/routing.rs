//! Audio routing path
//!
//! The in-process plumbing that connects synthesized speech output to a
//! recordable stream: a bounded chunk channel with a sink end handed to the
//! synthesizer and a stream end handed to the recorder.

use tokio::sync::mpsc;

/// Chunks in flight before the writer backpressures. Recorders drain
/// eagerly, so this only buffers scheduling jitter.
const CHANNEL_CAPACITY: usize = 64;

/// The write end of a routing path. Cloneable; the path stays open while any
/// sink exists.
#[derive(Clone)]
pub struct AudioSink {
    tx: mpsc::Sender<Vec<u8>>,
}

impl AudioSink {
    /// Write one chunk of rendered audio. Returns false when the stream end
    /// has shut off and the chunk was discarded.
    pub async fn write(&self, chunk: Vec<u8>) -> bool {
        self.tx.send(chunk).await.is_ok()
    }
}

/// The recordable end of a routing path.
pub struct AudioStream {
    rx: mpsc::Receiver<Vec<u8>>,
}

impl AudioStream {
    /// Receive the next chunk, or `None` once the path is closed and all
    /// delivered chunks have been taken.
    pub async fn next_chunk(&mut self) -> Option<Vec<u8>> {
        self.rx.recv().await
    }

    /// Stop accepting new chunks. Chunks already delivered remain readable
    /// until `next_chunk` returns `None`, which preserves the
    /// chunks-before-finalize ordering contract.
    pub fn shut_off(&mut self) {
        self.rx.close();
    }
}

/// An open audio routing path. Owns the originating sink; consuming
/// [`RoutingPath::close`] (or dropping the path) releases it, and the path
/// is fully closed once the synthesizer's sink clones are gone too.
pub struct RoutingPath {
    tx: mpsc::Sender<Vec<u8>>,
}

impl RoutingPath {
    /// Open a routing path, returning the path and its recordable end.
    pub fn open() -> (Self, AudioStream) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        (Self { tx }, AudioStream { rx })
    }

    /// Get a sink for the synthesizer to write into.
    pub fn sink(&self) -> AudioSink {
        AudioSink {
            tx: self.tx.clone(),
        }
    }

    /// Tear the path down. Consuming self makes the close point explicit and
    /// unrepeatable; every pipeline exit either calls this or drops the path.
    pub fn close(self) {
        drop(self.tx);
    }
}
