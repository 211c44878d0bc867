//! WAV passthrough recorder

use async_trait::async_trait;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::application::ports::{CaptureError, Recorder};
use crate::application::routing::AudioStream;

/// Recorder that accumulates the engine's native WAV stream as-is.
///
/// Accumulation starts on construction; `stop` drains chunks already
/// delivered to the routing path before finalizing, so nothing written
/// before the stop is lost.
pub struct PassthroughRecorder {
    stop_tx: oneshot::Sender<()>,
    task: JoinHandle<Vec<u8>>,
}

impl PassthroughRecorder {
    pub fn new(mut stream: AudioStream) -> Self {
        let (stop_tx, mut stop_rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let mut bytes = Vec::new();
            loop {
                tokio::select! {
                    chunk = stream.next_chunk() => match chunk {
                        Some(chunk) if !chunk.is_empty() => bytes.extend_from_slice(&chunk),
                        Some(_) => {}
                        None => break,
                    },
                    _ = &mut stop_rx => {
                        stream.shut_off();
                        while let Some(chunk) = stream.next_chunk().await {
                            if !chunk.is_empty() {
                                bytes.extend_from_slice(&chunk);
                            }
                        }
                        break;
                    }
                }
            }
            bytes
        });
        Self { stop_tx, task }
    }
}

#[async_trait]
impl Recorder for PassthroughRecorder {
    async fn stop(self: Box<Self>) -> Result<Vec<u8>, CaptureError> {
        let Self { stop_tx, task } = *self;
        let _ = stop_tx.send(());
        task.await
            .map_err(|e| CaptureError::FinalizeFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::routing::RoutingPath;

    #[tokio::test]
    async fn accumulates_chunks_in_order() {
        let (path, stream) = RoutingPath::open();
        let recorder = Box::new(PassthroughRecorder::new(stream));

        let sink = path.sink();
        assert!(sink.write(vec![1, 2]).await);
        assert!(sink.write(vec![3]).await);
        assert!(sink.write(Vec::new()).await); // empty chunks are skipped
        assert!(sink.write(vec![4]).await);

        let bytes = recorder.stop().await.unwrap();
        assert_eq!(bytes, vec![1, 2, 3, 4]);
        path.close();
    }

    #[tokio::test]
    async fn no_data_finalizes_to_empty() {
        let (path, stream) = RoutingPath::open();
        let recorder = Box::new(PassthroughRecorder::new(stream));

        let bytes = recorder.stop().await.unwrap();
        assert!(bytes.is_empty());
        path.close();
    }

    #[tokio::test]
    async fn stops_on_its_own_when_path_closes() {
        let (path, stream) = RoutingPath::open();
        let recorder = Box::new(PassthroughRecorder::new(stream));

        let sink = path.sink();
        assert!(sink.write(vec![7, 8]).await);
        drop(sink);
        path.close();

        let bytes = recorder.stop().await.unwrap();
        assert_eq!(bytes, vec![7, 8]);
    }
}
