//! Finalized capture result value object

use super::encoding::NegotiatedEncoding;

/// The finalized audio produced by one capture session: raw encoded bytes
/// tagged with the negotiated mime type. Immutable once produced.
///
/// A zero-byte blob is legal; it means synthesis completed without routing
/// any audio into the recorder and callers should warn rather than silently
/// deliver an empty file.
#[derive(Debug, Clone)]
pub struct AudioBlob {
    data: Vec<u8>,
    encoding: NegotiatedEncoding,
}

impl AudioBlob {
    /// Create a blob from captured bytes
    pub fn new(data: Vec<u8>, encoding: NegotiatedEncoding) -> Self {
        Self { data, encoding }
    }

    /// Get the raw bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn encoding(&self) -> &NegotiatedEncoding {
        &self.encoding
    }

    pub fn mime_type(&self) -> &str {
        self.encoding.mime_type()
    }

    pub fn extension(&self) -> &'static str {
        self.encoding.extension()
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// True when the capture produced no audio at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
