//! Recording-format capability negotiation
//!
//! The recorder backend exposes which mime types it can produce; this module
//! turns a user's format preference into a concrete (mime type, extension)
//! pair, degrading through a fixed fallback order. There is no failure mode:
//! a usable pair always comes out.

use super::request::OutputFormat;

/// First choice mime type for each format preference
const COMPRESSED_FIRST_CHOICE: &str = "audio/mpeg";
const UNCOMPRESSED_FIRST_CHOICE: &str = "audio/wav";

/// Probe order when the first choice is unsupported
const FALLBACK_ORDER: [&str; 5] = [
    "audio/webm",
    "audio/ogg",
    "audio/wav",
    "audio/mp3",
    "audio/mpeg",
];

/// Assumed universally available when nothing else is
const LAST_RESORT: &str = "audio/webm";

/// A negotiated recording encoding: the mime type the recorder will be
/// configured with and the file extension derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegotiatedEncoding {
    mime_type: String,
    extension: &'static str,
}

impl NegotiatedEncoding {
    /// Create an encoding from a mime type, deriving the extension
    pub fn new(mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        let extension = extension_for_mime(&mime_type);
        Self {
            mime_type,
            extension,
        }
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn extension(&self) -> &'static str {
        self.extension
    }
}

/// Pick the mime type to record with.
///
/// `is_supported` is the platform capability query (the recorder's
/// `is_type_supported`). The first choice follows the format preference;
/// unsupported choices degrade through the fixed fallback order, and when
/// nothing at all is supported the result is `audio/webm`.
pub fn negotiate_encoding<F>(preferred: OutputFormat, is_supported: F) -> NegotiatedEncoding
where
    F: Fn(&str) -> bool,
{
    let first_choice = match preferred {
        OutputFormat::Compressed => COMPRESSED_FIRST_CHOICE,
        OutputFormat::Uncompressed => UNCOMPRESSED_FIRST_CHOICE,
    };

    if is_supported(first_choice) {
        return NegotiatedEncoding::new(first_choice);
    }

    for candidate in FALLBACK_ORDER {
        if is_supported(candidate) {
            return NegotiatedEncoding::new(candidate);
        }
    }

    NegotiatedEncoding::new(LAST_RESORT)
}

/// Derive a file extension from a mime type by substring match.
///
/// Tokens are checked in priority order so that e.g.
/// "audio/webm;codecs=opus" still maps to webm.
pub fn extension_for_mime(mime_type: &str) -> &'static str {
    if mime_type.contains("webm") {
        "webm"
    } else if mime_type.contains("ogg") {
        "ogg"
    } else if mime_type.contains("wav") {
        "wav"
    } else if mime_type.contains("mp3") || mime_type.contains("mpeg") {
        "mp3"
    } else {
        "webm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compressed_prefers_mpeg_when_supported() {
        let enc = negotiate_encoding(OutputFormat::Compressed, |m| m == "audio/mpeg");
        assert_eq!(enc.mime_type(), "audio/mpeg");
        assert_eq!(enc.extension(), "mp3");
    }

    #[test]
    fn uncompressed_prefers_wav_when_supported() {
        let enc = negotiate_encoding(OutputFormat::Uncompressed, |m| m.contains("wav"));
        assert!(enc.mime_type().contains("wav"));
        assert_eq!(enc.extension(), "wav");
    }

    #[test]
    fn falls_back_in_fixed_order() {
        // mpeg unsupported, ogg is the first supported fallback
        let enc = negotiate_encoding(OutputFormat::Compressed, |m| {
            m == "audio/ogg" || m == "audio/mp3"
        });
        assert_eq!(enc.mime_type(), "audio/ogg");
        assert_eq!(enc.extension(), "ogg");
    }

    #[test]
    fn uncompressed_degrades_to_webm_first() {
        // wav unsupported; webm heads the fallback list
        let enc = negotiate_encoding(OutputFormat::Uncompressed, |m| m != "audio/wav");
        assert_eq!(enc.mime_type(), "audio/webm");
        assert_eq!(enc.extension(), "webm");
    }

    #[test]
    fn all_unsupported_defaults_to_webm() {
        let enc = negotiate_encoding(OutputFormat::Compressed, |_| false);
        assert_eq!(enc.mime_type(), "audio/webm");
        assert_eq!(enc.extension(), "webm");
    }

    #[test]
    fn always_yields_nonempty_pair() {
        for preferred in [OutputFormat::Compressed, OutputFormat::Uncompressed] {
            for mask in 0u8..32 {
                let enc = negotiate_encoding(preferred, |m| {
                    FALLBACK_ORDER
                        .iter()
                        .position(|c| *c == m)
                        .is_some_and(|i| mask & (1 << i) != 0)
                });
                assert!(!enc.mime_type().is_empty());
                assert!(!enc.extension().is_empty());
            }
        }
    }

    #[test]
    fn extension_substring_priority() {
        assert_eq!(extension_for_mime("audio/webm;codecs=opus"), "webm");
        assert_eq!(extension_for_mime("audio/ogg"), "ogg");
        assert_eq!(extension_for_mime("audio/wav"), "wav");
        assert_eq!(extension_for_mime("audio/mp3"), "mp3");
        assert_eq!(extension_for_mime("audio/mpeg"), "mp3");
        assert_eq!(extension_for_mime("application/octet-stream"), "webm");
    }

    #[test]
    fn encoding_extension_matches_mime() {
        for mime in FALLBACK_ORDER {
            let enc = NegotiatedEncoding::new(mime);
            assert_eq!(enc.extension(), extension_for_mime(mime));
        }
    }
}
