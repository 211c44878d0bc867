//! Conversion domain: value objects and rules for one text-to-speech
//! conversion attempt.

mod audio_blob;
mod encoding;
mod filename;
mod request;
mod session;
mod utterance;
mod voice;

pub use audio_blob::AudioBlob;
pub use encoding::{extension_for_mime, negotiate_encoding, NegotiatedEncoding};
pub use filename::output_file_name;
pub use request::{OutputFormat, Pitch, Rate, Volume};
pub use session::{CaptureSession, CaptureState, InvalidStateTransition};
pub use utterance::Utterance;
pub use voice::VoiceHandle;
