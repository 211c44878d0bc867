//! Speech synthesis infrastructure module
//!
//! Provides text-to-speech through the espeak-ng engine (or a compatible
//! drop-in like espeak), streaming rendered WAV audio into the capture
//! routing path.

mod espeak;

pub use espeak::EspeakSynthesizer;
