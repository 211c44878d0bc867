//! Utterance value object

use super::request::{Pitch, Rate, Volume};
use super::voice::VoiceHandle;

/// One discrete request to the speech engine: a string to vocalize with the
/// given voice, rate, pitch and volume.
#[derive(Debug, Clone)]
pub struct Utterance {
    pub text: String,
    pub voice: Option<VoiceHandle>,
    pub rate: Rate,
    pub pitch: Pitch,
    pub volume: Volume,
}

impl Utterance {
    /// Create an utterance with default parameters
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: None,
            rate: Rate::default(),
            pitch: Pitch::default(),
            volume: Volume::default(),
        }
    }

    pub fn with_voice(mut self, voice: Option<VoiceHandle>) -> Self {
        self.voice = voice;
        self
    }

    pub fn with_rate(mut self, rate: Rate) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_pitch(mut self, pitch: Pitch) -> Self {
        self.pitch = pitch;
        self
    }

    pub fn with_volume(mut self, volume: Volume) -> Self {
        self.volume = volume;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_parameters() {
        let utterance = Utterance::new("hello")
            .with_voice(Some(VoiceHandle::new("en-us", "en")))
            .with_rate(Rate::new(1.5))
            .with_pitch(Pitch::new(0.8))
            .with_volume(Volume::new(0.25));

        assert_eq!(utterance.text, "hello");
        assert_eq!(utterance.voice.as_ref().unwrap().name, "en-us");
        assert_eq!(utterance.rate.value(), 1.5);
        assert_eq!(utterance.pitch.value(), 0.8);
        assert_eq!(utterance.volume.value(), 0.25);
    }
}
