//! Platform voice reference

use std::fmt;

/// Opaque reference to a voice owned by the synthesis engine.
///
/// The engine enumerates these lazily; this system never validates the name
/// beyond passing it back to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceHandle {
    pub name: String,
    pub language: String,
}

impl VoiceHandle {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
        }
    }
}

impl fmt::Display for VoiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_language() {
        let voice = VoiceHandle::new("en-us", "en");
        assert_eq!(voice.to_string(), "en-us (en)");
    }
}
