//! Output filename derivation

/// Derive the output filename from the spoken text: the first three
/// whitespace-separated words joined with underscores, then
/// `_speech.<extension>`.
///
/// Tokens are used verbatim; the caller is expected to have validated that
/// the text is non-blank.
pub fn output_file_name(text: &str, extension: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().take(3).collect();
    format!("{}_speech.{}", words.join("_"), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_first_three_words() {
        assert_eq!(
            output_file_name("Hello world test", "mp3"),
            "Hello_world_test_speech.mp3"
        );
    }

    #[test]
    fn ignores_words_past_the_third() {
        assert_eq!(
            output_file_name("one two three four five", "wav"),
            "one_two_three_speech.wav"
        );
    }

    #[test]
    fn handles_short_texts() {
        assert_eq!(output_file_name("Hi", "ogg"), "Hi_speech.ogg");
        assert_eq!(output_file_name("Hi there", "ogg"), "Hi_there_speech.ogg");
    }

    #[test]
    fn collapses_irregular_whitespace() {
        assert_eq!(
            output_file_name("  spaced\tout\n text here ", "webm"),
            "spaced_out_text_speech.webm"
        );
    }
}
