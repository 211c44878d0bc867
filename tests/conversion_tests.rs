//! Conversion contract tests against the public API

use voxfile::application::sessions::SessionManager;
use voxfile::domain::conversion::{
    extension_for_mime, negotiate_encoding, output_file_name, AudioBlob, CaptureSession,
    CaptureState, NegotiatedEncoding, OutputFormat,
};

#[test]
fn uncompressed_yields_wav_whenever_wav_is_supported() {
    // any support set that includes wav must land on it for uncompressed
    for extra in [vec![], vec!["audio/mpeg"], vec!["audio/webm", "audio/ogg"]] {
        let encoding = negotiate_encoding(OutputFormat::Uncompressed, |mime| {
            mime == "audio/wav" || extra.contains(&mime)
        });
        assert!(encoding.mime_type().contains("wav"));
        assert_eq!(encoding.extension(), "wav");
    }
}

#[test]
fn negotiation_never_comes_back_empty() {
    let candidates = [
        "audio/webm",
        "audio/ogg",
        "audio/wav",
        "audio/mp3",
        "audio/mpeg",
    ];
    for preferred in [OutputFormat::Compressed, OutputFormat::Uncompressed] {
        for mask in 0u8..32 {
            let encoding = negotiate_encoding(preferred, |mime| {
                candidates
                    .iter()
                    .position(|c| *c == mime)
                    .is_some_and(|i| mask & (1 << i) != 0)
            });
            assert!(!encoding.mime_type().is_empty());
            assert!(!encoding.extension().is_empty());
        }
    }
}

#[test]
fn blob_extension_always_matches_its_mime() {
    for mime in ["audio/mp3", "audio/mpeg", "audio/ogg", "audio/wav", "audio/webm"] {
        let blob = AudioBlob::new(vec![0u8; 4], NegotiatedEncoding::new(mime));
        assert_eq!(blob.extension(), extension_for_mime(blob.mime_type()));
    }
}

#[test]
fn hello_world_scenario() {
    // "Hello world test", compressed, platform supports audio/mpeg
    let encoding = negotiate_encoding(OutputFormat::Compressed, |mime| mime == "audio/mpeg");
    assert_eq!(encoding.mime_type(), "audio/mpeg");
    assert_eq!(encoding.extension(), "mp3");
    assert_eq!(
        output_file_name("Hello world test", encoding.extension()),
        "Hello_world_test_speech.mp3"
    );
}

#[test]
fn capture_session_walks_the_documented_states() {
    let mut session = CaptureSession::new();
    assert_eq!(session.state(), CaptureState::Idle);
    session.begin_routing().unwrap();
    session.begin_recording().unwrap();
    session.begin_finalizing().unwrap();
    session.complete().unwrap();
    assert!(session.is_terminal());
}

#[tokio::test]
async fn a_newer_session_always_revokes_the_older_one() {
    let manager = SessionManager::new();

    let mut first = manager.acquire().await;
    let revoked = tokio::spawn(async move {
        first.cancelled().await;
        true
    });

    let _second = manager.acquire().await;
    assert!(tokio::time::timeout(std::time::Duration::from_secs(1), revoked)
        .await
        .expect("older session must settle, never hang")
        .unwrap());
}
