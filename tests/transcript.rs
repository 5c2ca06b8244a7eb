use std::path::PathBuf;

use linguistic_fingerprint::{render_text, summary_line, Error, Transcript};

/// A per-test directory under the system temp dir, removed on drop.
struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(test: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "linguistic-fingerprint-{}-{test}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.0.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

#[test]
fn loads_transcript_body_after_marker() {
    let scratch = ScratchDir::new("loads_transcript_body_after_marker");
    let path = scratch.file(
        "jane-doe-raw-language.txt",
        "CREATOR: Jane Doe\nSOURCE VIDEOS: 4\n\nCLEANED TRANSCRIPT TEXT:\n==========\nWe build together. You grow fast.",
    );
    let transcript = Transcript::load(&path).unwrap();
    assert_eq!(transcript.creator, "jane-doe");
    assert_eq!(transcript.text, "We build together. You grow fast.");

    let report = transcript.analyze();
    assert_eq!(report.metrics.word_count, 6);
    assert_eq!(report.metrics.sentence_count, 2);

    let dir = scratch.0.clone();
    drop(scratch);
    assert!(!dir.exists());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Transcript::load(std::path::Path::new("/nonexistent/nobody-raw-language.txt"))
        .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("nobody-raw-language.txt"));
}

#[test]
fn creator_report_json_carries_influencer() {
    let report = Transcript::new("jane-doe", "I love this game and play to win.").analyze();
    let json: serde_json::Value = serde_json::from_str(&report.to_json(true).unwrap()).unwrap();
    assert_eq!(json["influencer"], "jane-doe");
    assert_eq!(json["word_count"], 8);
    assert_eq!(json["metaphors"]["dominant_metaphor"], "game");
    assert_eq!(json["pronouns"]["pronoun_profile"], "Authority/Expertise");
}

#[test]
fn text_report_has_all_sections() {
    let report = Transcript::new("jane-doe", "I love this game and play to win.").analyze();
    let text = render_text(&report);
    assert!(text.starts_with("LINGUISTIC PATTERN ANALYSIS: Jane Doe"));
    for heading in [
        "1. IDENTITY FRAMING",
        "2. EMOTIONAL VALENCE & AROUSAL",
        "3. METAPHORICAL FRAMES",
        "4. SIGNATURE PHRASES",
        "5. PRONOUN PROFILE",
        "6. RHETORICAL DEVICES",
        "7. TEMPORAL ANCHORING",
        "8. SENSORY ANCHORS",
        "9. FEAR VS ASPIRATION",
        "10. CADENCE & PACING",
    ] {
        assert!(text.contains(heading), "missing {heading}");
    }
    assert!(text.contains("  game: 2 references"));
    assert!(text.contains("Pacing Style: PUNCHY"));
}

#[test]
fn summary_line_names_the_creator() {
    let report = Transcript::new("jane-doe", "I love this game and play to win.").analyze();
    let line = summary_line(&report);
    assert!(line.starts_with("Jane Doe:"));
    assert!(line.contains("metaphor=game"));
}
