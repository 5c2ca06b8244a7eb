//! Loading a creator's raw-language transcript file.
//!
//! Files are named `<creator>-raw-language.txt`. They open with a metadata header; the cleaned
//! transcript body begins two lines below the `CLEANED TRANSCRIPT TEXT:` marker.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::report::CreatorReport;

const BODY_MARKER: &str = "CLEANED TRANSCRIPT TEXT:";
const FILE_SUFFIX: &str = "-raw-language";

/// The creator a transcript file belongs to, taken from its file name.
pub fn creator_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match stem.strip_suffix(FILE_SUFFIX) {
        Some(name) => name.to_string(),
        None => stem,
    }
}

/// The transcript body of a raw-language file. Content without the header marker is
/// returned whole.
pub fn extract_transcript(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    match lines.iter().position(|line| line.contains(BODY_MARKER)) {
        // The line after the marker is a separator rule.
        Some(marker) => lines.get(marker + 2..).unwrap_or_default().join("\n"),
        None => content.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct Transcript {
    pub creator: String,
    pub text: String,
}

impl Transcript {
    pub fn new(creator: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            creator: creator.into(),
            text: text.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let creator = creator_name(path);
        if !content.contains(BODY_MARKER) {
            warn!(%creator, path = %path.display(), "no transcript marker, analyzing whole file");
        }
        let text = extract_transcript(&content);
        debug!(%creator, bytes = text.len(), "loaded transcript");
        Ok(Self { creator, text })
    }

    pub fn analyze(&self) -> CreatorReport {
        CreatorReport {
            creator: self.creator.clone(),
            metrics: crate::analyze(&self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creator_name_strips_suffix() {
        assert_eq!(
            creator_name(Path::new("data/alex-hormozi-raw-language.txt")),
            "alex-hormozi"
        );
        assert_eq!(creator_name(Path::new("notes.txt")), "notes");
    }

    #[test]
    fn extract_skips_header_and_separator() {
        let content = "CREATOR: Someone\nVIDEOS: 3\n\nCLEANED TRANSCRIPT TEXT:\n=====\nfirst line\nsecond line";
        assert_eq!(extract_transcript(content), "first line\nsecond line");
    }

    #[test]
    fn extract_without_marker_keeps_everything() {
        assert_eq!(extract_transcript("just words here"), "just words here");
    }

    #[test]
    fn extract_marker_on_last_line_is_empty() {
        assert_eq!(extract_transcript("header\nCLEANED TRANSCRIPT TEXT:"), "");
    }
}
