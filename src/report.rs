//! Per-creator reports: JSON output and the human-readable text rendering.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::{CadencePacing, MetricsReport};

const RULE_WIDTH: usize = 70;
const SECTION_WIDTH: usize = 40;

/// A creator's metrics, serialized with the creator under `influencer`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatorReport {
    #[serde(rename = "influencer")]
    pub creator: String,
    #[serde(flatten)]
    pub metrics: MetricsReport,
}

impl CreatorReport {
    pub fn new(creator: impl Into<String>, metrics: MetricsReport) -> Self {
        Self {
            creator: creator.into(),
            metrics,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// "alex-hormozi" -> "Alex Hormozi"
    pub fn display_name(&self) -> String {
        self.creator
            .split('-')
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(SECTION_WIDTH))
}

impl fmt::Display for CreatorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.metrics;
        writeln!(f, "LINGUISTIC PATTERN ANALYSIS: {}", self.display_name())?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f)?;

        let id = &m.identity_framing;
        section(f, "1. IDENTITY FRAMING")?;
        writeln!(f, "Primary Frame: {}", id.primary_frame)?;
        writeln!(f, "  YOU-focused: {}% ({} instances)", id.you_percentage, id.you_focused)?;
        writeln!(f, "  I-focused: {}% ({} instances)", id.i_percentage, id.i_focused)?;
        writeln!(f, "  WE-focused: {}% ({} instances)", id.we_percentage, id.we_focused)?;
        writeln!(f)?;

        let emo = &m.emotional_valence;
        section(f, "2. EMOTIONAL VALENCE & AROUSAL")?;
        writeln!(f, "Emotional Tone: {}", emo.emotional_tone.to_uppercase())?;
        writeln!(f, "Arousal Level: {}", emo.arousal_level.to_uppercase())?;
        writeln!(f, "  Positivity Ratio: {}", emo.positivity_ratio)?;
        writeln!(f, "  Urgency Ratio: {}", emo.urgency_ratio)?;
        writeln!(f)?;

        let meta = &m.metaphors;
        section(f, "3. METAPHORICAL FRAMES")?;
        writeln!(f, "Dominant Metaphor: {}", meta.dominant_metaphor.to_uppercase())?;
        writeln!(f, "Metaphor Usage:")?;
        for (name, count) in meta.metaphor_counts.ranked() {
            if count > 0 {
                writeln!(f, "  {name}: {count} references")?;
            }
        }
        writeln!(f)?;

        section(f, "4. SIGNATURE PHRASES")?;
        writeln!(f, "Top 3-word patterns:")?;
        for phrase in &m.repetition.signature_phrases {
            writeln!(f, "  \"{}\" - {}x", phrase.0, phrase.1)?;
        }
        writeln!(f)?;

        let pro = &m.pronouns;
        section(f, "5. PRONOUN PROFILE")?;
        writeln!(f, "Profile: {}", pro.pronoun_profile)?;
        writeln!(f, "  I/me/my: {}% of words", pro.i_ratio)?;
        writeln!(f, "  You/your: {}% of words", pro.you_ratio)?;
        writeln!(f, "  We/us/our: {}% of words", pro.we_ratio)?;
        writeln!(f, "  They/them: {}% of words", pro.they_ratio)?;
        writeln!(f)?;

        let rhet = &m.rhetorical_devices;
        section(f, "6. RHETORICAL DEVICES")?;
        writeln!(f, "Contrast Patterns: {}", rhet.contrast_patterns)?;
        writeln!(
            f,
            "Questions: {} (Rhetorical: {})",
            rhet.questions_total, rhet.rhetorical_questions
        )?;
        writeln!(f, "Numbered Lists: {}", rhet.numbered_lists)?;
        writeln!(f, "Imperatives: {}", rhet.imperatives)?;
        writeln!(f, "Rhetorical Density: {}", rhet.rhetorical_density)?;
        writeln!(f)?;

        let temp = &m.temporal_anchoring;
        section(f, "7. TEMPORAL ANCHORING")?;
        writeln!(f, "Primary Orientation: {}", temp.temporal_orientation.to_uppercase())?;
        writeln!(f, "  Past: {}%", temp.past_percentage)?;
        writeln!(f, "  Present: {}%", temp.present_percentage)?;
        writeln!(f, "  Future: {}%", temp.future_percentage)?;
        writeln!(f)?;

        let sens = &m.sensory_anchors;
        section(f, "8. SENSORY ANCHORS")?;
        writeln!(f, "Dominant Sense: {}", sens.dominant_sense.to_uppercase())?;
        writeln!(f, "  Visual: {} references", sens.visual_count)?;
        writeln!(f, "  Auditory: {} references", sens.auditory_count)?;
        writeln!(f, "  Kinesthetic: {} references", sens.kinesthetic_count)?;
        writeln!(f, "Sensory Richness: {}%", sens.sensory_richness)?;
        writeln!(f)?;

        let fear = &m.fear_vs_aspiration;
        section(f, "9. FEAR VS ASPIRATION")?;
        writeln!(f, "Motivation Style: {}", fear.motivation_style.to_uppercase())?;
        writeln!(f, "  Fear-based: {}%", fear.fear_percentage)?;
        writeln!(f, "  Aspiration-based: {}%", fear.aspiration_percentage)?;
        writeln!(f)?;

        section(f, "10. CADENCE & PACING")?;
        match &m.cadence_pacing {
            CadencePacing::Measured(pace) => {
                writeln!(f, "Pacing Style: {}", pace.pacing_style.to_uppercase())?;
                writeln!(f, "Average Sentence Length: {} words", pace.avg_sentence_length)?;
                writeln!(f, "  Short (<8 words): {}", pace.short_sentences)?;
                writeln!(f, "  Medium (8-20 words): {}", pace.medium_sentences)?;
                writeln!(f, "  Long (>20 words): {}", pace.long_sentences)?;
                writeln!(f, "Rhythm Changes: {}", pace.rhythm_changes)?;
            }
            CadencePacing::Empty { error } => {
                writeln!(f, "{error}")?;
            }
        }
        Ok(())
    }
}

/// The human-readable report for one creator.
pub fn render_text(report: &CreatorReport) -> String {
    report.to_string()
}

pub fn summary_line(report: &CreatorReport) -> String {
    let m = &report.metrics;
    format!(
        "{}: frame={} pronouns={} tone={} metaphor={} temporal={} motivation={}",
        report.display_name(),
        m.identity_framing.primary_frame,
        m.pronouns.pronoun_profile,
        m.emotional_valence.emotional_tone,
        m.metaphors.dominant_metaphor,
        m.temporal_anchoring.temporal_orientation,
        m.fear_vs_aspiration.motivation_style,
    )
}
