use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

pub mod error;
pub mod report;
pub mod transcript;

pub use error::{Error, Result};
pub use report::{render_text, summary_line, CreatorReport};
pub use transcript::{creator_name, extract_transcript, Transcript};

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// A phrase and how often it occurs. Serializes as `[phrase, count]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseCount(pub String, pub usize);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentityFraming {
    pub you_focused: usize,
    pub i_focused: usize,
    pub we_focused: usize,
    pub you_percentage: f64,
    pub i_percentage: f64,
    pub we_percentage: f64,
    pub primary_frame: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionalValence {
    pub positive_count: usize,
    pub negative_count: usize,
    pub positivity_ratio: f64,
    pub urgent_count: usize,
    pub calm_count: usize,
    pub urgency_ratio: f64,
    pub emotional_tone: String,
    pub arousal_level: String,
}

/// Per-category metaphor counts, serialized in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetaphorCounts {
    pub journey: usize,
    pub war: usize,
    pub building: usize,
    pub game: usize,
    pub nature: usize,
    pub machine: usize,
}

impl MetaphorCounts {
    /// Categories paired with their counts, in tie-break order.
    pub fn ranked(&self) -> [(&'static str, usize); 6] {
        [
            ("journey", self.journey),
            ("war", self.war),
            ("building", self.building),
            ("game", self.game),
            ("nature", self.nature),
            ("machine", self.machine),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metaphors {
    pub metaphor_counts: MetaphorCounts,
    pub dominant_metaphor: String,
    pub metaphor_diversity: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Repetition {
    pub top_bigrams: Vec<PhraseCount>,
    pub top_trigrams: Vec<PhraseCount>,
    pub top_fourgrams: Vec<PhraseCount>,
    pub signature_phrases: Vec<PhraseCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PronounRatios {
    pub i_count: usize,
    pub you_count: usize,
    pub we_count: usize,
    pub they_count: usize,
    pub i_ratio: f64,
    pub you_ratio: f64,
    pub we_ratio: f64,
    pub they_ratio: f64,
    pub pronoun_profile: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RhetoricalDevices {
    pub contrast_patterns: usize,
    pub questions_total: usize,
    pub rhetorical_questions: usize,
    pub numbered_lists: usize,
    pub imperatives: usize,
    pub rhetorical_density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalAnchoring {
    pub past_focus: usize,
    pub present_focus: usize,
    pub future_focus: usize,
    pub past_percentage: f64,
    pub present_percentage: f64,
    pub future_percentage: f64,
    pub temporal_orientation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensoryAnchors {
    pub visual_count: usize,
    pub auditory_count: usize,
    pub kinesthetic_count: usize,
    pub dominant_sense: String,
    pub sensory_richness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FearVsAspiration {
    pub fear_count: usize,
    pub aspiration_count: usize,
    pub fear_percentage: f64,
    pub aspiration_percentage: f64,
    pub motivation_style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CadenceStats {
    pub avg_sentence_length: f64,
    pub shortest_sentence: usize,
    pub longest_sentence: usize,
    pub short_sentences: usize,
    pub medium_sentences: usize,
    pub long_sentences: usize,
    pub rhythm_changes: usize,
    pub pacing_style: String,
}

/// Sentence cadence. A document without sentences has no cadence to measure,
/// which is reported as `{"error": "No sentences found"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CadencePacing {
    Measured(CadenceStats),
    Empty { error: String },
}

pub const NO_SENTENCES: &str = "No sentences found";

impl CadencePacing {
    pub fn stats(&self) -> Option<&CadenceStats> {
        match self {
            CadencePacing::Measured(stats) => Some(stats),
            CadencePacing::Empty { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CadencePacing::Empty { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub word_count: usize,
    pub sentence_count: usize,
    pub identity_framing: IdentityFraming,
    pub emotional_valence: EmotionalValence,
    pub metaphors: Metaphors,
    pub repetition: Repetition,
    pub pronouns: PronounRatios,
    pub rhetorical_devices: RhetoricalDevices,
    pub temporal_anchoring: TemporalAnchoring,
    pub sensory_anchors: SensoryAnchors,
    pub fear_vs_aspiration: FearVsAspiration,
    pub cadence_pacing: CadencePacing,
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    top_bigrams: usize,
    top_trigrams: usize,
    top_fourgrams: usize,
    signature_phrases: usize,
    short_sentence_max_words: usize,
    long_sentence_min_words: usize,
    rhythm_change_min_diff: usize,
    punchy_avg_below: f64,
    flowing_avg_above: f64,
    percentage_places: i32,
    ratio_places: i32,
    average_places: i32,
}

static HP: Hyperparameters = Hyperparameters {
    top_bigrams: 10,
    top_trigrams: 10,
    top_fourgrams: 5,
    signature_phrases: 5,
    short_sentence_max_words: 8,
    long_sentence_min_words: 20,
    rhythm_change_min_diff: 10,
    punchy_avg_below: 12.0,
    flowing_avg_above: 18.0,
    percentage_places: 1,
    ratio_places: 2,
    average_places: 1,
};

// ---------------------------------------------------------------------------
// Lexicons
// ---------------------------------------------------------------------------

fn word_set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "amazing", "awesome", "beautiful", "best", "brilliant", "excellent", "fantastic", "good",
        "great", "happy", "love", "perfect", "positive", "success", "wonderful", "win", "winning",
        "opportunity", "growth", "achieve", "accomplish", "thrive", "prosper", "excel", "master",
    ])
});

static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "afraid", "angry", "bad", "broken", "danger", "dead", "death", "difficult", "fail",
        "failure", "fear", "hate", "horrible", "hurt", "lose", "loss", "mistake", "negative",
        "never", "no", "not", "pain", "problem", "sad", "terrible", "wrong", "worst", "crisis",
    ])
});

static URGENT_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "now", "immediately", "urgent", "quick", "fast", "hurry", "asap", "today", "must",
        "need", "critical", "important",
    ])
});

static CALM_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "relax", "calm", "peace", "steady", "patient", "gradual", "slowly", "eventually",
        "sometime", "whenever", "perhaps",
    ])
});

// Same order as `MetaphorCounts`: journey, war, building, game, nature, machine.
static METAPHOR_WORDS: Lazy<[HashSet<&'static str>; 6]> = Lazy::new(|| {
    [
        word_set(&["journey", "path", "road", "destination", "step", "milestone", "progress"]),
        word_set(&[
            "battle", "fight", "attack", "defend", "strategy", "weapon", "victory", "defeat",
        ]),
        word_set(&["build", "foundation", "construct", "structure", "framework", "blueprint"]),
        word_set(&["game", "play", "win", "lose", "score", "rules", "level", "player"]),
        word_set(&["grow", "seed", "plant", "harvest", "bloom", "root", "branch"]),
        word_set(&["system", "process", "mechanism", "engine", "operate", "function"]),
    ]
});

static I_PRONOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&["i", "i'm", "i've", "i'll", "i'd", "me", "my", "mine", "myself"])
});

static YOU_PRONOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&["you", "you're", "you've", "you'll", "you'd", "your", "yours", "yourself"])
});

static WE_PRONOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&["we", "we're", "we've", "we'll", "we'd", "us", "our", "ours", "ourselves"])
});

static THEY_PRONOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&["they", "they're", "they've", "they'll", "they'd", "them", "their", "theirs"])
});

// Multi-word entries never equal a single token; they stay for parity with the word lists
// the profiles were built from.
static PAST_INDICATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "was", "were", "had", "did", "used to", "remember", "back then", "previously", "before",
        "yesterday", "last", "ago", "history",
    ])
});

static PRESENT_INDICATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "is", "are", "now", "today", "currently", "right now", "at this moment", "these days",
        "nowadays",
    ])
});

static FUTURE_INDICATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "will", "going to", "gonna", "shall", "tomorrow", "soon", "eventually", "later", "next",
        "future", "upcoming",
    ])
});

static VISUAL_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "see", "look", "watch", "picture", "imagine", "visualize", "appear", "show", "view",
        "observe", "notice", "glimpse", "vision",
    ])
});

static AUDITORY_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "hear", "listen", "sound", "tell", "say", "speak", "voice", "tone", "ring", "echo",
        "whisper", "loud", "quiet",
    ])
});

static KINESTHETIC_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "feel", "touch", "grab", "hold", "push", "pull", "heavy", "light", "smooth", "rough",
        "warm", "cold", "pressure",
    ])
});

static FEAR_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "afraid", "fear", "danger", "risk", "threat", "avoid", "escape", "protect", "defend",
        "lose", "miss", "fail", "mistake", "regret", "worried", "anxious", "scared", "terrified",
    ])
});

static ASPIRATION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "achieve", "success", "grow", "improve", "goal", "dream", "vision", "opportunity",
        "potential", "possibility", "win", "gain", "benefit", "reward", "accomplish", "excel",
        "thrive",
    ])
});

// ---------------------------------------------------------------------------
// Stopwords
// ---------------------------------------------------------------------------

static NGRAM_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    word_set(&[
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "was", "are", "were",
    ])
});

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

fn word_alternation(words: &[&str]) -> Regex {
    let alt = words
        .iter()
        .map(|w| format!(r"\b{}\b", regex::escape(w)))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alt).unwrap()
}

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static YOU_FRAME_RE: Lazy<Regex> = Lazy::new(|| {
    word_alternation(&["you", "your", "you're", "you've", "you'll", "you'd"])
});

static I_FRAME_RE: Lazy<Regex> = Lazy::new(|| {
    word_alternation(&["i", "my", "me", "i'm", "i've", "i'll", "i'd", "mine"])
});

static WE_FRAME_RE: Lazy<Regex> = Lazy::new(|| {
    word_alternation(&["we", "our", "us", "we're", "we've", "we'll", "we'd", "ours"])
});

static CONTRAST_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\bnot\s+\w+,?\s+but\b").unwrap(),
        Regex::new(r"\binstead of\b").unwrap(),
        Regex::new(r"\brather than\b").unwrap(),
    ]
});

static QUESTION_MARK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\?").unwrap());

static RHETORICAL_QUESTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"have you ever|do you think|what if|why do|how can").unwrap());

// "one", "two" and "three" also match plain number words.
static LIST_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:first|second|third|one|two|three)\b|\b[123]\.").unwrap()
});

static IMPERATIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?:do|don't|stop|start|think|imagine|remember|consider)").unwrap()
});

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `part / total * 100`, or 0 when `total` is zero.
fn percentage(part: usize, total: usize, places: i32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(part as f64 / total as f64 * 100.0, places)
}

/// `part / total`, or 0 when `total` is zero.
fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(part as f64 / total as f64, HP.ratio_places)
}

fn count_in(tokens: &[String], words: &HashSet<&'static str>) -> usize {
    tokens.iter().filter(|t| words.contains(t.as_str())).count()
}

fn count_matches(re: &Regex, text: &str) -> usize {
    re.find_iter(text).count()
}

/// The label with the strictly greatest count. Earlier entries win ties.
fn dominant(ranked: &[(&'static str, usize)]) -> &'static str {
    let mut best: Option<(&'static str, usize)> = None;
    for &(label, count) in ranked {
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label).unwrap_or_default()
}

/// Count contiguous `n`-word phrases, skipping those made only of stopwords, and
/// return the `top_k` most frequent. Equal counts keep first-seen order.
fn ranked_ngrams(tokens: &[String], n: usize, top_k: usize) -> Vec<PhraseCount> {
    let mut phrases: Vec<PhraseCount> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for window in tokens.windows(n) {
        if window.iter().all(|w| NGRAM_STOPWORDS.contains(w.as_str())) {
            continue;
        }
        let phrase = window.join(" ");
        match slots.get(&phrase) {
            Some(&slot) => phrases[slot].1 += 1,
            None => {
                slots.insert(phrase.clone(), phrases.len());
                phrases.push(PhraseCount(phrase, 1));
            }
        }
    }

    // `sort_by` is stable, so ties stay in insertion order.
    phrases.sort_by(|a, b| b.1.cmp(&a.1));
    phrases.truncate(top_k);
    phrases
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A cleaned transcript, tokenized and segmented once for every analysis.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    tokens: Vec<String>,
    sentences: Vec<String>,
}

impl Document {
    pub fn new(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let tokens = lowered.split_whitespace().map(str::to_string).collect();
        let sentences = SENTENCE_SPLIT_RE
            .split(text)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self {
            text: lowered,
            tokens,
            sentences,
        }
    }

    /// The lowercased full text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn analyze(&self) -> MetricsReport {
        debug!(
            word_count = self.word_count(),
            sentence_count = self.sentence_count(),
            "analyzing document"
        );

        let report = MetricsReport {
            word_count: self.word_count(),
            sentence_count: self.sentence_count(),
            identity_framing: identity_framing(self),
            emotional_valence: emotional_valence(self),
            metaphors: metaphors(self),
            repetition: repetition(self),
            pronouns: pronouns(self),
            rhetorical_devices: rhetorical_devices(self),
            temporal_anchoring: temporal_anchoring(self),
            sensory_anchors: sensory_anchors(self),
            fear_vs_aspiration: fear_vs_aspiration(self),
            cadence_pacing: cadence_pacing(self),
        };

        debug!(
            primary_frame = %report.identity_framing.primary_frame,
            dominant_metaphor = %report.metaphors.dominant_metaphor,
            pacing_empty = report.cadence_pacing.is_empty(),
            "analysis complete"
        );
        report
    }
}

// ---------------------------------------------------------------------------
// Analyzers
// ---------------------------------------------------------------------------

/// YOU / I / WE positioning, counted with word-boundary patterns over the full text.
pub fn identity_framing(doc: &Document) -> IdentityFraming {
    let you = count_matches(&YOU_FRAME_RE, doc.text());
    let i = count_matches(&I_FRAME_RE, doc.text());
    let we = count_matches(&WE_FRAME_RE, doc.text());
    let total = you + i + we;

    IdentityFraming {
        you_focused: you,
        i_focused: i,
        we_focused: we,
        you_percentage: percentage(you, total, HP.percentage_places),
        i_percentage: percentage(i, total, HP.percentage_places),
        we_percentage: percentage(we, total, HP.percentage_places),
        primary_frame: dominant(&[("YOU", you), ("I", i), ("WE", we)]).to_string(),
    }
}

pub fn emotional_valence(doc: &Document) -> EmotionalValence {
    let tokens = doc.tokens();
    let positive = count_in(tokens, &POSITIVE_WORDS);
    let negative = count_in(tokens, &NEGATIVE_WORDS);
    let urgent = count_in(tokens, &URGENT_WORDS);
    let calm = count_in(tokens, &CALM_WORDS);

    EmotionalValence {
        positive_count: positive,
        negative_count: negative,
        positivity_ratio: ratio(positive, positive + negative),
        urgent_count: urgent,
        calm_count: calm,
        urgency_ratio: ratio(urgent, urgent + calm),
        emotional_tone: if positive > negative { "positive" } else { "negative" }.to_string(),
        arousal_level: if urgent > calm { "high" } else { "low" }.to_string(),
    }
}

pub fn metaphors(doc: &Document) -> Metaphors {
    let tokens = doc.tokens();
    let count = |category: usize| count_in(tokens, &METAPHOR_WORDS[category]);
    let counts = MetaphorCounts {
        journey: count(0),
        war: count(1),
        building: count(2),
        game: count(3),
        nature: count(4),
        machine: count(5),
    };
    let ranked = counts.ranked();

    Metaphors {
        dominant_metaphor: dominant(&ranked).to_string(),
        metaphor_diversity: ranked.iter().filter(|(_, c)| *c > 0).count(),
        metaphor_counts: counts,
    }
}

/// Frequent 2-, 3- and 4-word phrases. The leading trigrams are the signature phrases.
pub fn repetition(doc: &Document) -> Repetition {
    let tokens = doc.tokens();
    let top_trigrams = ranked_ngrams(tokens, 3, HP.top_trigrams);
    let signature_phrases = top_trigrams
        .iter()
        .take(HP.signature_phrases)
        .cloned()
        .collect();

    Repetition {
        top_bigrams: ranked_ngrams(tokens, 2, HP.top_bigrams),
        top_trigrams,
        top_fourgrams: ranked_ngrams(tokens, 4, HP.top_fourgrams),
        signature_phrases,
    }
}

fn pronoun_profile(i: usize, you: usize, we: usize) -> &'static str {
    if i > you && i > we {
        "Authority/Expertise"
    } else if you > i && you > we {
        "Persuasion/Personalization"
    } else if we > i && we > you {
        "Community/Solidarity"
    } else {
        "Balanced"
    }
}

/// Pronoun usage as a share of all tokens. Counted by exact token, so the numbers
/// differ from [`identity_framing`].
pub fn pronouns(doc: &Document) -> PronounRatios {
    let tokens = doc.tokens();
    let words = doc.word_count();
    let i = count_in(tokens, &I_PRONOUNS);
    let you = count_in(tokens, &YOU_PRONOUNS);
    let we = count_in(tokens, &WE_PRONOUNS);
    let they = count_in(tokens, &THEY_PRONOUNS);

    PronounRatios {
        i_count: i,
        you_count: you,
        we_count: we,
        they_count: they,
        i_ratio: percentage(i, words, HP.ratio_places),
        you_ratio: percentage(you, words, HP.ratio_places),
        we_ratio: percentage(we, words, HP.ratio_places),
        they_ratio: percentage(they, words, HP.ratio_places),
        pronoun_profile: pronoun_profile(i, you, we).to_string(),
    }
}

pub fn rhetorical_devices(doc: &Document) -> RhetoricalDevices {
    let text = doc.text();
    let contrasts: usize = CONTRAST_PATTERNS
        .iter()
        .map(|re| count_matches(re, text))
        .sum();
    let questions = count_matches(&QUESTION_MARK_RE, text);
    let lists = count_matches(&LIST_MARKER_RE, text);

    RhetoricalDevices {
        contrast_patterns: contrasts,
        questions_total: questions,
        rhetorical_questions: count_matches(&RHETORICAL_QUESTION_RE, text),
        numbered_lists: lists,
        imperatives: count_matches(&IMPERATIVE_RE, text),
        rhetorical_density: if doc.sentence_count() == 0 {
            0.0
        } else {
            round_to(
                (contrasts + questions + lists) as f64 / doc.sentence_count() as f64,
                HP.ratio_places,
            )
        },
    }
}

pub fn temporal_anchoring(doc: &Document) -> TemporalAnchoring {
    let tokens = doc.tokens();
    let past = count_in(tokens, &PAST_INDICATORS);
    let present = count_in(tokens, &PRESENT_INDICATORS);
    let future = count_in(tokens, &FUTURE_INDICATORS);
    let total = past + present + future;

    TemporalAnchoring {
        past_focus: past,
        present_focus: present,
        future_focus: future,
        past_percentage: percentage(past, total, HP.percentage_places),
        present_percentage: percentage(present, total, HP.percentage_places),
        future_percentage: percentage(future, total, HP.percentage_places),
        temporal_orientation: dominant(&[("past", past), ("present", present), ("future", future)])
            .to_string(),
    }
}

pub fn sensory_anchors(doc: &Document) -> SensoryAnchors {
    let tokens = doc.tokens();
    let visual = count_in(tokens, &VISUAL_WORDS);
    let auditory = count_in(tokens, &AUDITORY_WORDS);
    let kinesthetic = count_in(tokens, &KINESTHETIC_WORDS);

    SensoryAnchors {
        visual_count: visual,
        auditory_count: auditory,
        kinesthetic_count: kinesthetic,
        dominant_sense: dominant(&[
            ("visual", visual),
            ("auditory", auditory),
            ("kinesthetic", kinesthetic),
        ])
        .to_string(),
        sensory_richness: percentage(
            visual + auditory + kinesthetic,
            doc.word_count(),
            HP.ratio_places,
        ),
    }
}

pub fn fear_vs_aspiration(doc: &Document) -> FearVsAspiration {
    let tokens = doc.tokens();
    let fear = count_in(tokens, &FEAR_WORDS);
    let aspiration = count_in(tokens, &ASPIRATION_WORDS);
    let total = fear + aspiration;

    FearVsAspiration {
        fear_count: fear,
        aspiration_count: aspiration,
        fear_percentage: percentage(fear, total, HP.percentage_places),
        aspiration_percentage: percentage(aspiration, total, HP.percentage_places),
        motivation_style: if fear > aspiration {
            "fear-based"
        } else {
            "aspiration-based"
        }
        .to_string(),
    }
}

fn pacing_style(avg: f64) -> &'static str {
    if avg < HP.punchy_avg_below {
        "punchy"
    } else if avg > HP.flowing_avg_above {
        "flowing"
    } else {
        "balanced"
    }
}

pub fn cadence_pacing(doc: &Document) -> CadencePacing {
    let lengths: Vec<usize> = doc
        .sentences()
        .iter()
        .map(|s| s.split_whitespace().count())
        .collect();

    let (Some(&shortest), Some(&longest)) = (lengths.iter().min(), lengths.iter().max()) else {
        return CadencePacing::Empty {
            error: NO_SENTENCES.to_string(),
        };
    };

    let avg = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
    let short = lengths
        .iter()
        .filter(|&&l| l < HP.short_sentence_max_words)
        .count();
    let long = lengths
        .iter()
        .filter(|&&l| l > HP.long_sentence_min_words)
        .count();
    let rhythm_changes = lengths
        .windows(2)
        .filter(|pair| pair[0].abs_diff(pair[1]) > HP.rhythm_change_min_diff)
        .count();

    CadencePacing::Measured(CadenceStats {
        avg_sentence_length: round_to(avg, HP.average_places),
        shortest_sentence: shortest,
        longest_sentence: longest,
        short_sentences: short,
        medium_sentences: lengths.len() - short - long,
        long_sentences: long,
        rhythm_changes,
        pacing_style: pacing_style(avg).to_string(),
    })
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run every analysis over `text` and collect the results.
pub fn analyze(text: &str) -> MetricsReport {
    Document::new(text).analyze()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn dominant_prefers_earlier_label_on_tie() {
        assert_eq!(dominant(&[("a", 2), ("b", 2), ("c", 1)]), "a");
        assert_eq!(dominant(&[("a", 1), ("b", 3), ("c", 3)]), "b");
        assert_eq!(dominant(&[("a", 0), ("b", 0)]), "a");
    }

    #[test]
    fn ranked_ngrams_keeps_first_seen_order_on_ties() {
        let toks = tokens("red fox blue owl red fox blue owl");
        let top = ranked_ngrams(&toks, 2, 3);
        assert_eq!(top[0], PhraseCount("red fox".into(), 2));
        assert_eq!(top[1], PhraseCount("fox blue".into(), 2));
        assert_eq!(top[2], PhraseCount("blue owl".into(), 2));
    }

    #[test]
    fn ranked_ngrams_skips_all_stopword_phrases() {
        let toks = tokens("of the of the of the cat");
        let top = ranked_ngrams(&toks, 2, 10);
        assert_eq!(top, vec![PhraseCount("the cat".into(), 1)]);
    }

    #[test]
    fn ranked_ngrams_short_input_is_empty() {
        assert!(ranked_ngrams(&tokens("alone"), 2, 10).is_empty());
    }

    #[test]
    fn percentage_and_ratio_guard_zero_denominators() {
        assert_eq!(percentage(3, 0, 1), 0.0);
        assert_eq!(ratio(3, 0), 0.0);
        assert_eq!(percentage(1, 3, 1), 33.3);
        assert_eq!(ratio(2, 3), 0.67);
    }

    #[test]
    fn round_to_places() {
        assert_eq!(round_to(12.345, 1), 12.3);
        assert_eq!(round_to(0.125, 2), 0.13);
    }

    #[test]
    fn pronoun_profile_needs_strict_lead() {
        assert_eq!(pronoun_profile(3, 1, 1), "Authority/Expertise");
        assert_eq!(pronoun_profile(1, 3, 1), "Persuasion/Personalization");
        assert_eq!(pronoun_profile(1, 1, 3), "Community/Solidarity");
        assert_eq!(pronoun_profile(2, 2, 1), "Balanced");
    }

    #[test]
    fn pacing_style_thresholds() {
        assert_eq!(pacing_style(11.9), "punchy");
        assert_eq!(pacing_style(12.0), "balanced");
        assert_eq!(pacing_style(18.0), "balanced");
        assert_eq!(pacing_style(18.1), "flowing");
    }
}
