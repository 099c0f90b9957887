//! Scene text cleaning and validation
//!
//! Submitted scenes are concatenated into the model prompt as the user
//! turn, so bare imperative lines like "rewrite scene" at either end of
//! the text would read as instructions rather than content. The cleaner
//! strips those lines from the front and back. This is a light defense
//! against trivial prompt steering, not a security boundary.

use crate::error::AdmissionError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum cleaned-scene length in characters
pub const MIN_SCENE_CHARS: usize = 30;

/// Maximum cleaned-scene length in words (roughly two script pages)
pub const MAX_SCENE_WORDS: usize = 600;

/// Command phrases stripped when they stand alone on a leading or
/// trailing line, optionally prefixed by "please" and optionally
/// followed by "scene"
pub const COMMAND_PHRASES: &[&str] = &[
    "rewrite",
    "regenerate",
    "generate",
    "compose",
    "fix",
    "improve",
    "polish",
    "reword",
    "make",
];

static STRIP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let phrases = COMMAND_PHRASES.join("|");
    Regex::new(&format!(
        r"(?i)^\s*(?:please\s+)?(?:{phrases})(?:\s+scene)?\s*$"
    ))
    .expect("command phrase pattern is valid")
});

// Screenplay structure markers: slug lines, transitions, shouting
// character cues at line heads.
static NARRATIVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)\bINT\.|\bEXT\.|CUT TO:|^\s*[A-Z]{2,}:")
        .expect("narrative marker pattern is valid")
});

/// Strip command-like lines from the front and back of `text`
///
/// Whole lines matching a [`COMMAND_PHRASES`] pattern are removed from
/// the start, then from the end; the joined remainder is trimmed.
/// Idempotent: cleaning an already-cleaned string is a no-op.
#[must_use]
pub fn clean(text: &str) -> String {
    let mut lines: Vec<&str> = text.lines().collect();

    while lines.first().is_some_and(|l| STRIP_PATTERN.is_match(l)) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| STRIP_PATTERN.is_match(l)) {
        lines.pop();
    }

    lines.join("\n").trim().to_owned()
}

/// Whether `text` cleans down to an acceptable scene
///
/// The check runs on a cleaned copy: raw length does not matter, only
/// what survives cleaning.
#[must_use]
pub fn is_valid(text: &str) -> bool {
    clean(text).chars().count() >= MIN_SCENE_CHARS
}

/// Clean `text` and enforce the length bounds
///
/// Returns the cleaned scene on success.
///
/// # Errors
/// - [`AdmissionError::SceneTooShort`] if the cleaned text is under
///   [`MIN_SCENE_CHARS`] characters
/// - [`AdmissionError::SceneTooLong`] if the cleaned text exceeds
///   [`MAX_SCENE_WORDS`] words
pub fn validate(text: &str) -> Result<String, AdmissionError> {
    let cleaned = clean(text);

    let len = cleaned.chars().count();
    if len < MIN_SCENE_CHARS {
        return Err(AdmissionError::SceneTooShort {
            len,
            min: MIN_SCENE_CHARS,
        });
    }

    let words = cleaned.split_whitespace().count();
    if words > MAX_SCENE_WORDS {
        return Err(AdmissionError::SceneTooLong {
            words,
            max: MAX_SCENE_WORDS,
        });
    }

    Ok(cleaned)
}

/// Whether a model completion looks like generated screenplay content
///
/// The upstream is prompted to analyze, never to write scenes; output
/// carrying slug lines or transitions is rejected rather than served.
#[must_use]
pub fn looks_like_narrative(completion: &str) -> bool {
    NARRATIVE_PATTERN.is_match(completion)
}
