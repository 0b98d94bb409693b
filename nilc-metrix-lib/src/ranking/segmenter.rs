use core::fmt::Debug;
use regex::Regex;
use std::sync::LazyLock;

static BOUNDARY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[.!?…]+["'”’»)]*\s+"#).expect("invalid regex"));

/// Splits a text into the sentences that are ranked one by one.
pub trait Segmenter: Send + Sync + Debug {
    /// Returns the sentences of `text`, in reading order, without surrounding whitespace.
    fn sentences(&self, text: &str) -> Vec<String>;
}

/// Words that end with a period without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "art", "av", "cap", "cf", "dr", "dra", "ex", "exma", "exmo", "fig", "ltda", "n", "nº", "p", "pág", "pp", "prof", "profa", "sr", "sra",
    "srs", "sras", "vol",
];

/// A punctuation-based segmenter for Portuguese prose.
///
/// Paragraphs are separated by line breaks. Within a paragraph, a sentence ends after `.`, `!`, `?`, or `…`
/// (optionally followed by closing quotes or parentheses) when whitespace follows, unless the period closes a
/// known abbreviation or a single-letter initial.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSegmenter;

impl Segmenter for RuleSegmenter {
    fn sentences(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        for paragraph in text.lines() {
            split_paragraph(paragraph, &mut out);
        }
        out
    }
}

fn split_paragraph(paragraph: &str, out: &mut Vec<String>) {
    let mut start = 0;
    for m in BOUNDARY_REGEX.find_iter(paragraph) {
        let before = paragraph.get(start..m.start()).unwrap_or_default();
        if ends_with_abbreviation(before, m.as_str()) {
            continue;
        }

        push_trimmed(out, paragraph.get(start..m.end()).unwrap_or_default());
        start = m.end();
    }

    push_trimmed(out, paragraph.get(start..).unwrap_or_default());
}

fn ends_with_abbreviation(before: &str, terminator: &str) -> bool {
    if !terminator.starts_with('.') || terminator.trim_end().len() > 1 {
        return false;
    }

    let word = before.rsplit(char::is_whitespace).next().unwrap_or_default();
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
    if word.chars().count() == 1 && word.chars().all(char::is_uppercase) {
        return true;
    }

    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

fn push_trimmed(out: &mut Vec<String>, sentence: &str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        out.push(sentence.to_string());
    }
}
