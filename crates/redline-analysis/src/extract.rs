//! Section extraction from free-form model replies.
//!
//! The analysis prompt asks the model for four labeled sections. This module
//! carves them back out of the reply with header-anchored patterns. The
//! patterns are selected by the language of the prompt, so they match the
//! headers the model was instructed to emit. Extraction is best-effort: a
//! section whose header is absent yields an empty list, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::prompts::Language;

/// Compiled header patterns for one prompt language.
struct SectionPatterns {
    clauses: Regex,
    risks: Regex,
    inconsistencies: Regex,
    key_terms: Regex,
}

/// A section runs from its header line to the next blank line (or the end
/// of the reply).
fn section_regex(header: &str) -> Regex {
    Regex::new(&format!(r"(?s){}:\n(.*?)(?:\n\n|$)", regex::escape(header)))
        .expect("valid section pattern")
}

static EN_PATTERNS: Lazy<SectionPatterns> = Lazy::new(|| SectionPatterns {
    clauses: section_regex("CLAUSE RECOGNITION"),
    risks: section_regex("RISK IDENTIFICATION"),
    inconsistencies: section_regex("INCONSISTENCIES"),
    key_terms: section_regex("KEY TERMS"),
});

static NL_PATTERNS: Lazy<SectionPatterns> = Lazy::new(|| SectionPatterns {
    clauses: section_regex("CLAUSULEHERKENNING"),
    risks: section_regex("RISICO-IDENTIFICATIE"),
    inconsistencies: section_regex("INCONSISTENTIES"),
    key_terms: section_regex("SLEUTELTERMEN"),
});

/// The four analysis sections extracted from a model reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedSections {
    pub clause_recognition: Vec<String>,
    pub risk_identification: Vec<String>,
    pub inconsistencies: Vec<String>,
    pub key_terms: Vec<String>,
}

/// Carve a model reply into the four labeled sections.
pub fn extract_sections(reply: &str, language: Language) -> ExtractedSections {
    let patterns = match language {
        Language::En => &*EN_PATTERNS,
        Language::Nl => &*NL_PATTERNS,
    };

    ExtractedSections {
        clause_recognition: extract_list(&patterns.clauses, reply),
        risk_identification: extract_list(&patterns.risks, reply),
        inconsistencies: extract_list(&patterns.inconsistencies, reply),
        key_terms: extract_list(&patterns.key_terms, reply),
    }
}

/// Non-empty trimmed lines of the first match of `pattern` in `reply`.
fn extract_list(pattern: &Regex, reply: &str) -> Vec<String> {
    pattern
        .captures(reply)
        .and_then(|captures| captures.get(1))
        .map(|section| {
            section
                .as_str()
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
