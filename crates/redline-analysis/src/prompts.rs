//! Language-specific analysis prompts.
//!
//! Each prompt instructs the model to answer with four labeled sections;
//! the extraction patterns in [`crate::extract`] match the headers the
//! selected prompt asks for.

use serde::{Deserialize, Serialize};

/// Prompt language for an analysis request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Nl,
}

impl Language {
    /// Parse a request language code. Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "nl" => Self::Nl,
            _ => Self::En,
        }
    }

    /// The two-letter code for this language.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Nl => "nl",
        }
    }
}

/// English analysis prompt.
pub const ANALYSIS_PROMPT_EN: &str = "You are a legal contract analysis assistant. \
Analyze the following contract for clause recognition, risk identification, \
inconsistencies, and key terms extraction. Format your response as follows:\n\n\
CLAUSE RECOGNITION:\n[List recognized clauses]\n\n\
RISK IDENTIFICATION:\n[List identified risks]\n\n\
INCONSISTENCIES:\n[List any inconsistencies]\n\n\
KEY TERMS:\n[List key terms]";

/// Dutch analysis prompt.
pub const ANALYSIS_PROMPT_NL: &str = "Je bent een juridische contractanalyse-assistent. \
Analyseer het volgende contract voor clausuleherkenning, risico-identificatie, \
inconsistenties en extractie van sleuteltermen. Formatteer je antwoord als volgt:\n\n\
CLAUSULEHERKENNING:\n[Lijst van herkende clausules]\n\n\
RISICO-IDENTIFICATIE:\n[Lijst van geïdentificeerde risico's]\n\n\
INCONSISTENTIES:\n[Lijst van eventuele inconsistenties]\n\n\
SLEUTELTERMEN:\n[Lijst van sleuteltermen]";

/// The system prompt for a given language.
pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::En => ANALYSIS_PROMPT_EN,
        Language::Nl => ANALYSIS_PROMPT_NL,
    }
}
