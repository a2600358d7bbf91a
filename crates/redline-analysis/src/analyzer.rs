//! Analysis orchestration: prompt, completion call, section extraction.

use std::sync::Arc;

use serde::Serialize;

use crate::client::CompletionBackend;
use crate::error::AnalysisResult;
use crate::extract::extract_sections;
use crate::prompts::{system_prompt, Language};

/// A structured contract analysis.
///
/// `analysis` is the model's full reply; the four lists are carved out of it
/// best-effort and may be empty when the model strays from the requested
/// format.
#[derive(Clone, Debug, Serialize)]
pub struct ContractAnalysis {
    pub analysis: String,
    pub clause_recognition: Vec<String>,
    pub risk_identification: Vec<String>,
    pub inconsistencies: Vec<String>,
    pub key_terms: Vec<String>,
}

/// Runs contract analyses against a completion backend.
#[derive(Clone)]
pub struct ContractAnalyzer {
    backend: Arc<dyn CompletionBackend>,
}

impl ContractAnalyzer {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Analyze a contract in the given prompt language.
    pub async fn analyze(
        &self,
        contract_text: &str,
        language: Language,
    ) -> AnalysisResult<ContractAnalysis> {
        let reply = self
            .backend
            .complete(system_prompt(language), contract_text)
            .await?;

        let sections = extract_sections(&reply, language);
        Ok(ContractAnalysis {
            analysis: reply,
            clause_recognition: sections.clause_recognition,
            risk_identification: sections.risk_identification,
            inconsistencies: sections.inconsistencies,
            key_terms: sections.key_terms,
        })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::error::AnalysisError;

    /// Backend returning a canned reply, or failing on demand.
    struct MockBackend {
        reply: Option<String>,
    }

    impl MockBackend {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
            }
        }

        fn failing() -> Self {
            Self { reply: None }
        }
    }

    #[async_trait]
    impl CompletionBackend for MockBackend {
        async fn complete(&self, _system: &str, _user: &str) -> AnalysisResult<String> {
            self.reply.clone().ok_or(AnalysisError::Api {
                status: 503,
                message: "overloaded".into(),
            })
        }
    }

    #[tokio::test]
    async fn analyze_returns_reply_and_sections() {
        let reply = "CLAUSE RECOGNITION:\n- Payment clause\n\n\
RISK IDENTIFICATION:\n- Late payment penalty unspecified\n\n\
INCONSISTENCIES:\n- None found\n\n\
KEY TERMS:\n- Net 30";
        let analyzer = ContractAnalyzer::new(Arc::new(MockBackend::replying(reply)));

        let analysis = analyzer
            .analyze("The parties agree...", Language::En)
            .await
            .unwrap();
        assert_eq!(analysis.analysis, reply);
        assert_eq!(analysis.clause_recognition, vec!["- Payment clause"]);
        assert_eq!(
            analysis.risk_identification,
            vec!["- Late payment penalty unspecified"]
        );
        assert_eq!(analysis.inconsistencies, vec!["- None found"]);
        assert_eq!(analysis.key_terms, vec!["- Net 30"]);
    }

    #[tokio::test]
    async fn analyze_keeps_unformatted_reply_with_empty_sections() {
        let analyzer =
            ContractAnalyzer::new(Arc::new(MockBackend::replying("I cannot analyze this.")));

        let analysis = analyzer.analyze("text", Language::En).await.unwrap();
        assert_eq!(analysis.analysis, "I cannot analyze this.");
        assert!(analysis.clause_recognition.is_empty());
        assert!(analysis.key_terms.is_empty());
    }

    #[tokio::test]
    async fn backend_failures_propagate() {
        let analyzer = ContractAnalyzer::new(Arc::new(MockBackend::failing()));
        let err = analyzer.analyze("text", Language::En).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Api { status: 503, .. }));
    }
}
