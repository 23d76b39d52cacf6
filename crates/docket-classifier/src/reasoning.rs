//! External-reasoning strategy with per-record lexical fallback

use crate::error::ClassifierError;
use crate::lexical::{LexicalClassifier, MAX_DESCRIPTION_CHARS};
use crate::parser::{parse_reply, ReasoningAnswer};
use crate::prompt::{PromptBuilder, ANSWER_SCHEMA};
use docket_domain::taxonomy;
use docket_domain::traits::{LlmProvider, RecordClassifier};
use docket_domain::{RawRecord, Record};
use tracing::{debug, warn};

/// Maximum subcategories kept from a reply
pub const MAX_SUBCATEGORIES: usize = 3;

/// Classifies records through an LLM provider
///
/// Any failure for a record (service error, unparseable reply, missing
/// category) classifies that record lexically instead. Calls are never
/// retried.
pub struct ReasoningClassifier<L: LlmProvider> {
    llm: L,
    fallback: LexicalClassifier,
    prompt_text_chars: usize,
}

impl<L: LlmProvider> ReasoningClassifier<L> {
    /// Create a reasoning classifier around `llm`
    pub fn new(llm: L, prompt_text_chars: usize) -> Self {
        Self {
            llm,
            fallback: LexicalClassifier::new(),
            prompt_text_chars,
        }
    }

    /// The underlying provider
    pub fn provider(&self) -> &L {
        &self.llm
    }

    fn ask(&self, record: &RawRecord) -> Result<ReasoningAnswer, ClassifierError> {
        let prompt = PromptBuilder::new(record.combined_text(), self.prompt_text_chars)
            .with_ruling(record.ruling.as_deref())
            .build();

        let reply = self
            .llm
            .generate_structured(&prompt, ANSWER_SCHEMA)
            .map_err(|e| ClassifierError::Llm(e.to_string()))?;

        parse_reply(&reply)
    }
}

/// Map a reply onto the taxonomy and clamp it to record bounds
fn to_record(record: &RawRecord, answer: ReasoningAnswer) -> Record {
    let category = taxonomy::resolve(&answer.category);

    let subcategories = answer
        .subcategories
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .take(MAX_SUBCATEGORIES)
        .collect();

    let description = answer
        .description
        .map(|d| d.trim().chars().take(MAX_DESCRIPTION_CHARS).collect::<String>())
        .filter(|d| !d.is_empty());

    Record::classified(record, category.name, subcategories, description)
}

impl<L: LlmProvider> RecordClassifier for ReasoningClassifier<L> {
    fn classify(&self, record: &RawRecord) -> Record {
        match self.ask(record) {
            Ok(answer) => {
                debug!(number = %record.number, category = %answer.category, "Reasoning classification");
                to_record(record, answer)
            }
            Err(e) => {
                warn!(number = %record.number, error = %e, "Reasoning classification failed, using keywords");
                self.fallback.classify(record)
            }
        }
    }

    fn strategy(&self) -> &'static str {
        "reasoning"
    }
}
