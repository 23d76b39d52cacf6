//! Property tests for classification bounds

use crate::{LexicalClassifier, ReasoningClassifier, MAX_DESCRIPTION_CHARS, MAX_SUBCATEGORIES};
use docket_domain::taxonomy;
use docket_domain::traits::RecordClassifier;
use docket_domain::RawRecord;
use docket_llm::MockProvider;
use proptest::prelude::*;

fn raw(text: String) -> RawRecord {
    RawRecord {
        number: "Item-1".to_string(),
        subject: "Assunto".to_string(),
        ruling: None,
        full_text: text,
    }
}

proptest! {
    /// Property: lexical output always respects the record bounds
    #[test]
    fn test_lexical_bounds(text in "\\PC{0,300}") {
        let record = LexicalClassifier::new().classify(&raw(text));

        prop_assert!(taxonomy::is_member(&record.category));
        prop_assert!(record.subcategories.len() <= MAX_SUBCATEGORIES);
        prop_assert!(record
            .description
            .as_ref()
            .map_or(true, |d| d.chars().count() <= MAX_DESCRIPTION_CHARS));
    }

    /// Property: lexical classification is a pure function of the text
    #[test]
    fn test_lexical_deterministic(text in "[a-zçãéõ ]{0,200}") {
        let classifier = LexicalClassifier::new();
        let first = classifier.classify(&raw(text.clone()));
        let second = classifier.classify(&raw(text));
        prop_assert_eq!(first, second);
    }

    /// Property: whatever the service replies, the record stays within bounds
    #[test]
    fn test_reasoning_bounds(reply in "\\PC{0,200}", category in "[a-zA-Z_ ]{0,30}") {
        let structured = format!(
            r#"{} {{"macrotema": "{}", "subtemas": ["a","b","c","d"], "descricao": "{}"}}"#,
            reply.replace('{', ""),
            category,
            "d".repeat(150)
        );

        for answer in [reply, structured] {
            let classifier = ReasoningClassifier::new(MockProvider::new(answer), 1500);
            let record = classifier.classify(&raw("tarifa".to_string()));

            prop_assert!(taxonomy::is_member(&record.category));
            prop_assert!(record.subcategories.len() <= MAX_SUBCATEGORIES);
            prop_assert!(record
                .description
                .as_ref()
                .map_or(true, |d| d.chars().count() <= MAX_DESCRIPTION_CHARS));
        }
    }
}
