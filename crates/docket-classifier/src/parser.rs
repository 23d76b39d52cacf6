//! Parse reasoning-service replies

use crate::error::ClassifierError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Classification fields read from a reply
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReasoningAnswer {
    /// Category key or display name
    #[serde(alias = "macrotema")]
    pub category: String,

    /// Suggested subcategories
    #[serde(default, alias = "subtemas")]
    pub subcategories: Vec<String>,

    /// Short description
    #[serde(default, alias = "descricao")]
    pub description: Option<String>,
}

/// Parse the first JSON object embedded anywhere in `reply`
///
/// Replies often wrap the object in prose or a markdown code block.
pub fn parse_reply(reply: &str) -> Result<ReasoningAnswer, ClassifierError> {
    let object = first_json_object(reply)
        .ok_or_else(|| ClassifierError::InvalidFormat("No JSON object in reply".to_string()))?;

    Ok(serde_json::from_value(Value::Object(object))?)
}

/// First well-formed JSON object starting at any `{` in `text`
fn first_json_object(text: &str) -> Option<Map<String, Value>> {
    text.match_indices('{').find_map(|(start, _)| {
        let mut stream = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
        match stream.next() {
            Some(Ok(Value::Object(object))) => Some(object),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_object() {
        let answer = parse_reply(
            r#"{"macrotema": "tarifas", "subtemas": ["Reajuste Tarifário"], "descricao": "Reajuste anual"}"#,
        )
        .unwrap();

        assert_eq!(answer.category, "tarifas");
        assert_eq!(answer.subcategories, vec!["Reajuste Tarifário".to_string()]);
        assert_eq!(answer.description.as_deref(), Some("Reajuste anual"));
    }

    #[test]
    fn test_parse_object_inside_prose() {
        let reply = "Claro! Segue a classificação:\n```json\n{\"macrotema\": \"geracao\"}\n```\nEspero ter ajudado {:";
        let answer = parse_reply(reply).unwrap();
        assert_eq!(answer.category, "geracao");
        assert!(answer.subcategories.is_empty());
        assert_eq!(answer.description, None);
    }

    #[test]
    fn test_skips_malformed_braces() {
        let reply = r#"{macrotema: tarifas} mas na verdade {"macrotema": "consumidor"}"#;
        assert_eq!(parse_reply(reply).unwrap().category, "consumidor");
    }

    #[test]
    fn test_english_field_names() {
        let answer = parse_reply(r#"{"category": "ambiental", "subcategories": ["Estudos"]}"#).unwrap();
        assert_eq!(answer.category, "ambiental");
    }

    #[test]
    fn test_missing_category_is_error() {
        let result = parse_reply(r#"{"subtemas": ["Medição"]}"#);
        assert!(matches!(result, Err(ClassifierError::JsonParse(_))));
    }

    #[test]
    fn test_no_object_is_error() {
        assert!(matches!(
            parse_reply("Não sei classificar."),
            Err(ClassifierError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_reply(r#"["tarifas"]"#),
            Err(ClassifierError::InvalidFormat(_))
        ));
    }
}
