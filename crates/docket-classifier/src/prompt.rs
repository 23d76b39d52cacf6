//! Prompt construction for the reasoning strategy

use docket_domain::TAXONOMY;

const CLASSIFICATION_INSTRUCTIONS: &str = "Analise o seguinte processo da ANEEL e forneça:";

const ANSWER_FORMAT: &str = r#"Responda APENAS no formato JSON:
{"macrotema": "nome_do_macrotema", "subtemas": ["subtema1", "subtema2"], "descricao": "descrição sucinta"}"#;

/// JSON shape requested from the reasoning service
pub const ANSWER_SCHEMA: &str = r#"{
  "type": "object",
  "properties": {
    "macrotema": {"type": "string"},
    "subtemas": {"type": "array", "items": {"type": "string"}, "maxItems": 3},
    "descricao": {"type": "string", "maxLength": 100}
  },
  "required": ["macrotema"]
}"#;

/// Builds the classification prompt for one record
pub struct PromptBuilder<'a> {
    text: &'a str,
    ruling: Option<&'a str>,
    max_text_chars: usize,
}

impl<'a> PromptBuilder<'a> {
    /// Prompt for `text`, keeping its first `max_text_chars` characters
    pub fn new(text: &'a str, max_text_chars: usize) -> Self {
        Self {
            text,
            ruling: None,
            max_text_chars,
        }
    }

    /// Include the ruling text
    pub fn with_ruling(mut self, ruling: Option<&'a str>) -> Self {
        self.ruling = ruling.filter(|r| !r.trim().is_empty());
        self
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(CLASSIFICATION_INSTRUCTIONS);
        prompt.push_str("\n\n1. MACROTEMA: Escolha UM dos seguintes macrotemas:\n");
        for category in TAXONOMY {
            prompt.push_str(&format!("{}: {}\n", category.key, category.name));
        }

        prompt.push_str("\n2. SUBTEMAS: Liste até 3 subtemas específicos\n\n");
        prompt.push_str(
            "3. DESCRIÇÃO: Uma frase curta e objetiva (máximo 100 caracteres) descrevendo o assunto\n\n",
        );

        prompt.push_str("Texto do processo:\n");
        let excerpt: String = self.text.chars().take(self.max_text_chars).collect();
        prompt.push_str(&excerpt);
        prompt.push_str("\n\n");

        if let Some(ruling) = self.ruling {
            prompt.push_str(&format!("Deliberação: {}\n\n", ruling));
        }

        prompt.push_str(ANSWER_FORMAT);
        prompt
    }
}
