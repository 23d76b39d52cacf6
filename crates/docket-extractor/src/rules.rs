//! Ordered pattern rules
//!
//! A field is resolved by trying a fixed list of rules in order; the first
//! rule whose capture is accepted wins. Each rule is a pure function of the
//! text it is given.

use regex::Regex;

/// Canonical case number: 5 digits, `.`, 6 digits, `/`, 4 digits, `-`, 2 digits
pub const CASE_NUMBER_PATTERN: &str = r"[0-9]{5}\.[0-9]{6}/[0-9]{4}-[0-9]{2}";

/// Start of an itemized block: `Item`, `Processo`, `12.` or `12)` at line start
pub const BLOCK_START_PATTERN: &str = r"(?m)^[ \t]*(?:Item|Processo|[0-9]+[.)])\s+";

/// Subject used when nothing can be read after a case number
pub const GENERIC_SUBJECT: &str = "Assunto não identificado";

/// Words that mark a sentence as a ruling
pub const RULING_KEYWORDS: &[&str] = &["aprovado", "rejeitado", "deferido", "indeferido", "homologado"];

const SUBJECT_PATTERNS: &[(&str, &str)] = &[
    ("labelled-subject", r"(?i)Assunto:\s*(.+?)(?:\n|\.|\||Processo)"),
    ("refers-to", r"(?i)(?:Trata-se|Trata|Refere-se)(?:\s+de|\s+a)?\s*:\s*(.+?)(?:\n|\.)"),
];

const RULING_PATTERNS: &[(&str, &str)] = &[
    ("labelled-ruling", r"(?is)Deliberação:\s*(.+?)(?:\n\n|Processo)"),
    (
        "decided",
        r"(?is)(?:Aprovado|Aprovada|Decidido|Deliberado)(?:\s+por)?\s*:\s*(.+?)(?:\n|\.)",
    ),
    ("outcome", r"(?is)(?:Resultado|Decisão):\s*(.+?)(?:\n|\.)"),
];

/// One compiled extraction rule with a single capture group
#[derive(Debug, Clone)]
pub struct PatternRule {
    name: &'static str,
    regex: Regex,
    min_chars: usize,
}

impl PatternRule {
    /// Compile a rule; the capture is accepted only when longer than `min_chars`
    pub fn new(name: &'static str, pattern: &str, min_chars: usize) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            regex: Regex::new(pattern)?,
            min_chars,
        })
    }

    /// Rule matching a specific case number followed by a separator and free text
    pub fn number_prefixed(number: &str, min_chars: usize) -> Result<Self, regex::Error> {
        let pattern = format!(r"{}[:\s-]+(.+?)(?:\n|\.)", regex::escape(number));
        Self::new("number-prefixed", &pattern, min_chars)
    }

    /// Rule name, for logging
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Trimmed capture of the first match, if accepted
    pub fn apply(&self, text: &str) -> Option<String> {
        let captured = self.regex.captures(text)?.get(1)?.as_str().trim();
        (captured.chars().count() > self.min_chars).then(|| captured.to_string())
    }
}

/// First accepted capture across `rules`, in order
pub fn first_match(rules: &[PatternRule], text: &str) -> Option<(&'static str, String)> {
    rules
        .iter()
        .find_map(|rule| rule.apply(text).map(|captured| (rule.name(), captured)))
}

/// The fixed subject rules (the number-prefixed rule is added per match)
pub fn subject_rules(min_chars: usize) -> Result<Vec<PatternRule>, regex::Error> {
    SUBJECT_PATTERNS
        .iter()
        .map(|(name, pattern)| PatternRule::new(name, pattern, min_chars))
        .collect()
}

/// The fixed ruling rules; any non-empty capture is accepted
pub fn ruling_rules() -> Result<Vec<PatternRule>, regex::Error> {
    RULING_PATTERNS
        .iter()
        .map(|(name, pattern)| PatternRule::new(name, pattern, 0))
        .collect()
}

/// Keep at most `max` characters of `text`
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

/// Byte offset `n` characters before `from`, clamped to the start
pub fn chars_back(text: &str, from: usize, n: usize) -> usize {
    if n == 0 {
        return from;
    }
    text[..from]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(from)
}

/// Byte offset `n` characters after `from`, clamped to the end
pub fn chars_forward(text: &str, from: usize, n: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(n)
        .map(|(i, _)| from + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_rules_compile() {
        assert_eq!(subject_rules(10).unwrap().len(), 2);
        assert_eq!(ruling_rules().unwrap().len(), 3);
        assert!(Regex::new(CASE_NUMBER_PATTERN).is_ok());
        assert!(Regex::new(BLOCK_START_PATTERN).is_ok());
    }

    #[test]
    fn test_labelled_subject_stops_at_terminators() {
        let rules = subject_rules(10).unwrap();
        let (name, subject) = first_match(&rules, "Assunto: Revisão Tarifária da Empresa X. Outro").unwrap();
        assert_eq!(name, "labelled-subject");
        assert_eq!(subject, "Revisão Tarifária da Empresa X");

        let (_, subject) = first_match(&rules, "ASSUNTO: Reajuste anual da distribuidora | extra").unwrap();
        assert_eq!(subject, "Reajuste anual da distribuidora");
    }

    #[test]
    fn test_short_capture_falls_through() {
        let rules = subject_rules(10).unwrap();
        // "Curto" is too short, so the refers-to rule wins
        let text = "Assunto: Curto.\nTrata-se de: pedido de outorga da usina\n";
        let (name, subject) = first_match(&rules, text).unwrap();
        assert_eq!(name, "refers-to");
        assert_eq!(subject, "pedido de outorga da usina");
    }

    #[test]
    fn test_refers_to_variants() {
        let rules = subject_rules(10).unwrap();
        for text in [
            "Trata-se de: recurso administrativo da empresa.",
            "Refere-se a: recurso administrativo da empresa.",
            "Trata: recurso administrativo da empresa.",
        ] {
            let (_, subject) = first_match(&rules, text).unwrap();
            assert_eq!(subject, "recurso administrativo da empresa", "{}", text);
        }
    }

    #[test]
    fn test_number_prefixed_rule() {
        let number = "48500.123456/2024-01";
        let rule = PatternRule::number_prefixed(number, 10).unwrap();

        let text = format!("{} - Pedido de revisão extraordinária.\n", number);
        assert_eq!(rule.apply(&text).as_deref(), Some("Pedido de revisão extraordinária"));

        // The dot inside the number is literal
        let text = "48500x123456/2024-01 - Pedido de revisão extraordinária.";
        assert_eq!(rule.apply(text), None);
    }

    #[test]
    fn test_ruling_rules_span_newlines() {
        let rules = ruling_rules().unwrap();

        let text = "Deliberação: aprovar o reajuste\ncom ressalvas\n\nProcesso seguinte";
        let (name, ruling) = first_match(&rules, text).unwrap();
        assert_eq!(name, "labelled-ruling");
        assert_eq!(ruling, "aprovar o reajuste\ncom ressalvas");

        let (name, ruling) = first_match(&rules, "Aprovado por: unanimidade.").unwrap();
        assert_eq!(name, "decided");
        assert_eq!(ruling, "unanimidade");

        let (name, ruling) = first_match(&rules, "decisão: negar provimento.").unwrap();
        assert_eq!(name, "outcome");
        assert_eq!(ruling, "negar provimento");
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("ação", 2), "aç");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_char_offsets() {
        let text = "çççABCççç";
        let start = text.find('A').unwrap();
        assert_eq!(&text[chars_back(text, start, 2)..start], "çç");
        assert_eq!(&text[chars_back(text, start, 50)..start], "ççç");
        let end = start + 3;
        assert_eq!(&text[end..chars_forward(text, end, 2)], "çç");
        assert_eq!(&text[end..chars_forward(text, end, 50)], "ççç");
        assert_eq!(chars_back(text, start, 0), start);
    }
}
