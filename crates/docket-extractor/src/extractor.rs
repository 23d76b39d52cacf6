//! The Text Window Extractor

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::rules::{self, PatternRule, GENERIC_SUBJECT, RULING_KEYWORDS};
use docket_domain::RawRecord;
use regex::Regex;
use tracing::{debug, warn};

/// Pulls case records out of flat announcement or document text
///
/// Case numbers in the canonical format are located first, and each one is
/// read in a context window around it. Text without any canonical number is
/// split into itemized blocks instead, numbered `Item-1`, `Item-2`, ...
pub struct TextWindowExtractor {
    config: ExtractorConfig,
    case_number: Regex,
    block_start: Regex,
    ruling_keywords: Vec<Regex>,
    subject_rules: Vec<PatternRule>,
    ruling_rules: Vec<PatternRule>,
}

impl TextWindowExtractor {
    /// Create an extractor
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        let ruling_keywords = RULING_KEYWORDS
            .iter()
            .map(|word| Regex::new(&format!("(?i){}", regex::escape(word))))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            case_number: Regex::new(rules::CASE_NUMBER_PATTERN)?,
            block_start: Regex::new(rules::BLOCK_START_PATTERN)?,
            ruling_keywords,
            subject_rules: rules::subject_rules(config.min_capture_chars)?,
            ruling_rules: rules::ruling_rules()?,
            config,
        })
    }

    /// Create an extractor with the default configuration
    pub fn default_config() -> Result<Self, ExtractorError> {
        Self::new(ExtractorConfig::default())
    }

    /// Extractor configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract raw records in document order
    ///
    /// Never fails: unmatched fields degrade to defaults.
    pub fn extract_records(&self, text: &str) -> Vec<RawRecord> {
        let records: Vec<RawRecord> = self
            .case_number
            .find_iter(text)
            .map(|m| self.read_window(text, m.start(), m.end()))
            .collect();

        if !records.is_empty() {
            debug!(count = records.len(), "Extracted records by case number");
            return records;
        }

        let records = self.extract_blocks(text);
        debug!(count = records.len(), "Extracted records from itemized blocks");
        records
    }

    /// Read one record from the window around the case number at `start..end`
    fn read_window(&self, text: &str, start: usize, end: usize) -> RawRecord {
        let number = &text[start..end];
        let from = rules::chars_back(text, start, self.config.window_before);
        let to = rules::chars_forward(text, end, self.config.window_after);
        let window = &text[from..to];

        RawRecord {
            number: number.to_string(),
            subject: self.resolve_subject(window, number),
            ruling: self.resolve_ruling(window),
            full_text: window.trim().to_string(),
        }
    }

    fn resolve_subject(&self, window: &str, number: &str) -> String {
        let max = self.config.max_field_chars;

        if let Some((rule, subject)) = rules::first_match(&self.subject_rules, window) {
            debug!(number, rule, "Subject matched");
            return rules::truncate_chars(&subject, max);
        }

        match PatternRule::number_prefixed(number, self.config.min_capture_chars) {
            Ok(rule) => {
                if let Some(subject) = rule.apply(window) {
                    debug!(number, rule = rule.name(), "Subject matched");
                    return rules::truncate_chars(&subject, max);
                }
            }
            Err(e) => warn!(number, error = %e, "Skipping number-prefixed subject rule"),
        }

        text_after_number(window, number, max).unwrap_or_else(|| GENERIC_SUBJECT.to_string())
    }

    fn resolve_ruling(&self, window: &str) -> Option<String> {
        if let Some((_, ruling)) = rules::first_match(&self.ruling_rules, window) {
            return Some(rules::truncate_chars(&ruling, self.config.max_field_chars));
        }

        let hit = self
            .ruling_keywords
            .iter()
            .find_map(|keyword| keyword.find(window))?;

        let sentence_start = sentence_dots(window)
            .take_while(|&i| i < hit.start())
            .last()
            .map(|i| i + 1)
            .unwrap_or(0);
        let sentence_end = sentence_dots(window)
            .find(|&i| i >= hit.start())
            .unwrap_or_else(|| rules::chars_forward(window, hit.start(), 100));

        let sentence = window[sentence_start..sentence_end].trim();
        (!sentence.is_empty()).then(|| sentence.to_string())
    }

    /// Split number-less text into itemized blocks
    fn extract_blocks(&self, text: &str) -> Vec<RawRecord> {
        let starts: Vec<(usize, usize)> = self
            .block_start
            .find_iter(text)
            .map(|m| (m.start(), m.end()))
            .collect();

        starts
            .iter()
            .enumerate()
            .filter_map(|(i, &(_, content_start))| {
                let content_end = starts.get(i + 1).map(|&(next, _)| next).unwrap_or(text.len());
                let content = text[content_start..content_end].trim();

                if content.chars().count() < self.config.min_block_chars {
                    debug!(block = i + 1, "Discarding short block");
                    return None;
                }

                Some(RawRecord {
                    number: format!("Item-{}", i + 1),
                    subject: rules::truncate_chars(content, self.config.max_block_subject_chars),
                    ruling: None,
                    full_text: content.to_string(),
                })
            })
            .collect()
    }
}

/// Byte offsets of `.` that end a sentence; a dot between two digits belongs to a number
fn sentence_dots(text: &str) -> impl Iterator<Item = usize> + '_ {
    let bytes = text.as_bytes();
    text.match_indices('.').map(|(i, _)| i).filter(move |&i| {
        let digit_before = i > 0 && bytes[i - 1].is_ascii_digit();
        let digit_after = bytes.get(i + 1).map_or(false, u8::is_ascii_digit);
        !(digit_before && digit_after)
    })
}

/// Text following `number` up to the first sentence terminator
fn text_after_number(window: &str, number: &str, max: usize) -> Option<String> {
    let after = &window[window.find(number)? + number.len()..];
    let after = rules::truncate_chars(after, max);
    let after = after.trim_start_matches(|c: char| {
        c.is_whitespace() || matches!(c, ':' | '-' | '–' | '—' | '.')
    });

    let sentence = after
        .split(|c| matches!(c, '.' | ';' | '\n'))
        .next()
        .unwrap_or("")
        .trim();

    (!sentence.is_empty()).then(|| sentence.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_after_number() {
        let number = "48500.123456/2024-01";
        let window = format!("{} — Reajuste da Empresa; mais texto", number);
        assert_eq!(
            text_after_number(&window, number, 200).as_deref(),
            Some("Reajuste da Empresa")
        );

        let window = format!("Lista: {}.", number);
        assert_eq!(text_after_number(&window, number, 200), None);
    }

    #[test]
    fn test_text_after_number_is_bounded() {
        let number = "48500.123456/2024-01";
        let window = format!("{} {}", number, "x".repeat(500));
        let subject = text_after_number(&window, number, 200).unwrap();
        assert!(subject.chars().count() <= 200);
    }

    #[test]
    fn test_sentence_dots_skip_numbers() {
        let dots: Vec<usize> = sentence_dots("48500.123456/2024-01 Item 2. Fim.").collect();
        assert_eq!(dots, vec![27, 32]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractorConfig {
            max_field_chars: 0,
            ..ExtractorConfig::default()
        };
        assert!(matches!(
            TextWindowExtractor::new(config),
            Err(ExtractorError::Config(_))
        ));
    }
}
