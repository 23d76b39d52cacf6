//! Configuration for the Source Collector

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Regulator news area that hosts agenda and minutes announcements
pub const DEFAULT_BASE_URL: &str = "https://www2.aneel.gov.br/aplicacoes_liferay/noticias_area/";

/// Browser-like user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Configuration for the Source Collector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Base URL relative links are resolved against
    pub base_url: String,

    /// Paginated listing URL (`&pagina=<n>` is appended)
    pub listing_url: String,

    /// User agent header
    pub user_agent: String,

    /// Timeout for one listing page (seconds)
    pub page_timeout_secs: u64,

    /// Timeout for a full document download (seconds)
    pub document_timeout_secs: u64,

    /// Title keywords that mark an announcement as relevant (lowercase)
    pub keywords: Vec<String>,
}

impl CollectorConfig {
    /// Listing page timeout as a Duration
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    /// Document download timeout as a Duration
    pub fn document_timeout(&self) -> Duration {
        Duration::from_secs(self.document_timeout_secs)
    }

    /// URL of listing page `page` (zero-based)
    pub fn page_url(&self, page: usize) -> String {
        format!("{}&pagina={}", self.listing_url, page)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        Url::parse(&self.base_url).map_err(|e| format!("Invalid base_url: {}", e))?;
        Url::parse(&self.listing_url).map_err(|e| format!("Invalid listing_url: {}", e))?;

        if self.page_timeout_secs == 0 {
            return Err("page_timeout_secs must be greater than 0".to_string());
        }
        if self.document_timeout_secs == 0 {
            return Err("document_timeout_secs must be greater than 0".to_string());
        }
        if self.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err("keywords must contain at least one entry".to_string());
        }
        if self.keywords.iter().any(|k| *k != k.to_lowercase()) {
            return Err("keywords must be lowercase".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            listing_url: format!("{}?idAreaNoticia=425", DEFAULT_BASE_URL),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_timeout_secs: 10,
            document_timeout_secs: 30,
            keywords: [
                "pauta",
                "ata",
                "deliberação",
                "deliberacao",
                "reunião",
                "reuniao",
                "circuito",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
        }
    }
}
