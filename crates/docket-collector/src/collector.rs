//! The Source Collector

use crate::charset;
use crate::config::CollectorConfig;
use crate::error::CollectorError;
use crate::fetcher::HttpFetcher;
use crate::listing;
use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDateTime};
use docket_domain::traits::{AnnouncementSource, PageFetcher};
use docket_domain::RawAnnouncement;
use tracing::{debug, error, info, warn};
use url::Url;

/// Gathers agenda and minutes announcements from the paginated listing
pub struct SourceCollector<F: PageFetcher = HttpFetcher> {
    fetcher: F,
    base: Url,
    config: CollectorConfig,
}

impl SourceCollector<HttpFetcher> {
    /// Create a collector that fetches over HTTP
    ///
    /// # Errors
    ///
    /// Returns `CollectorError::Config` if the configuration is invalid or
    /// the HTTP client cannot be built.
    pub fn new(config: CollectorConfig) -> Result<Self, CollectorError> {
        let fetcher = HttpFetcher::new(&config.user_agent)?;
        Self::with_fetcher(fetcher, config)
    }
}

impl<F: PageFetcher> SourceCollector<F> {
    /// Create a collector around any page fetcher
    pub fn with_fetcher(fetcher: F, config: CollectorConfig) -> Result<Self, CollectorError> {
        config.validate().map_err(CollectorError::Config)?;
        let base = Url::parse(&config.base_url)?;
        Ok(Self { fetcher, base, config })
    }

    /// Collector configuration
    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Download a full document (agenda or minutes file)
    ///
    /// Uses the longer document timeout. Not called by the tracker, which
    /// works on announcement titles only.
    pub fn fetch_document(&self, url: &str) -> Result<Vec<u8>, CollectorError> {
        self.fetcher
            .fetch(url, self.config.document_timeout())
            .map(|page| page.body)
            .map_err(|e| {
                error!(url, error = %e, "Failed to download document");
                CollectorError::Fetch {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            })
    }

    /// Collect relevant announcements from one listing page
    fn collect_page(&self, page: usize, now: NaiveDateTime) -> Result<Vec<RawAnnouncement>> {
        let url = self.config.page_url(page);

        let fetched = self
            .fetcher
            .fetch(&url, self.config.page_timeout())
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("Failed to fetch listing page {}", url))?;

        let html = charset::decode_html(&fetched.body, fetched.content_type.as_deref());
        let items = listing::parse_listing(&html, &self.base, now);
        let total = items.len();

        let relevant: Vec<RawAnnouncement> = items
            .into_iter()
            .filter(|item| listing::is_relevant(&item.title, &self.config.keywords))
            .collect();

        debug!(page, items = total, relevant = relevant.len(), "Parsed listing page");
        Ok(relevant)
    }
}

impl<F: PageFetcher> AnnouncementSource for SourceCollector<F> {
    fn collect(&self, pages: usize) -> Vec<RawAnnouncement> {
        let mut announcements = Vec::new();

        for page in 0..pages {
            info!(page = page + 1, of = pages, "Collecting listing page");
            let now = Local::now().naive_local();

            match self.collect_page(page, now) {
                Ok(found) => {
                    announcements.extend(found);
                    info!(total = announcements.len(), "Announcements collected so far");
                }
                Err(e) => {
                    warn!(page, error = %format!("{:#}", e), "Skipping listing page");
                }
            }
        }

        announcements
    }
}
