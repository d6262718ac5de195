use std::cell::RefCell;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::{ContentError, Result};

use super::model::{PartialSiteContent, SiteContent};

/// Remote source of page copy.
pub trait ContentStore {
    /// Reads the stored content; sections may be missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached or replies with garbage.
    fn fetch(&self) -> Result<PartialSiteContent>;

    /// Replaces the stored content wholesale and returns what was stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects or cannot receive the update.
    fn replace(&self, content: &SiteContent) -> Result<SiteContent>;
}

/// Path of the content resource below the backend base URL.
pub const CONTENT_PATH: &str = "/api/content";

/// Builds the content endpoint for a backend base URL.
///
/// An empty base URL means "same origin" and yields the bare path.
#[must_use]
pub fn content_endpoint(base_url: &str) -> String {
    format!("{}{CONTENT_PATH}", base_url.trim_end_matches('/'))
}

/// JSON-over-HTTP content store.
#[derive(Debug, Clone)]
pub struct HttpContentStore {
    client: Client,
    endpoint: String,
    fetch_timeout: Duration,
    save_timeout: Duration,
}

impl HttpContentStore {
    pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);
    pub const DEFAULT_SAVE_TIMEOUT: Duration = Duration::from_secs(20);

    /// Creates a store talking to `{base_url}/api/content`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().build().map_err(ContentError::from)?;
        Ok(Self {
            client,
            endpoint: content_endpoint(base_url),
            fetch_timeout: Self::DEFAULT_FETCH_TIMEOUT,
            save_timeout: Self::DEFAULT_SAVE_TIMEOUT,
        })
    }

    /// Overrides the per-request timeouts.
    #[must_use]
    pub fn with_timeouts(mut self, fetch: Duration, save: Duration) -> Self {
        self.fetch_timeout = fetch;
        self.save_timeout = save;
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ContentStore for HttpContentStore {
    fn fetch(&self) -> Result<PartialSiteContent> {
        debug!(endpoint = %self.endpoint, "fetching content");
        let content = self
            .client
            .get(&self.endpoint)
            .timeout(self.fetch_timeout)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::json::<PartialSiteContent>)
            .map_err(ContentError::from)?;
        Ok(content)
    }

    fn replace(&self, content: &SiteContent) -> Result<SiteContent> {
        info!(endpoint = %self.endpoint, "replacing content");
        let stored = self
            .client
            .put(&self.endpoint)
            .timeout(self.save_timeout)
            .json(content)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::json::<SiteContent>)
            .map_err(ContentError::from)?;
        Ok(stored)
    }
}

/// In-process store that seeds the default copy on first read.
#[derive(Debug, Default)]
pub struct MemoryContentStore {
    content: RefCell<Option<SiteContent>>,
}

impl MemoryContentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `content`.
    #[must_use]
    pub fn with_content(content: SiteContent) -> Self {
        Self {
            content: RefCell::new(Some(content)),
        }
    }

    /// Current content without seeding.
    #[must_use]
    pub fn snapshot(&self) -> Option<SiteContent> {
        self.content.borrow().clone()
    }
}

impl ContentStore for MemoryContentStore {
    fn fetch(&self) -> Result<PartialSiteContent> {
        let mut slot = self.content.borrow_mut();
        let content = slot.get_or_insert_with(|| {
            debug!("seeding default content");
            SiteContent::default()
        });
        Ok(content.clone().into())
    }

    fn replace(&self, content: &SiteContent) -> Result<SiteContent> {
        *self.content.borrow_mut() = Some(content.clone());
        Ok(content.clone())
    }
}
