use tracing::warn;

use super::model::{merge_with_defaults, Ctas, SiteContent};
use super::store::ContentStore;

/// Page copy as consumed by the landing-page template.
///
/// Always holds usable content: whatever the store could not supply comes from
/// the defaults, and failures only set [`ContentBinding::error`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBinding {
    content: SiteContent,
    loading: bool,
    error: Option<String>,
}

impl ContentBinding {
    /// Binding shown before the first fetch completes.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            content: SiteContent::default(),
            loading: true,
            error: None,
        }
    }

    /// Fetches from `store` and merges with the default copy.
    pub fn load<S: ContentStore + ?Sized>(store: &S) -> Self {
        let defaults = SiteContent::default();
        match store.fetch() {
            Ok(remote) => Self {
                content: merge_with_defaults(Some(remote), &defaults),
                loading: false,
                error: None,
            },
            Err(err) => {
                warn!(%err, "falling back to default content");
                Self {
                    content: defaults,
                    loading: false,
                    error: Some(err.to_string()),
                }
            }
        }
    }

    #[must_use]
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Token contract address, empty until one is published.
    #[must_use]
    pub fn contract(&self) -> &str {
        &self.content.config.contract_address
    }

    #[must_use]
    pub fn ctas(&self) -> &Ctas {
        &self.content.hero.ctas
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::content::model::PartialSiteContent;
    use crate::content::store::MemoryContentStore;
    use crate::error::{ContentError, Result};

    /// Store that is always unreachable.
    pub(crate) struct OfflineStore;

    impl ContentStore for OfflineStore {
        fn fetch(&self) -> Result<PartialSiteContent> {
            Err(ContentError::Unauthorized.into())
        }

        fn replace(&self, _content: &SiteContent) -> Result<SiteContent> {
            Err(ContentError::Unauthorized.into())
        }
    }

    #[test]
    fn pending_binding_shows_defaults() {
        let binding = ContentBinding::pending();
        assert!(binding.is_loading());
        assert_eq!(binding.content(), &SiteContent::default());
    }

    #[test]
    fn load_exposes_contract_and_ctas() {
        let mut content = SiteContent::default();
        content.config.contract_address = "0xfeed".to_owned();
        content.hero.ctas.dex_url = "https://dex.example/swap".to_owned();
        let store = MemoryContentStore::with_content(content);

        let binding = ContentBinding::load(&store);
        assert!(!binding.is_loading());
        assert!(binding.error().is_none());
        assert_eq!(binding.contract(), "0xfeed");
        assert_eq!(binding.ctas().dex_url, "https://dex.example/swap");
    }

    #[test]
    fn failed_load_keeps_defaults_and_reports_error() {
        let binding = ContentBinding::load(&OfflineStore);
        assert!(!binding.is_loading());
        assert!(binding.error().is_some());
        assert_eq!(binding.content(), &SiteContent::default());
        assert_eq!(binding.contract(), "");
    }
}
