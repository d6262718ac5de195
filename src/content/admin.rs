//! Password-gated editor for the contract address and CTA links.
//!
//! The gate is a plaintext comparison on the client and offers no protection;
//! the content API itself accepts any update.

use std::time::Duration;

use tracing::{info, warn};

use crate::error::{ContentError, Result};

use super::model::SiteContent;
use super::store::ContentStore;

/// Password the demo panel ships with.
pub const DEFAULT_ADMIN_PASSWORD: &str = "KOG2025";

/// Persistent storage for an accepted password (browser local storage on the web).
pub trait CredentialCache {
    fn load(&self) -> Option<String>;
    fn store(&mut self, password: &str);
}

/// Cache that lives as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialCache {
    password: Option<String>,
}

impl CredentialCache for MemoryCredentialCache {
    fn load(&self) -> Option<String> {
        self.password.clone()
    }

    fn store(&mut self, password: &str) {
        self.password = Some(password.to_owned());
    }
}

/// Unlocks the admin panel when the entered password matches.
#[derive(Debug)]
pub struct AdminGate<C> {
    expected: String,
    cache: C,
    unlocked: bool,
}

impl<C: CredentialCache> AdminGate<C> {
    /// Creates a gate, unlocking immediately if the cache holds the right password.
    pub fn new(expected: impl Into<String>, cache: C) -> Self {
        let mut gate = Self {
            expected: expected.into(),
            cache,
            unlocked: false,
        };
        if let Some(remembered) = gate.cache.load() {
            gate.enter(&remembered);
        }
        gate
    }

    /// Tries a password; a match unlocks the gate and is remembered.
    pub fn enter(&mut self, candidate: &str) -> bool {
        if !candidate.is_empty() && candidate == self.expected {
            self.unlocked = true;
            self.cache.store(candidate);
        }
        self.unlocked
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    #[must_use]
    pub fn cache(&self) -> &C {
        &self.cache
    }
}

/// The four fields the admin panel edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminForm {
    pub contract_address: String,
    pub dex_url: String,
    pub telegram: String,
    pub twitter: String,
}

impl AdminForm {
    /// Prefills the form from current content.
    #[must_use]
    pub fn from_content(content: &SiteContent) -> Self {
        Self {
            contract_address: content.config.contract_address.clone(),
            dex_url: content.hero.ctas.dex_url.clone(),
            telegram: content.hero.ctas.telegram.clone(),
            twitter: content.hero.ctas.twitter.clone(),
        }
    }

    /// Full replacement payload: `content` with the form's fields written in.
    #[must_use]
    pub fn apply(&self, content: &SiteContent) -> SiteContent {
        let mut updated = content.clone();
        updated.config.contract_address.clone_from(&self.contract_address);
        updated.hero.ctas.dex_url.clone_from(&self.dex_url);
        updated.hero.ctas.telegram.clone_from(&self.telegram);
        updated.hero.ctas.twitter.clone_from(&self.twitter);
        updated
    }
}

/// A short toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub duration: Duration,
}

impl Notice {
    #[must_use]
    pub fn new(title: &str, description: &str, duration_ms: u64) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            duration: Duration::from_millis(duration_ms),
        }
    }
}

/// Toast dispatcher.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Saves admin edits to a content store, reporting through a notifier.
pub struct AdminPanel<'a, S: ?Sized, N: ?Sized> {
    store: &'a S,
    notifier: &'a N,
}

impl<'a, S, N> AdminPanel<'a, S, N>
where
    S: ContentStore + ?Sized,
    N: Notifier + ?Sized,
{
    #[must_use]
    pub fn new(store: &'a S, notifier: &'a N) -> Self {
        Self { store, notifier }
    }

    /// Writes `form` onto `current` and replaces the stored content.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Unauthorized`] if the gate is locked, or the
    /// store's error if the update fails. Either way a notice is emitted.
    pub fn save<C: CredentialCache>(
        &self,
        gate: &AdminGate<C>,
        form: &AdminForm,
        current: &SiteContent,
    ) -> Result<SiteContent> {
        if !gate.is_unlocked() {
            self.notifier.notify(Notice::new(
                "Unauthorized",
                "Enter correct password first",
                2500,
            ));
            return Err(ContentError::Unauthorized.into());
        }

        match self.store.replace(&form.apply(current)) {
            Ok(stored) => {
                info!(contract = %stored.config.contract_address, "admin content saved");
                self.notifier.notify(Notice::new(
                    "Saved",
                    "Content updated successfully",
                    2500,
                ));
                Ok(stored)
            }
            Err(err) => {
                warn!(%err, "admin content save failed");
                self.notifier
                    .notify(Notice::new("Save failed", &err.to_string(), 3000));
                Err(err)
            }
        }
    }
}
