//! Editable landing-page copy around the die: remote store, page binding and
//! the admin editor.
//!
//! Nothing here touches the die geometry or rendering.

mod admin;
mod binding;
mod model;
mod store;

pub use admin::{
    AdminForm, AdminGate, AdminPanel, CredentialCache, MemoryCredentialCache, Notice, Notifier,
    DEFAULT_ADMIN_PASSWORD,
};
pub use binding::ContentBinding;
pub use model::{
    merge_with_defaults, Ctas, FaqItem, Hero, HowToBuyStep, PartialSiteContent, PublicConfig,
    RoadmapSection, SiteContent, TokenomicsItem,
};
pub use store::{content_endpoint, ContentStore, HttpContentStore, MemoryContentStore, CONTENT_PATH};
