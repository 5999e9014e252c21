//! Vélo Club Saint‑Léger‑les‑Vignes site renderer
//!
//! Renders the club's single-page website to static HTML.
//!
//! - `content/`: compile-time content store (rides, events, tiers, routes, copy)
//! - `site/`: view models, view builder, per-section Askama templates, page generator
//! - `actions`: contact form submission and GPX download, both deliberate no-ops
//! - `config`: render settings from environment variables

pub mod actions;
pub mod config;
pub mod content;
pub mod error;
pub mod site;

// Re-export commonly used types
pub use actions::{submit_contact_form, ContactForm, FormError, SubmitOutcome};
pub use config::RenderConfig;
pub use content::ContentStore;
pub use error::{Result, SiteError};
pub use site::{build_page_data, JsonFormatter, PageData, SectionId, SiteGenerator};
