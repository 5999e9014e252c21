//! Page Generator
//!
//! Main entry point for rendering the club page.
//! Composes the view models, renders every section in document order and
//! wraps the result in the HTML layout.
//!
//! Public API (consumed by the render_site binary):
//! - SiteGenerator::new() -> Self
//! - SiteGenerator::generate(store, year) -> Result<String>
//! - SiteGenerator::generate_current(store) -> Result<String>

use askama::Template;
use chrono::{Datelike, Local};

use crate::content::ContentStore;
use crate::error::{Result, SiteError};
use crate::site::sections::{render_section, SectionId};
use crate::site::view_builder::build_page_data;
use crate::site::view_models::PageData;

#[derive(Template)]
#[template(path = "layout.html")]
struct LayoutTemplate<'a> {
    title: &'a str,
    body: &'a str,
}

/// Page generator - stateless HTML renderer.
pub struct SiteGenerator;

impl SiteGenerator {
    /// Create a new page generator.
    pub fn new() -> Self {
        Self
    }

    /// Render the complete page for the given copyright year.
    pub fn generate(&self, store: &ContentStore, year: i32) -> Result<String> {
        let page = build_page_data(store, year);
        self.assemble(&page)
    }

    /// Render the complete page, reading the current year once for this call.
    pub fn generate_current(&self, store: &ContentStore) -> Result<String> {
        self.generate(store, current_year())
    }

    /// Render already composed page data.
    pub fn assemble(&self, page: &PageData<'_>) -> Result<String> {
        let mut sections = Vec::with_capacity(SectionId::ORDER.len());
        for section in SectionId::ORDER {
            let html = render_section(section, page)?;
            tracing::debug!("Rendered section {} ({} bytes)", section, html.len());
            sections.push(html);
        }

        let body = sections.join("\n");
        let html = LayoutTemplate { title: page.title, body: &body }
            .render()
            .map_err(SiteError::Layout)?;

        tracing::info!("Rendered page with {} sections ({} bytes)", sections.len(), html.len());
        Ok(html)
    }
}

impl Default for SiteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Calendar year from the local wall clock.
pub fn current_year() -> i32 {
    Local::now().year()
}
