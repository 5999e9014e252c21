//! Site Generator Module
//!
//! Renders the club's single page as one HTML document.
//!
//! ## Sections
//! 1. Header - brand and navigation links
//! 2. Hero - headline, calls to action, illustration
//! 3. Schedule - weekly rides table
//! 4. Events - upcoming events grid
//! 5. Membership - pricing tiers and joining notes
//! 6. Routes - suggested routes with (unavailable) GPX download
//! 7. Gallery - six photo placeholders
//! 8. Contact - suppressed form, contact details, partners
//! 9. Practical info - safety and association rules
//! 10. Footer - copyright year and placeholder links

pub mod view_models;
pub mod view_builder;
pub mod sections;
pub mod formatters;
pub mod generator;

pub use generator::{current_year, SiteGenerator};
pub use sections::SectionId;
pub use view_builder::build_page_data;
pub use view_models::PageData;
pub use formatters::JsonFormatter;
