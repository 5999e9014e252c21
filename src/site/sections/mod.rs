//! Page Section Renderers
//!
//! Each section module renders one part of the page from its view model
//! through an Askama template under `templates/sections/`.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, SiteError};
use crate::site::view_models::PageData;

pub mod s01_header;
pub mod s02_hero;
pub mod s03_schedule;
pub mod s04_events;
pub mod s05_membership;
pub mod s06_routes;
pub mod s07_gallery;
pub mod s08_contact;
pub mod s09_practical_info;
pub mod s10_footer;

/// Identifies one section of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionId {
    Header,
    Hero,
    Schedule,
    Events,
    Membership,
    Routes,
    Gallery,
    Contact,
    PracticalInfo,
    Footer,
}

impl SectionId {
    /// Fixed document order.
    pub const ORDER: [SectionId; 10] = [
        SectionId::Header,
        SectionId::Hero,
        SectionId::Schedule,
        SectionId::Events,
        SectionId::Membership,
        SectionId::Routes,
        SectionId::Gallery,
        SectionId::Contact,
        SectionId::PracticalInfo,
        SectionId::Footer,
    ];

    /// Element id used for in-page navigation, if the section has one.
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            SectionId::Header | SectionId::Footer => None,
            SectionId::Hero => Some("accueil"),
            SectionId::Schedule => Some("sorties"),
            SectionId::Events => Some("evenements"),
            SectionId::Membership => Some("adhesion"),
            SectionId::Routes => Some("itineraire"),
            SectionId::Gallery => Some("galerie"),
            SectionId::Contact => Some("contact"),
            SectionId::PracticalInfo => Some("infos"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SectionId::Header => "header",
            SectionId::Hero => "hero",
            SectionId::Schedule => "schedule",
            SectionId::Events => "events",
            SectionId::Membership => "membership",
            SectionId::Routes => "routes",
            SectionId::Gallery => "gallery",
            SectionId::Contact => "contact",
            SectionId::PracticalInfo => "practical-info",
            SectionId::Footer => "footer",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render one section of the composed page to HTML.
pub fn render_section(section: SectionId, page: &PageData<'_>) -> Result<String> {
    let rendered = match section {
        SectionId::Header => s01_header::render(&page.header),
        SectionId::Hero => s02_hero::render(&page.hero),
        SectionId::Schedule => s03_schedule::render(&page.schedule),
        SectionId::Events => s04_events::render(&page.events),
        SectionId::Membership => s05_membership::render(&page.membership),
        SectionId::Routes => s06_routes::render(&page.routes),
        SectionId::Gallery => s07_gallery::render(&page.gallery),
        SectionId::Contact => s08_contact::render(&page.contact),
        SectionId::PracticalInfo => s09_practical_info::render(&page.practical),
        SectionId::Footer => s10_footer::render(&page.footer),
    };
    rendered.map_err(|source| SiteError::Render { section, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_order_covers_every_section_once() {
        let unique: HashSet<SectionId> = SectionId::ORDER.iter().copied().collect();
        assert_eq!(unique.len(), SectionId::ORDER.len());
        assert_eq!(SectionId::ORDER[0], SectionId::Header);
        assert_eq!(SectionId::ORDER[9], SectionId::Footer);
    }

    #[test]
    fn test_anchors_unique() {
        let anchors: Vec<&str> = SectionId::ORDER.iter().filter_map(|s| s.anchor()).collect();
        let unique: HashSet<&str> = anchors.iter().copied().collect();
        assert_eq!(anchors.len(), 8);
        assert_eq!(unique.len(), anchors.len());
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(SectionId::PracticalInfo.to_string(), "practical-info");
    }
}
