//! Practical info: safety rules and how the association runs.

use askama::Template;

use crate::site::view_models::{PracticalInfoView, SectionHeading};

#[derive(Template)]
#[template(path = "sections/practical_info.html")]
struct PracticalInfoTemplate<'a> {
    heading: &'a SectionHeading<'a>,
    view: &'a PracticalInfoView<'a>,
}

pub fn render(view: &PracticalInfoView<'_>) -> askama::Result<String> {
    PracticalInfoTemplate { heading: &view.heading, view }.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::site::view_builder::build_page_data;

    #[test]
    fn test_two_rule_lists_without_subtitle() {
        let store = ContentStore::velo_club_slv();
        let page = build_page_data(&store, 2025);
        let html = render(&page.practical).unwrap();

        assert_eq!(html.matches("<ul class=\"rules\">").count(), 2);
        assert_eq!(
            html.matches("<li>").count(),
            store.safety_rules.len() + store.association_rules.len()
        );
        assert!(html.contains("<h3>Règles de sécurité</h3>"));
        assert!(!html.contains("class=\"subtitle\""));
    }
}
