//! Upcoming events grid.

use askama::Template;

use crate::site::view_models::{EventsView, SectionHeading};

#[derive(Template)]
#[template(path = "sections/events.html")]
struct EventsTemplate<'a> {
    heading: &'a SectionHeading<'a>,
    view: &'a EventsView<'a>,
}

pub fn render(view: &EventsView<'_>) -> askama::Result<String> {
    EventsTemplate { heading: &view.heading, view }.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::site::view_builder::build_page_data;

    #[test]
    fn test_one_card_per_event() {
        let store = ContentStore::velo_club_slv();
        let page = build_page_data(&store, 2025);
        let html = render(&page.events).unwrap();

        assert_eq!(html.matches("<article class=\"card event\">").count(), 3);
        assert!(html.contains("<p class=\"event-date\">9 nov.</p>"));
        assert!(html.contains("<h3>Téléthon à vélo</h3>"));
        assert!(html.contains("Tour solidaire autour du bourg"));
        assert_eq!(html.matches(">Je participe</a>").count(), 3);
    }
}
