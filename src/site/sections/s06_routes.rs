//! Route suggestion cards.

use askama::Template;

use crate::site::view_models::{RoutesView, SectionHeading};

#[derive(Template)]
#[template(path = "sections/routes.html")]
struct RoutesTemplate<'a> {
    heading: &'a SectionHeading<'a>,
    view: &'a RoutesView<'a>,
}

pub fn render(view: &RoutesView<'_>) -> askama::Result<String> {
    RoutesTemplate { heading: &view.heading, view }.render()
}
