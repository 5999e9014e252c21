//! Contact block: suppressed form, contact details and partners.

use askama::Template;

use crate::site::view_models::{ContactView, SectionHeading};

#[derive(Template)]
#[template(path = "sections/contact.html")]
struct ContactTemplate<'a> {
    heading: &'a SectionHeading<'a>,
    view: &'a ContactView<'a>,
}

pub fn render(view: &ContactView<'_>) -> askama::Result<String> {
    ContactTemplate { heading: &view.heading, view }.render()
}
