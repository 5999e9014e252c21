//! Membership tiers and joining notes.

use askama::Template;

use crate::site::view_models::{MembershipView, SectionHeading};

#[derive(Template)]
#[template(path = "sections/membership.html")]
struct MembershipTemplate<'a> {
    heading: &'a SectionHeading<'a>,
    view: &'a MembershipView<'a>,
}

pub fn render(view: &MembershipView<'_>) -> askama::Result<String> {
    MembershipTemplate { heading: &view.heading, view }.render()
}
