//! Weekly rides table.

use askama::Template;

use crate::site::view_models::{ScheduleView, SectionHeading};

#[derive(Template)]
#[template(path = "sections/schedule.html")]
struct ScheduleTemplate<'a> {
    heading: &'a SectionHeading<'a>,
    view: &'a ScheduleView<'a>,
}

pub fn render(view: &ScheduleView<'_>) -> askama::Result<String> {
    ScheduleTemplate { heading: &view.heading, view }.render()
}
