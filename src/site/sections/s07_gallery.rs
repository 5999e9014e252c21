//! Photo placeholder grid.

use askama::Template;

use crate::site::view_models::{GalleryView, SectionHeading};

#[derive(Template)]
#[template(path = "sections/gallery.html")]
struct GalleryTemplate<'a> {
    heading: &'a SectionHeading<'a>,
    view: &'a GalleryView,
}

pub fn render(view: &GalleryView) -> askama::Result<String> {
    GalleryTemplate { heading: &view.heading, view }.render()
}
