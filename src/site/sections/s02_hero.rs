//! Hero block: headline, lead paragraph, calls to action and the
//! decorative bicycle illustration.

use askama::Template;

use crate::site::view_models::HeroView;

#[derive(Template)]
#[template(path = "sections/hero.html")]
struct HeroTemplate<'a> {
    view: &'a HeroView<'a>,
}

pub fn render(view: &HeroView<'_>) -> askama::Result<String> {
    HeroTemplate { view }.render()
}
