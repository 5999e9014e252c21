//! Footer with the copyright year and placeholder links.

use askama::Template;

use crate::site::view_models::FooterView;

#[derive(Template)]
#[template(path = "sections/footer.html")]
struct FooterTemplate<'a> {
    view: &'a FooterView<'a>,
}

pub fn render(view: &FooterView<'_>) -> askama::Result<String> {
    FooterTemplate { view }.render()
}
