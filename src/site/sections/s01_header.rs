//! Header: club brand and main navigation.

use askama::Template;

use crate::site::view_models::HeaderView;

#[derive(Template)]
#[template(path = "sections/header.html")]
struct HeaderTemplate<'a> {
    view: &'a HeaderView<'a>,
}

pub fn render(view: &HeaderView<'_>) -> askama::Result<String> {
    HeaderTemplate { view }.render()
}
