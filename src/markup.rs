//! Reference markup for the hero banner.
//!
//! Pages normally render the view-model through their own template engine.
//! This renderer produces the same structure for previews and the CLI,
//! using [maud](https://maud.lambda.xyz/) so every interpolated value is
//! escaped.

use maud::{Markup, html};

use crate::hero::HeroImageViewModel;

/// Renders the banner container and its image.
///
/// `alt` and `title` are only emitted when a title was resolved.
pub fn render_hero(hero: &HeroImageViewModel<'_>) -> Markup {
    let image = hero.image();
    html! {
        div class=(hero.class_list()) {
            img src=(image.src()) alt=[image.title()] title=[image.title()];
        }
    }
}
