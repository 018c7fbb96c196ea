//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines, for testability,
//! and a `print_*` wrapper that writes them to stdout.
//!
//! ## Resolve
//!
//! ```text
//! Hero image (published)
//!     Class list: we-HeroImage width-full
//!     Src: /content/we-retail/en/jcr%3acontent/hero.img.jpeg/1700000000000.jpeg
//!     Title: Summer Collection
//! ```
//!
//! ## Check
//!
//! ```text
//! Component /content/we-retail/en/jcr:content/hero
//!     Mode: published
//!     Context path: (root)
//!     Properties: 4
//! Resources
//!     /content/dam/we-retail/en/hero.jpg (asset, 6 metadata keys)
//! ```

use crate::context::RenderMode;
use crate::fixture::Fixture;
use crate::hero::HeroImageView;

fn mode_label(mode: RenderMode) -> &'static str {
    match mode {
        RenderMode::Published => "published",
        RenderMode::Authoring => "authoring",
    }
}

/// Lines describing a resolved hero image.
pub fn format_resolve(view: &HeroImageView<'_>, mode: RenderMode) -> Vec<String> {
    vec![
        format!("Hero image ({})", mode_label(mode)),
        format!("    Class list: {}", view.class_list),
        format!("    Src: {}", view.image.src()),
        format!("    Title: {}", view.image.title().unwrap_or("(none)")),
    ]
}

pub fn print_resolve(view: &HeroImageView<'_>, mode: RenderMode) {
    for line in format_resolve(view, mode) {
        println!("{line}");
    }
}

/// Lines describing a fixture's contents.
pub fn format_check(fixture: &Fixture) -> Vec<String> {
    let context_path = match fixture.request.context_path.as_str() {
        "" => "(root)",
        path => path,
    };
    let mut lines = vec![
        format!("Component {}", fixture.component.path),
        format!("    Mode: {}", mode_label(fixture.mode)),
        format!("    Context path: {context_path}"),
        format!("    Properties: {}", fixture.component.properties.len()),
    ];

    if !fixture.resources.is_empty() {
        lines.push("Resources".to_string());
        for resource in &fixture.resources {
            let kind = match &resource.metadata {
                Some(meta) => format!("asset, {} metadata keys", meta.len()),
                None => "resource".to_string(),
            };
            lines.push(format!("    {} ({kind})", resource.path));
        }
    }
    lines
}

pub fn print_check(fixture: &Fixture) {
    for line in format_check(fixture) {
        println!("{line}");
    }
}
