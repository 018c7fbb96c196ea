//! Hero image URL and title.
//!
//! The browser never sees the asset's own URL. The image is served through
//! the component's resource with an image selector, so the URL follows the
//! component even when authors swap the referenced asset:
//!
//! ```text
//! <context-path><escaped-component-path>.img.jpeg[/<epoch-millis>.jpeg]
//! /shop         /content/site/en/jcr%3acontent/hero.img.jpeg/1700000000000.jpeg
//! ```
//!
//! The trailing timestamp segment changes whenever the component is edited,
//! which invalidates browser and proxy caches. It is left off in authoring
//! mode and when the component has no usable date.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::info;

use crate::context::{Component, RenderMode, RequestContext};
use crate::last_modified::resolve_last_modified;
use crate::metadata::{self, AssetReference};

/// Characters left unescaped in a repository path.
const PATH_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'/');

const IMAGE_SELECTOR: &str = ".img.jpeg";
const TIMESTAMP_EXTENSION: &str = ".jpeg";

/// The resolved image: where to load it from and what to call it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroImage {
    src: String,
    title: Option<String>,
}

impl HeroImage {
    pub fn new(src: String, title: Option<String>) -> Self {
        info!(src = %src, title = title.as_deref(), "use hero image");
        Self { src, title }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Percent-encode a repository path, keeping `/` separators.
///
/// Hex digits are lowercase (`jcr:content` → `jcr%3acontent`), matching the
/// URLs the repository itself emits and caches key on.
pub fn escape_path(path: &str) -> String {
    utf8_percent_encode(path, PATH_SAFE)
        .map(|chunk| {
            if chunk.starts_with('%') {
                Cow::Owned(chunk.to_ascii_lowercase())
            } else {
                Cow::Borrowed(chunk)
            }
        })
        .collect()
}

/// Assemble the image URL.
///
/// `last_modified` of 0 or less means "no cache-busting segment".
pub fn build_src(
    context_path: &str,
    resource_path: &str,
    last_modified: i64,
    mode: RenderMode,
) -> String {
    let mut src = format!("{context_path}{}{IMAGE_SELECTOR}", escape_path(resource_path));
    if !mode.is_disabled() && last_modified > 0 {
        src.push_str(&format!("/{last_modified}{TIMESTAMP_EXTENSION}"));
    }
    src
}

/// Resolve the hero image for a component.
///
/// Never fails: an unresolved reference yields no title, a component without
/// dates yields a URL without the timestamp segment.
pub fn resolve_image(
    component: &Component,
    reference: Option<&AssetReference>,
    request: &RequestContext,
    mode: RenderMode,
) -> HeroImage {
    let meta: BTreeMap<String, String> = metadata::extract(reference);
    let title = metadata::resolve_title(&meta);

    let last_modified = resolve_last_modified(component.properties());
    let src = build_src(
        request.context_path(),
        component.path(),
        last_modified,
        mode,
    );

    HeroImage::new(src, title)
}
