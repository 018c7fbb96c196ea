//! # Hero Image
//!
//! Derives the display attributes of a content-managed "hero image" banner:
//! the image URL (with a cache-busting timestamp), its accessible title, and
//! the CSS class list of the container.
//!
//! The crate owns no content. The host supplies the component's properties,
//! a repository to resolve the referenced asset in, the request's context
//! path and the render mode. Everything else is field mapping and string
//! formatting.
//!
//! # Resolution Flow
//!
//! ```text
//! component properties ──► class list          "we-HeroImage width-full"
//!        │
//!        ├─ fileReference ──► asset ──► metadata ──► title   "Summer Collection"
//!        │
//!        └─ jcr:lastModified / jcr:created ──► timestamp
//!                                                 │
//! context path + component path ──────────────────┴──► src
//!     "/shop/content/site/jcr%3acontent/hero.img.jpeg/1700000000000.jpeg"
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`hero`] | The view-model: dependency bundle in, memoized class list and image out |
//! | [`class_list`] | Layout flags → CSS class list |
//! | [`metadata`] | `fileReference` → asset reference → whitelisted metadata → title |
//! | [`last_modified`] | Cache-busting timestamp from the component's dates |
//! | [`image`] | Image URL assembly and the [`image::HeroImage`] value |
//! | [`properties`] | Loosely typed property maps with converting reads |
//! | [`repository`] | Resolver traits the host implements, plus an in-memory repository |
//! | [`context`] | Component, request and render mode inputs |
//! | [`markup`] | Reference banner markup rendered with Maud |
//! | [`fixture`] | TOML description of a host environment for offline resolution |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Absence Is Not an Error
//!
//! A missing `fileReference`, a dangling asset path, an asset without a title,
//! a component without dates: each degrades the banner (no title, no
//! timestamp) instead of failing the page. Resolution functions return plain
//! values; only fixture loading returns `Result`.
//!
//! ## URLs Follow the Component, Not the Asset
//!
//! The image is served through the component's own path with an image
//! selector. Swapping the referenced asset edits the component, which bumps
//! its `jcr:lastModified`, which changes the URL. Browsers and proxies never
//! serve the old picture.
//!
//! ## Binary Render Mode
//!
//! The host reports a single flag: authoring or not. Any view that is not
//! authoring gets cache-busting URLs; no finer-grained preview modes exist.

pub mod class_list;
pub mod context;
pub mod fixture;
pub mod hero;
pub mod image;
pub mod last_modified;
pub mod markup;
pub mod metadata;
pub mod output;
pub mod properties;
pub mod repository;

#[cfg(test)]
pub(crate) mod test_helpers;
