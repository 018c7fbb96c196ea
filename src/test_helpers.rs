//! Shared test utilities.
//!
//! Provides a small sample repository and builders for components, asset
//! references and view-models, so module tests read as scenarios:
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let repo = sample_repository();
//! let component = hero_component(ValueMap::new().with("fileReference", HERO_ASSET_PATH));
//! let request = RequestContext::default();
//! let hero = view_model(&component, &repo, &request, RenderMode::Published);
//! assert_eq!(hero.image().title(), Some("Summer Collection"));
//! ```

use std::collections::BTreeMap;

use crate::context::{Component, RenderMode, RequestContext};
use crate::hero::{HeroDeps, HeroImageViewModel};
use crate::metadata::{self, AssetReference, PROP_FILE_REFERENCE};
use crate::properties::ValueMap;
use crate::repository::{Asset, MemoryRepository};

pub const HERO_COMPONENT_PATH: &str = "/content/we-retail/en/jcr:content/hero";
pub const HERO_ASSET_PATH: &str = "/content/dam/we-retail/en/hero.jpg";

// =========================================================================
// Builders
// =========================================================================

/// Metadata map from key/value pairs.
pub fn metadata(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Repository with one asset at [`HERO_ASSET_PATH`] carrying both titles and
/// a couple of technical fields.
pub fn sample_repository() -> MemoryRepository {
    let mut repo = MemoryRepository::new();
    repo.add_asset(
        HERO_ASSET_PATH,
        Asset::new(metadata(&[
            ("jcr:title", "Summer Collection"),
            ("dc:title", "IMG_2041"),
            ("dam:MIMEtype", "image/jpeg"),
            ("dam:Fileformat", "JPEG"),
        ])),
    );
    repo
}

/// The hero component at [`HERO_COMPONENT_PATH`].
pub fn hero_component(properties: ValueMap) -> Component {
    Component::new(HERO_COMPONENT_PATH, properties)
}

/// A resolved reference to an asset with the given metadata.
pub fn asset_reference(pairs: &[(&str, &str)]) -> AssetReference {
    AssetReference {
        path: HERO_ASSET_PATH.to_string(),
        name: "hero.jpg".to_string(),
        asset: Some(Asset::new(metadata(pairs))),
    }
}

/// Resolve `path` through `repo` as if it were the configured file reference.
pub fn reference_to(repo: &MemoryRepository, path: &str) -> Option<AssetReference> {
    let config = ValueMap::new().with(PROP_FILE_REFERENCE, path);
    metadata::resolve_reference(&config, repo, repo)
}

pub fn view_model<'a>(
    component: &'a Component,
    repo: &'a MemoryRepository,
    request: &'a RequestContext,
    mode: RenderMode,
) -> HeroImageViewModel<'a> {
    HeroImageViewModel::new(HeroDeps {
        component,
        resources: repo,
        assets: repo,
        request,
        mode,
    })
}
