//! Asset reference resolution and metadata extraction.
//!
//! The component's `fileReference` property points at an asset in the
//! repository. Resolution is best-effort at every step:
//!
//! ```text
//! fileReference  →  Resource  →  Asset  →  whitelisted metadata  →  title
//!   (blank?)        (exists?)   (is one?)   (key present?)         (jcr, dc)
//! ```
//!
//! Each `?` that comes up empty short-circuits to an empty result rather than
//! an error, so a banner with a dangling or missing reference still renders.
//!
//! ## Title precedence
//!
//! - **`jcr:title`**: the title an author typed on the asset in the repository.
//! - **`dc:title`**: the Dublin Core title embedded in the file by the
//!   authoring tool (Lightroom, Photoshop, ...).
//!
//! The first key *present* wins, even when its value is empty: an author who
//! cleared the repository title has said something about it.

use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::properties::ValueMap;
use crate::repository::{Asset, AssetResolver, ResourceResolver};

pub const PROP_FILE_REFERENCE: &str = "fileReference";

pub const PROP_DC_TITLE: &str = "dc:title";
pub const PROP_JCR_TITLE: &str = "jcr:title";

/// Metadata keys read from the referenced asset.
pub const META_KEYS: [&str; 6] = [
    "dam:Bitsperpixel",
    "dam:MIMEtype",
    "dc:description",
    PROP_DC_TITLE,
    PROP_JCR_TITLE,
    "smp:CreatorTool",
];

/// Title keys in priority order.
pub const TITLE_KEYS: [&str; 2] = [PROP_JCR_TITLE, PROP_DC_TITLE];

/// A `fileReference` that resolved to a resource in the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetReference {
    pub path: String,
    pub name: String,
    /// `None` when the resource exists but is not an asset.
    pub asset: Option<Asset>,
}

/// Resolve the component's `fileReference` against the repository.
///
/// Returns `None` when the property is missing or blank, or when no resource
/// exists at that path.
pub fn resolve_reference(
    config: &ValueMap,
    resources: &dyn ResourceResolver,
    assets: &dyn AssetResolver,
) -> Option<AssetReference> {
    let file_path = config
        .get_str(PROP_FILE_REFERENCE)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())?;

    let Some(resource) = resources.get_resource(&file_path) else {
        debug!(path = %file_path, "file reference does not resolve");
        return None;
    };
    let asset = assets.resolve_to_asset(&resource);

    Some(AssetReference {
        path: resource.path().to_string(),
        name: resource.name().to_string(),
        asset,
    })
}

/// Collect the whitelisted metadata of the referenced asset, keyed and
/// ordered by metadata key.
pub fn extract(reference: Option<&AssetReference>) -> BTreeMap<String, String> {
    let path = reference.map(|r| r.path.as_str());
    let asset = reference.and_then(|r| r.asset.as_ref());

    let mut values = BTreeMap::new();
    for key in META_KEYS {
        match asset.and_then(|a| a.metadata_value(key)) {
            Some(val) => {
                values.insert(key.to_string(), val.to_string());
            }
            None => info!(key, path, "asset metadata not found"),
        }
    }

    info!(
        name = reference.map(|r| r.name.as_str()),
        path,
        meta = ?values,
        "resolved hero image asset"
    );
    values
}

/// Pick the image title from extracted metadata.
pub fn resolve_title(metadata: &BTreeMap<String, String>) -> Option<String> {
    TITLE_KEYS.iter().find_map(|&key| {
        let title = metadata.get(key)?;
        debug!(title = %title, key, "found image title");
        Some(title.clone())
    })
}
