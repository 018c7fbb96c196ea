//! Content repository seams.
//!
//! The hero image never owns content; it reads already-resolved resources and
//! asset metadata through two traits. Hosts implement them against their own
//! store. [`MemoryRepository`] is the in-process implementation used by
//! fixtures and tests.

use std::collections::BTreeMap;

/// A node in the content tree, addressed by its absolute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    path: String,
    name: String,
}

impl Resource {
    /// Name is the last path segment (`/content/dam/hero.jpg` → `hero.jpg`),
    /// ignoring trailing slashes.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = match path.trim_end_matches('/').rsplit_once('/') {
            Some((_, name)) => name.to_string(),
            None => path.trim_end_matches('/').to_string(),
        };
        Self { path, name }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A managed media item and its metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Asset {
    metadata: BTreeMap<String, String>,
}

impl Asset {
    pub fn new(metadata: BTreeMap<String, String>) -> Self {
        Self { metadata }
    }

    /// Metadata value for `key`, `None` when the asset does not carry it.
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

/// Looks up resources by path.
pub trait ResourceResolver {
    fn get_resource(&self, path: &str) -> Option<Resource>;
}

/// Adapts a resource to the asset it represents, if any.
pub trait AssetResolver {
    fn resolve_to_asset(&self, resource: &Resource) -> Option<Asset>;
}

/// Resources keyed by path; a resource with no asset entry is plain content.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    resources: BTreeMap<String, Option<Asset>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource that is not an asset.
    pub fn add_resource(&mut self, path: &str) {
        self.resources.insert(path.to_string(), None);
    }

    /// Register a resource backed by an asset.
    pub fn add_asset(&mut self, path: &str, asset: Asset) {
        self.resources.insert(path.to_string(), Some(asset));
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourceResolver for MemoryRepository {
    fn get_resource(&self, path: &str) -> Option<Resource> {
        self.resources
            .contains_key(path)
            .then(|| Resource::new(path))
    }
}

impl AssetResolver for MemoryRepository {
    fn resolve_to_asset(&self, resource: &Resource) -> Option<Asset> {
        self.resources.get(resource.path()).cloned().flatten()
    }
}
