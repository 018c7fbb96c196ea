//! Render fixtures: a host environment described in TOML.
//!
//! A fixture captures everything a hero image render reads from its host, so
//! a banner can be resolved offline, from the CLI or from tests:
//!
//! ```toml
//! mode = "published"                # or "authoring"
//!
//! [request]
//! context_path = "/shop"            # deployment mount prefix, may be empty
//!
//! [component]
//! path = "/content/we-retail/en/jcr:content/hero"
//!
//! [component.properties]
//! fileReference = "/content/dam/we-retail/hero.jpg"
//! useFullWidth = "true"
//! "jcr:lastModified" = "2023-11-14T22:13:20Z"
//!
//! [[resources]]
//! path = "/content/dam/we-retail/hero.jpg"
//!
//! [resources.metadata]              # omit to make a plain, non-asset resource
//! "jcr:title" = "Summer Collection"
//! ```
//!
//! Dates are RFC 3339 strings or epoch milliseconds. TOML's bare datetime
//! literals are not accepted; quote them.
//!
//! Unknown keys are rejected to catch typos early.

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::context::{Component, RenderMode, RequestContext};
use crate::properties::ValueMap;
use crate::repository::{Asset, MemoryRepository};

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Fixture validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    /// Render mode; published unless stated.
    #[serde(default)]
    pub mode: RenderMode,
    #[serde(default)]
    pub request: RequestFixture,
    pub component: ComponentFixture,
    #[serde(default)]
    pub resources: Vec<ResourceFixture>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RequestFixture {
    pub context_path: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentFixture {
    pub path: String,
    #[serde(default)]
    pub properties: ValueMap,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceFixture {
    pub path: String,
    /// Present for assets, absent for plain content resources.
    #[serde(default)]
    pub metadata: Option<BTreeMap<String, String>>,
}

impl Fixture {
    /// Parse and validate fixture TOML.
    pub fn parse(content: &str) -> Result<Self, FixtureError> {
        let fixture: Fixture = toml::from_str(content)?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// Read, parse and validate a fixture file.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Check paths are absolute and resources unique.
    pub fn validate(&self) -> Result<(), FixtureError> {
        if !self.component.path.starts_with('/') {
            return Err(FixtureError::Validation(format!(
                "component.path must be absolute, got '{}'",
                self.component.path
            )));
        }
        let context_path = &self.request.context_path;
        if !context_path.is_empty() && (!context_path.starts_with('/') || context_path.ends_with('/'))
        {
            return Err(FixtureError::Validation(format!(
                "request.context_path must be empty or start but not end with '/', got '{context_path}'"
            )));
        }
        let mut seen = BTreeSet::new();
        for resource in &self.resources {
            if !resource.path.starts_with('/') {
                return Err(FixtureError::Validation(format!(
                    "resource path must be absolute, got '{}'",
                    resource.path
                )));
            }
            if !seen.insert(resource.path.as_str()) {
                return Err(FixtureError::Validation(format!(
                    "duplicate resource '{}'",
                    resource.path
                )));
            }
        }
        Ok(())
    }

    pub fn component(&self) -> Component {
        Component::new(self.component.path.clone(), self.component.properties.clone())
    }

    pub fn request(&self) -> RequestContext {
        RequestContext::new(self.request.context_path.clone())
    }

    /// In-memory repository holding the fixture's resources.
    pub fn repository(&self) -> MemoryRepository {
        let mut repo = MemoryRepository::new();
        for resource in &self.resources {
            match &resource.metadata {
                Some(metadata) => repo.add_asset(&resource.path, Asset::new(metadata.clone())),
                None => repo.add_resource(&resource.path),
            }
        }
        repo
    }
}

/// A documented fixture covering every option.
pub fn stock_fixture_toml() -> &'static str {
    r##"# Hero image render fixture
#
# Describes the host environment of a single hero image render.

# "published" appends a cache-busting timestamp to the image URL,
# "authoring" never does.
mode = "published"

[request]
# Deployment mount prefix prepended to the image URL. Empty when the site is
# served from the root.
context_path = ""

[component]
# Repository path of the hero image component itself. The image URL is
# derived from this path, not from the asset's.
path = "/content/we-retail/en/jcr:content/hero"

[component.properties]
# Asset shown in the banner.
fileReference = "/content/dam/we-retail/en/hero.jpg"
# Layout flags; only the exact string "true" turns them on.
useFullWidth = "true"
keepRatio = "false"
# Cache-busting timestamp source (falls back to "jcr:created").
# RFC 3339 string or epoch milliseconds.
"jcr:lastModified" = "2023-11-14T22:13:20Z"

[[resources]]
path = "/content/dam/we-retail/en/hero.jpg"

# Asset metadata. Drop this table to model a resource that is not an asset.
[resources.metadata]
"jcr:title" = "Summer Collection"
"dc:title" = "IMG_2041"
"dc:description" = "Models on the beach at dusk"
"dam:MIMEtype" = "image/jpeg"
"dam:Bitsperpixel" = "24"
"smp:CreatorTool" = "Adobe Photoshop Lightroom"
"##
}
