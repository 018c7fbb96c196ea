//! Per-render inputs supplied by the host: the component being rendered, the
//! request it is rendered for, and the render mode.

use crate::properties::ValueMap;
use serde::{Deserialize, Serialize};

/// The hero image component's own resource.
///
/// Its properties double as the component configuration (`fileReference`,
/// `useFullWidth`, `keepRatio`) and as the resource's own metadata
/// (`jcr:lastModified`, `jcr:created`).
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    path: String,
    properties: ValueMap,
}

impl Component {
    pub fn new(path: impl Into<String>, properties: ValueMap) -> Self {
        Self {
            path: path.into(),
            properties,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn properties(&self) -> &ValueMap {
        &self.properties
    }
}

/// The HTTP request the page is rendered for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    context_path: String,
}

impl RequestContext {
    /// `context_path` is the deployment mount prefix, e.g. `/shop`, or empty.
    pub fn new(context_path: impl Into<String>) -> Self {
        Self {
            context_path: context_path.into(),
        }
    }

    pub fn context_path(&self) -> &str {
        &self.context_path
    }
}

/// Whether the page is rendered for authors or for end users.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Published,
    Authoring,
}

impl RenderMode {
    /// True in authoring mode, where cache-busting URLs are disabled.
    pub fn is_disabled(self) -> bool {
        matches!(self, RenderMode::Authoring)
    }
}
