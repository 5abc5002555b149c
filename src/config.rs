//! Importer configuration: declarative hook construction.
//!
//! Hooks are built explicitly at configuration time and handed to the
//! registry by the caller; there is no lazily constructed default instance
//! hiding behind the first enable call.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::descriptor::RootLocation;
use crate::importer::fs::PathResolverHook;
use crate::importer::http::{HttpOptions, UrlResolverHook};
use crate::importer::DEFAULT_SOURCE_SUFFIX;
use crate::registry::{HookRegistry, PathHook};

/// Configuration for a host embedding the importer, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImporterConfig {
    /// Source-file suffix without the dot (`py` -> `name.py`,
    /// `name/__init__.py`).
    pub source_suffix: String,
    /// Search-path entries: directories and/or base URLs.
    pub roots: Vec<String>,
    /// Register the URL hook at the front of the registry.
    pub priority: bool,
    /// Transport settings for URL roots.
    pub http: HttpOptions,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
            roots: Vec::new(),
            priority: false,
            http: HttpOptions::default(),
        }
    }
}

impl ImporterConfig {
    pub fn from_toml_str(data: &str) -> Result<Self> {
        toml::from_str(data).context("parse importer config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("read importer config: {}", path.display()))?;
        Self::from_toml_str(&data)
    }

    /// The filesystem hook this configuration describes.
    pub fn path_hook(&self) -> Arc<dyn PathHook> {
        Arc::new(PathResolverHook::new(&self.source_suffix))
    }

    /// The URL hook this configuration describes.
    pub fn url_hook(&self) -> Arc<dyn PathHook> {
        Arc::new(UrlResolverHook::new(&self.source_suffix, self.http.clone()))
    }

    /// Registers both hooks (URL hook honoring `priority`) and returns the
    /// configured search roots.
    pub fn install(&self, registry: &mut HookRegistry) -> Vec<RootLocation> {
        registry.register(self.path_hook(), false);
        registry.register(self.url_hook(), self.priority);
        self.roots.iter().map(RootLocation::from).collect()
    }
}
