//! Site configuration management for `site.toml`.
//!
//! # Sections
//!
//! | Section           | Purpose                                      |
//! |-------------------|----------------------------------------------|
//! | (root)            | Production flag, absolute base URL           |
//! | `[site]`          | Site metadata (title, description, image)    |
//! | `[owner]`         | Owner name and social handles                |
//! | `[services]`      | Third-party service keys and versions        |
//! | `[collections.*]` | Content types (path, layout, sort, helpers)  |
//!
//! # Example
//!
//! ```toml
//! production = false
//! base_url = "https://example.com"
//!
//! [site]
//! title = "Tidy Blog"
//! description = "Notes on keeping things small"
//!
//! [owner]
//! name = "Alice Example"
//! twitter = "@alice"
//!
//! [services]
//! analytics = "UA-12345678-1"
//!
//! [collections.posts]
//! path = "posts/{filename}"
//! sort = "-date"
//! layout = "_layouts.post"
//! section = "post_content"
//! is_post = true
//! comments = true
//! helpers = ["has_tag", "pretty_date"]
//!
//! [collections.tags]
//! path = "tags/{filename}"
//! layout = "_layouts.tag"
//! helpers = ["name"]
//! ```

mod collections;
pub mod defaults;
mod error;
mod owner;
mod services;
mod site;

// Re-export public types used by other modules
pub use collections::{CollectionConfig, PathTemplate, SortField, SortKey};
pub use error::ConfigError;
pub use owner::Owner;
pub use services::ServiceValue;
pub use site::SiteInfo;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};

/// Conventional configuration file name, resolved relative to the site root.
pub const CONFIG_FILE: &str = "site.toml";

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing site.toml
///
/// Loaded once at startup and immutable afterwards; every constructor
/// validates, so a loaded config always satisfies the documented invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Whether the site is being built for production.
    #[serde(default = "defaults::r#false")]
    pub production: bool,

    /// Absolute base URL of the deployed site (http:// or https://).
    pub base_url: String,

    /// Site metadata
    #[serde(default)]
    pub site: SiteInfo,

    /// Owner identity and social handles
    #[serde(default)]
    pub owner: Owner,

    /// Third-party service keys and versions
    #[serde(default)]
    pub services: BTreeMap<String, ServiceValue>,

    /// Content collections, keyed by collection name
    #[serde(default)]
    pub collections: BTreeMap<String, CollectionConfig>,
}

impl SiteConfig {
    /// Parse and validate configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        debug!("loading configuration from {}", path.display());

        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load `site.toml` from the site root directory
    pub fn load(root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_path(&root.as_ref().join(CONFIG_FILE))
    }

    /// Look up a collection by name.
    ///
    /// A miss is an error, never a silent default: asking for a collection
    /// that is not configured means the caller and the config disagree.
    pub fn collection(&self, name: &str) -> Result<&CollectionConfig, ConfigError> {
        self.collections
            .get(name)
            .ok_or_else(|| ConfigError::UnknownCollection(name.to_string()))
    }

    /// Configured collection names, in sorted order.
    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    /// Look up a service entry by name.
    pub fn service(&self, name: &str) -> Option<&ServiceValue> {
        self.services.get(name)
    }

    /// Whether the site is being built for production.
    pub const fn is_production(&self) -> bool {
        self.production
    }

    /// Validate invariants that the schema alone cannot express
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "[base_url] must start with http:// or https://".into(),
            ));
        }

        for (name, collection) in &self.collections {
            collection.path.validate().map_err(|err| {
                ConfigError::Validation(format!("[collections.{name}.path]: {err}"))
            })?;

            if collection.layout.is_empty() {
                warn!("[collections.{name}] has an empty layout reference");
            }
        }

        if self.collections.is_empty() {
            warn!("configuration defines no collections");
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
