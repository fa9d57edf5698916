//! `[services]` section configuration.
//!
//! Third-party service keys and versions. The section is an open map: each
//! entry is either a bare string (an API key, a tracking ID, a pinned
//! version) or a table of named keys for services that need more than one
//! credential.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single `[services]` entry - a bare credential string or a table of
/// named keys.
///
/// # Example
/// ```toml
/// [services]
/// analytics = "UA-12345678-1"
/// comments = "tidy-blog"
///
/// [services.media]
/// cloud_name = "tidy-blog"
/// api_key = "365895137117119"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceValue {
    /// Single credential or version string.
    Key(String),

    /// Named credentials for services that need several.
    Keys(BTreeMap<String, String>),
}

impl ServiceValue {
    /// The bare credential string, if this entry is the single-key form.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Keys(_) => None,
        }
    }

    /// Look up one named credential of the table form.
    pub fn key(&self, name: &str) -> Option<&str> {
        match self {
            Self::Key(_) => None,
            Self::Keys(keys) => keys.get(name).map(String::as_str),
        }
    }
}
