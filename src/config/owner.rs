//! `[owner]` section configuration.
//!
//! The site owner's display name plus an open map of social handles. Handles
//! are not a fixed schema: any key other than `name` is kept as a
//! platform/handle pair, so adding a network is a config change, not a code
//! change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `[owner]` section in site.toml - owner identity and social handles.
///
/// # Example
/// ```toml
/// [owner]
/// name = "Alice Example"
/// twitter = "@alice"
/// github = "alice-example"
/// ```
// `deny_unknown_fields` cannot be combined with the flattened handle map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Owner {
    /// Owner display name for bylines and meta tags.
    #[serde(default)]
    pub name: String,

    /// Social handles captured from the remaining keys, keyed by platform.
    #[serde(flatten)]
    pub handles: BTreeMap<String, String>,
}

impl Owner {
    /// Get the handle for a platform (e.g. `"twitter"`), if configured.
    pub fn handle(&self, platform: &str) -> Option<&str> {
        self.handles.get(platform).map(String::as_str)
    }
}
