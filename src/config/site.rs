//! `[site]` section configuration.
//!
//! Contains the site metadata exposed to layouts: title, description and
//! the default share image.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in site.toml - site metadata.
///
/// # Example
/// ```toml
/// [site]
/// title = "Tidy Blog"
/// description = "Notes on keeping things small"
/// image = "share-card.png"
/// ```
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteInfo {
    /// Site title displayed in browser tab and headers.
    pub title: String,

    /// Site description for SEO meta tags.
    pub description: String,

    /// Share image path for social meta tags, relative to the asset root.
    #[serde(default = "defaults::site::image")]
    #[educe(Default = defaults::site::image())]
    pub image: String,
}
