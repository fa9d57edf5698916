//! Configuration-driven content resolution for blog-style static sites.
//!
//! Loads a `site.toml` describing site metadata, third-party services and
//! content collections, and provides the page helpers collections refer to
//! by name. Rendering, templating and serving belong to the consuming
//! engine; this crate answers what the configuration says.
//!
//! ```no_run
//! use siteconf::{Page, SiteConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SiteConfig::load(".")?;
//! let posts = config.collection("posts")?;
//!
//! let page = Page {
//!     filename: Some("my-first-post".into()),
//!     date: Some(1704461606),
//!     tags: Some(vec!["rust".into()]),
//!     ..Page::default()
//! };
//!
//! println!("{}", posts.path_for(&page)?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod helpers;
pub mod page;

pub use config::{
    CONFIG_FILE, CollectionConfig, ConfigError, Owner, PathTemplate, ServiceValue, SiteConfig,
    SiteInfo, SortField, SortKey,
};
pub use helpers::{
    DEFAULT_DATE_FORMAT, Helper, HelperValue, has_tag, name, pretty_date, pretty_date_default,
};
pub use page::{Page, PageError};
