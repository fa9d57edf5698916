//! Page helper functions attached to collections by name.
//!
//! A collection lists its helpers in site.toml:
//!
//! ```toml
//! [collections.posts]
//! path = "posts/{filename}"
//! layout = "_layouts.post"
//! helpers = ["has_tag", "pretty_date"]
//! ```
//!
//! Each helper is a pure function of the page it is applied to, plus an
//! optional argument. Unknown helper names are rejected when the
//! configuration is parsed, not when a page is rendered.

mod date;

pub use date::{DEFAULT_DATE_FORMAT, pretty_date, pretty_date_default};

use crate::page::{Page, PageError};
use serde::{Deserialize, Serialize};

/// Check whether `tag` is one of the page's tags.
///
/// Matching is exact, with no case folding. An empty tag list gives `false`.
pub fn has_tag(page: &Page, tag: &str) -> Result<bool, PageError> {
    let tags = page.tags.as_ref().ok_or(PageError::MissingField("tags"))?;

    Ok(tags.iter().any(|t| t == tag))
}

/// The page's filename stem, unmodified.
pub fn name(page: &Page) -> Result<&str, PageError> {
    page.filename
        .as_deref()
        .ok_or(PageError::MissingField("filename"))
}

/// Value produced by applying a helper to a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HelperValue {
    Bool(bool),
    Text(String),
}

impl HelperValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Bool(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// A page helper, resolvable by its configuration name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Helper {
    /// Tag membership test; takes the tag as argument.
    HasTag,
    /// Date formatting; optional pattern argument.
    PrettyDate,
    /// Filename-derived page name.
    Name,
}

impl Helper {
    /// Helper name as written in configuration.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HasTag => "has_tag",
            Self::PrettyDate => "pretty_date",
            Self::Name => "name",
        }
    }

    /// Apply the helper to a page.
    ///
    /// `arg` carries the tag for [`Helper::HasTag`], which requires it, and
    /// the date pattern for [`Helper::PrettyDate`], which falls back to
    /// [`DEFAULT_DATE_FORMAT`]. [`Helper::Name`] ignores it.
    pub fn apply(&self, page: &Page, arg: Option<&str>) -> Result<HelperValue, PageError> {
        match self {
            Self::HasTag => {
                let tag = arg.ok_or(PageError::MissingArgument("tag"))?;
                has_tag(page, tag).map(HelperValue::Bool)
            }
            Self::PrettyDate => {
                pretty_date(page, arg.unwrap_or(DEFAULT_DATE_FORMAT)).map(HelperValue::Text)
            }
            Self::Name => name(page).map(|n| HelperValue::Text(n.to_string())),
        }
    }
}
