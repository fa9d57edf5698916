//! `[collections.*]` section configuration.
//!
//! Each collection describes one content type (posts, tag pages, ...):
//! where its pages land in the output tree, which layout renders them, how
//! they are ordered, and which helpers they expose to layouts.

use super::defaults;
use crate::helpers::{self, Helper};
use crate::page::{Page, PageError};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// ============================================================================
// Path Templates
// ============================================================================

/// Placeholder substituted with a page's filename at resolve time.
const FILENAME_TOKEN: &str = "{filename}";

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").unwrap());

/// Output path template for a collection, e.g. `"posts/{filename}"`.
///
/// A template contains exactly one `{filename}` placeholder and no other
/// placeholder tokens. The invariant is checked when the configuration is
/// loaded, so a resolved path never carries a leftover token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathTemplate(String);

impl PathTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check the placeholder invariant.
    pub fn validate(&self) -> Result<(), String> {
        let mut filenames = 0;
        for capture in PLACEHOLDER.captures_iter(&self.0) {
            match &capture[1] {
                "filename" => filenames += 1,
                unknown => return Err(format!("unknown placeholder `{{{unknown}}}`")),
            }
        }

        match filenames {
            1 => Ok(()),
            0 => Err(format!("missing the `{FILENAME_TOKEN}` placeholder")),
            n => Err(format!(
                "expected exactly one `{FILENAME_TOKEN}` placeholder, found {n}"
            )),
        }
    }

    /// Substitute the page filename into the template. The filename is
    /// inserted unmodified.
    pub fn resolve(&self, filename: &str) -> String {
        self.0.replace(FILENAME_TOKEN, filename)
    }
}

// ============================================================================
// Sort Keys
// ============================================================================

/// Page field a collection can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Publication timestamp.
    Date,
    /// Filename stem.
    Filename,
    /// Page title.
    Title,
}

impl SortField {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Filename => "filename",
            Self::Title => "title",
        }
    }
}

/// Sort order for a collection, written as `"field"` or `"-field"`.
///
/// A leading `-` sorts descending, so `"-date"` is newest-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub descending: bool,
}

impl SortKey {
    /// Compare two pages by this key.
    ///
    /// - Pages that have the field come before pages without it
    /// - Ties fall back to the filename, ascending
    pub fn compare(&self, a: &Page, b: &Page) -> Ordering {
        let by_field = match self.field {
            SortField::Date => compare_values(&a.date, &b.date, self.descending),
            SortField::Filename => compare_values(&a.filename, &b.filename, self.descending),
            SortField::Title => compare_values(&a.title, &b.title, self.descending),
        };

        by_field.then_with(|| compare_values(&a.filename, &b.filename, false))
    }

    /// Sort pages in place by this key. The sort is stable.
    pub fn sort(&self, pages: &mut [Page]) {
        pages.sort_by(|a, b| self.compare(a, b));
    }
}

/// - `Some` orders before `None`, regardless of direction
/// - `descending` reverses the comparison of present values only
fn compare_values<T: Ord>(a: &Option<T>, b: &Option<T>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => a.cmp(b).reverse(),
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, descending) = match s.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (s, false),
        };

        let field = match name {
            "date" => SortField::Date,
            "filename" => SortField::Filename,
            "title" => SortField::Title,
            other => {
                return Err(format!(
                    "unknown sort field `{other}`, expected one of `date`, `filename`, `title`"
                ));
            }
        };

        Ok(Self { field, descending })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            f.write_str("-")?;
        }
        f.write_str(self.field.as_str())
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ============================================================================
// Collections
// ============================================================================

/// `[collections.*]` section in site.toml - one content type.
///
/// # Example
/// ```toml
/// [collections.posts]
/// path = "posts/{filename}"
/// sort = "-date"
/// layout = "_layouts.post"
/// section = "post_content"
/// is_post = true
/// comments = true
/// helpers = ["has_tag", "pretty_date"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionConfig {
    /// Output path template; must contain exactly one `{filename}`.
    pub path: PathTemplate,

    /// Sort order for the collection's pages (e.g. `"-date"` = newest first).
    #[serde(default)]
    pub sort: Option<SortKey>,

    /// Layout reference the collection's pages render with.
    pub layout: String,

    /// Content section name the layout yields pages into; may be empty.
    #[serde(default)]
    pub section: String,

    /// Whether the collection's pages are posts (feed-worthy entries).
    #[serde(default = "defaults::r#false")]
    pub is_post: bool,

    /// Whether the collection's pages carry a comment thread.
    #[serde(default = "defaults::r#false")]
    pub comments: bool,

    /// Default tags applied to the collection's pages.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Helpers the collection exposes to layouts.
    #[serde(default)]
    pub helpers: Vec<Helper>,
}

impl CollectionConfig {
    /// Whether the collection exposes `helper` to its layouts.
    pub fn has_helper(&self, helper: Helper) -> bool {
        self.helpers.contains(&helper)
    }

    /// Output path for one page, derived from the page's filename.
    pub fn path_for(&self, page: &Page) -> Result<String, PageError> {
        Ok(self.path.resolve(helpers::name(page)?))
    }
}
