//! Page records supplied by the rendering engine.
//!
//! A [`Page`] is owned and constructed by the consuming engine, not by this
//! crate. Every field is optional so that "missing" is representable: the
//! helpers in [`crate::helpers`] report a missing field as a typed error
//! instead of guessing a default.

use serde::Serialize;
use thiserror::Error;

/// Page-related errors raised by the helper functions.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Page is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Helper is missing required argument `{0}`")]
    MissingArgument(&'static str),

    #[error("Page date `{0}` is outside the representable range")]
    InvalidDate(i64),
}

/// A single content page, as handed to the helpers by the rendering engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    /// Filename stem the page was derived from (e.g. "my-first-post").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Page title (from metadata)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Publication date as a Unix timestamp, seconds UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,

    /// Tags associated with this page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
