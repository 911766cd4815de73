use std::fmt;

use serde::Deserialize;

use crate::error::{Result, WebCountError};

/// Printed in place of a count when the request never completed.
pub const FAILURE_SENTINEL: i64 = -1;

/// One URL to fetch and the literal term to look for in its body. The term is
/// raw bytes: it is matched against the body byte for byte and need not be
/// UTF-8.
///
/// Deserializes from the two-element array `["<url>","<term>"]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct FetchRequest {
    pub url: String,
    pub search_term: Vec<u8>,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>, search_term: impl Into<Vec<u8>>) -> Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(WebCountError::ValidationError(
                "URL must not be empty".to_string(),
            ));
        }
        Ok(Self {
            url,
            search_term: search_term.into(),
        })
    }

    /// Decodes the JSON argument form `["<url>","<term>"]`.
    pub fn from_json_arg(arg: &str) -> Result<Self> {
        let request: FetchRequest = serde_json::from_str(arg.trim())?;
        Self::new(request.url, request.search_term)
    }
}

impl From<(String, String)> for FetchRequest {
    fn from((url, search_term): (String, String)) -> Self {
        Self {
            url,
            search_term: search_term.into_bytes(),
        }
    }
}

/// Outcome of a single fetch-and-count. Any completed HTTP exchange is a
/// `Success`, whatever its status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchResult {
    Success(usize),
    Failure,
}

impl FetchResult {
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::Success(count) => Some(*count),
            Self::Failure => None,
        }
    }
}

impl<E> From<std::result::Result<usize, E>> for FetchResult {
    fn from(result: std::result::Result<usize, E>) -> Self {
        match result {
            Ok(count) => Self::Success(count),
            Err(_) => Self::Failure,
        }
    }
}

// The sentinel only ever exists in the rendered form.
impl fmt::Display for FetchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(count) => write!(f, "{count}"),
            Self::Failure => write!(f, "{FAILURE_SENTINEL}"),
        }
    }
}
