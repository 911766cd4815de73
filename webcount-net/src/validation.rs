use url::Url;
use webcount_common::error::{Result, WebCountError};

/// Validates a URL, ensuring it parses and uses an HTTP(S) scheme.
pub fn validate_url(url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str.trim()).map_err(|e| {
        WebCountError::ValidationError(format!("Failed to parse URL '{url_str}': {e}"))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(WebCountError::ValidationError(format!(
            "Invalid URL scheme for '{url_str}': Must be http or https, but got '{other}'"
        ))),
    }
}
