use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::redirect::Policy;
use tracing::{debug, warn};
use webcount_common::config::Config;
use webcount_common::error::{Result, WebCountError};
use webcount_common::model::{FetchRequest, FetchResult};
use webcount_core::count_occurrences;

use crate::validation::validate_url;

/// Builds the one client a driver holds for its whole run.
pub fn build_http_client(config: &Config) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        // Redirects are always followed, so the limit never drops below one hop.
        .redirect(Policy::limited(config.max_redirects.max(1)))
        .build()
        .map_err(|e| WebCountError::HttpError(format!("Failed to build HTTP client: {e}")))
}

/// Performs one GET and returns the whole body.
///
/// The status code is not inspected: a 404 page is still a body.
pub fn fetch_body(client: &Client, url: &str) -> Result<Vec<u8>> {
    let url = validate_url(url)?;
    debug!("Fetching {}", url);

    let response = client
        .get(url.clone())
        .send()
        .inspect_err(|e| debug!("HTTP request failed for {url}: {e}"))?;
    let status = response.status();
    debug!("Received HTTP status: {} for {}", status, response.url());

    let body = response
        .bytes()
        .inspect_err(|e| debug!("Failed to read response body from {url}: {e}"))?;
    debug!("Read {} bytes from {}", body.len(), url);
    Ok(body.to_vec())
}

/// Fetches `request.url` and counts `request.search_term` in the body. Any
/// transport failure becomes [`FetchResult::Failure`].
pub fn fetch_and_count(client: &Client, request: &FetchRequest) -> FetchResult {
    let outcome = fetch_body(client, &request.url)
        .map(|body| count_occurrences(&body, &request.search_term))
        .inspect_err(|e| warn!("Request for {} did not complete: {}", request.url, e));
    let result = FetchResult::from(outcome);
    if let Some(count) = result.count() {
        debug!(
            "Found {} occurrence(s) of {:?} at {}",
            count,
            String::from_utf8_lossy(&request.search_term),
            request.url
        );
    }
    result
}
