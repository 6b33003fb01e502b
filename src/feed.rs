// Source feed access
// Handles ICS URL validation and fetching

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = "examfeed/0.1";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Validates an ICS URL for security and format correctness
pub fn validate_feed_url_format(ics_url: &str) -> Result<()> {
    if ics_url.trim().is_empty() {
        return Err(anyhow!(
            "ICS URL cannot be empty. Please provide a valid calendar feed URL."
        ));
    }

    let parsed_url = Url::parse(ics_url).map_err(|e| {
        anyhow!(
            "Invalid ICS URL format: {}. Please ensure the URL is properly formatted (e.g., https://calendar.example.com/path/calendar.ics)",
            e
        )
    })?;

    // Enforce HTTPS for security
    if parsed_url.scheme() != "https" {
        return Err(anyhow!(
            "ICS URL must use HTTPS protocol for security. HTTP is not allowed. \
             Your URL starts with '{}://'. Please use an HTTPS URL instead.",
            parsed_url.scheme()
        ));
    }

    let domain = parsed_url.host_str().ok_or_else(|| {
        anyhow!(
            "ICS URL must have a valid domain name. The provided URL '{}' does not contain a valid host.",
            ics_url
        )
    })?;

    if domain.is_empty() {
        return Err(anyhow!("ICS URL domain cannot be empty."));
    }

    // Reject localhost and local network addresses
    if domain == "localhost"
        || domain.starts_with("127.")
        || domain.starts_with("192.168.")
        || domain.starts_with("10.")
        || domain.starts_with("172.16.")
    {
        return Err(anyhow!(
            "ICS URL cannot point to localhost or local network addresses. \
             Please use a publicly accessible calendar URL."
        ));
    }

    let path = parsed_url.path();
    if path.is_empty() || path == "/" {
        log::warn!(
            "ICS URL has no path component. This may not be a valid calendar feed URL: {}",
            ics_url
        );
    }

    if !path.to_lowercase().ends_with(".ics") && !path.contains("/calendar") {
        log::warn!(
            "ICS URL path does not appear to be a calendar feed (expected .ics extension or /calendar path): {}",
            ics_url
        );
    }

    Ok(())
}

/// Fetch ICS data from URL
///
/// One GET per run; a failed fetch aborts the run rather than emitting a
/// partial calendar, so there is no retry here.
pub async fn fetch_ics_data(ics_url: &str) -> Result<String> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| anyhow!("Failed to build client: {}", e))?;

    let response = client
        .get(ics_url)
        .send()
        .await
        .map_err(|e| anyhow!("Request failed: {}", e))?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());
        return Err(anyhow!("HTTP {}: {}", status, text));
    }

    let content = response
        .text()
        .await
        .map_err(|e| anyhow!("Failed to read response body: {}", e))?;

    // Basic validation to catch HTML responses
    if content.trim().starts_with("<!DOCTYPE") || content.trim().starts_with("<html") {
        return Err(anyhow!(
            "Invalid ICS URL: The server returned HTML instead of a calendar file. \
             Please ensure you are using the calendar's ICS export address, not the web browser URL."
        ));
    }

    if !content.contains("BEGIN:VCALENDAR") {
        log::warn!("Content does not contain BEGIN:VCALENDAR.");
    }

    Ok(content)
}
