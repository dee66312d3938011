// src/page/fetch.rs
// =============================================================================
// This module fetches pages over HTTP.
//
// Key functionality:
// - One preconfigured reqwest Client reused for every request (connection
//   pooling, shared timeout and redirect policy)
// - Follows redirects: the random-article page answers with one, so the
//   crawler would go nowhere without this
// - A per-request timeout so a stuck fetch cannot stall the crawl, which
//   visits pages strictly one at a time
// - Non-success statuses are reported as errors; the crawl loop treats
//   every fetch error as "skip this page and move on"
//
// Rust concepts:
// - async/await: Network I/O without blocking the thread
// - thiserror: Derive readable error types with From conversions
// - The ? operator: Propagate errors upward with one character
// =============================================================================

use std::time::Duration;

use reqwest::{redirect, Client};
use thiserror::Error;
use url::Url;

// Request timeout. Generous enough for a slow wiki, short enough that a
// dead server does not freeze the whole crawl.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// Redirect ceiling for a single request.
const MAX_REDIRECTS: usize = 10;

// Identifies the crawler to the server.
const USER_AGENT: &str = concat!("wiki-mapper/", env!("CARGO_PKG_VERSION"));

// Ways a fetch can fail. All of them are recoverable from the crawl loop's
// perspective: the page is skipped and exploration continues.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The composed address did not parse as a URL.
    #[error("invalid address: {0}")]
    Address(#[from] url::ParseError),

    /// The request itself failed (connection refused, TLS, timeout).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP status {0}")]
    Status(u16),
}

// Fetches pages with a shared, preconfigured HTTP client.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    // Builds the fetcher and its underlying client.
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    // Fetches a page and returns its body as text.
    //
    // Parameters:
    //   address: the full page address (base address + article name)
    //
    // Returns: the response body, or a FetchError describing what went wrong
    pub async fn fetch(&self, address: &str) -> Result<String, FetchError> {
        // Validate the address before dispatching it. Url::parse also
        // percent-encodes characters like 'é' that appear in article names.
        let url = Url::parse(address)?;

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wiki/Chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>chat</html>"))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new().unwrap();
        let body = fetcher
            .fetch(&format!("{}/wiki/Chat", server.uri()))
            .await
            .unwrap();

        assert_eq!(body, "<html>chat</html>");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wiki/Disparu"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new().unwrap();
        let err = fetcher
            .fetch(&format!("{}/wiki/Disparu", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Status(404)));
    }

    #[tokio::test]
    async fn test_invalid_address_is_an_error() {
        let fetcher = PageFetcher::new().unwrap();
        let err = fetcher.fetch("not an address").await.unwrap_err();

        assert!(matches!(err, FetchError::Address(_)));
    }

    #[tokio::test]
    async fn test_redirects_are_followed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wiki/Ancien"))
            .respond_with(
                ResponseTemplate::new(302)
                    .insert_header("location", format!("{}/wiki/Nouveau", server.uri()).as_str()),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/wiki/Nouveau"))
            .respond_with(ResponseTemplate::new(200).set_body_string("arrived"))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new().unwrap();
        let body = fetcher
            .fetch(&format!("{}/wiki/Ancien", server.uri()))
            .await
            .unwrap();

        assert_eq!(body, "arrived");
    }
}
