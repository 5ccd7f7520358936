//! HTTP client for the Senate Lobbying Disclosure API.

use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use url::Url;

use crate::{
    query::{ClientQuery, FilingQuery, LobbyistQuery, Query},
    types::{Filing, Page},
    Error,
};

/// Site root for the production API. List endpoints live under `/api/v1`,
/// printable filing documents under `/filings/public/filing/`.
const BASE_SITE_URL: &str = "https://lda.senate.gov";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_PAUSE: Duration = Duration::from_millis(250);

/// Authenticated client for the LDA API.
///
/// Every request carries an `Authorization: Token <token>` header. Each
/// request builds a fresh `reqwest::Client` with the configured timeout.
/// Pagination is strictly sequential; page N+1's URL is only known once
/// page N has been parsed.
#[derive(Debug)]
pub struct Client {
    base_site_url: String,
    auth: HeaderValue,
    timeout: Duration,
    pause: Duration,
}

impl Client {
    /// Creates a new client pointing at the production Senate API.
    ///
    /// Fails with [`Error::Authentication`] when the token is empty; no HTTP
    /// request is ever issued without one.
    pub fn new(token: &str) -> Result<Self, Error> {
        Self::with_base_url(token, BASE_SITE_URL)
    }

    /// Creates a new client with a custom site root. Used for testing with wiremock.
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self, Error> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::Authentication("API token is required".to_string()));
        }
        let mut auth = HeaderValue::from_str(&format!("Token {}", token))
            .map_err(|_| Error::Authentication("token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);
        Ok(Self {
            base_site_url: base_url.trim_end_matches('/').to_string(),
            auth,
            timeout: DEFAULT_TIMEOUT,
            pause: DEFAULT_PAUSE,
        })
    }

    /// Sets the per-request timeout. Defaults to 60 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the pause between paginated requests. Defaults to 250ms.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    fn api_url(&self, path: &str, query: &dyn Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}/api/v1{}", &self.base_site_url, path).as_str())
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::Validation(format!("invalid base URL: {}", e))
            })?;
        Ok(query.add_to_url(&url))
    }

    async fn get_raw(&self, url: Url) -> Result<String, Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        let resp = client
            .get(url)
            .header(AUTHORIZATION, self.auth.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach the API: {}", e);
                Error::Transport(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if status.as_u16() == 401 || status.as_u16() == 403 {
            let snippet = truncate_body(&body);
            tracing::error!("API rejected the token with status {}", status);
            return Err(Error::Authentication(format!(
                "status {}: {}",
                status.as_u16(),
                snippet
            )));
        }
        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::Upstream {
                status: status.as_u16(),
                body: snippet,
            });
        }
        Ok(body)
    }

    async fn get_page(&self, url: Url) -> Result<Page, Error> {
        let body = self.get_raw(url).await?;
        serde_json::from_str::<Page>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse page: {} | body: {}", e, snippet);
            Error::MalformedResponse(format!("{} | body: {}", e, snippet))
        })
    }

    /// Searches client records by reported client name. One page.
    pub async fn search_clients(&self, query: &ClientQuery) -> Result<Page, Error> {
        let url = self.api_url("/clients/", query)?;
        self.get_page(url).await
    }

    /// Searches lobbyist records by lobbyist name. One page.
    pub async fn search_lobbyists(&self, query: &LobbyistQuery) -> Result<Page, Error> {
        let url = self.api_url("/lobbyists/", query)?;
        self.get_page(url).await
    }

    /// Fetches a single page of filings matching the given query.
    ///
    /// The API requires at least one filter when requesting `page > 1`; that
    /// rule is enforced here before any request goes out.
    pub async fn list_filings(&self, query: &FilingQuery) -> Result<Page, Error> {
        if query.common.page > 1 && !query.has_filter() {
            return Err(Error::Validation(
                "the API requires at least one filter when requesting page > 1".to_string(),
            ));
        }
        let url = self.api_url("/filings/", query)?;
        self.get_page(url).await
    }

    /// Fetches every page of filings for the given query and returns the
    /// concatenated records.
    ///
    /// The first request carries the query parameters; subsequent requests GET
    /// the exact `next` URL from the previous page, pausing for the configured
    /// duration in between. `max_pages` caps the number of pages fetched. Any
    /// mid-stream failure discards the partial accumulation.
    pub async fn list_all_filings(
        &self,
        query: &FilingQuery,
        max_pages: Option<u64>,
    ) -> Result<Vec<Filing>, Error> {
        if !query.has_filter() {
            return Err(Error::Validation(
                "at least one client or lobbyist filter is required".to_string(),
            ));
        }

        let mut results = Vec::new();
        if max_pages == Some(0) {
            return Ok(results);
        }
        let mut url = self.api_url("/filings/", query)?;
        let mut pages_fetched: u64 = 0;

        loop {
            let page = self.get_page(url).await?;
            results.extend(page.results);
            pages_fetched += 1;
            tracing::debug!(
                "Fetched page {} ({} records so far)",
                pages_fetched,
                results.len()
            );

            let next = match page.next {
                Some(next) if max_pages.map_or(true, |max| pages_fetched < max) => next,
                _ => break,
            };
            url = Url::parse(&next).map_err(|e| {
                tracing::error!("Invalid next link in page {}: {}", pages_fetched, e);
                Error::MalformedResponse(format!("invalid next link: {}", e))
            })?;
            if !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }
        }

        Ok(results)
    }

    /// Downloads the printable disclosure document for a filing UUID and
    /// returns the raw bytes. The API serves HTML.
    pub async fn fetch_filing_document(&self, filing_uuid: &str) -> Result<Vec<u8>, Error> {
        let url = Url::parse(
            format!(
                "{}/filings/public/filing/{}/print/",
                &self.base_site_url, filing_uuid
            )
            .as_str(),
        )
        .map_err(|e| Error::Validation(format!("invalid filing UUID: {}", e)))?;
        let body = self.get_raw(url).await?;
        Ok(body.into_bytes())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        // Walk back to a char boundary so multibyte bodies cannot panic.
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_body;

    #[test]
    fn test_truncate_body_short_passes_through() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn test_truncate_body_long_ascii() {
        let body = "a".repeat(3000);
        let out = truncate_body(&body);
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
        assert!(out.ends_with("...[truncated]"));
    }

    #[test]
    fn test_truncate_body_multibyte_straddling_limit() {
        let body = format!("{}{}", "a".repeat(1999), "ééééé");
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() < body.len());
    }
}
