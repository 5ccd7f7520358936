use url::Url;

use super::common::{Query, QueryCommon};

/// Filters for the `/filings/` endpoint. At least one of the client or
/// lobbyist identifiers must be set before fetching all pages; fields left as
/// `None` are omitted from the query string entirely.
#[derive(Default)]
pub struct FilingQuery {
    pub common: QueryCommon,
    pub client_id: Option<i64>,
    pub client_name: Option<String>,
    pub lobbyist_id: Option<i64>,
    pub lobbyist_name: Option<String>,
    pub filing_year: Option<i64>,
}

impl Query for FilingQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(client_id) = self.client_id {
            url.query_pairs_mut()
                .append_pair("client_id", &client_id.to_string());
        }
        if let Some(client_name) = &self.client_name {
            url.query_pairs_mut()
                .append_pair("client_name", client_name.as_str());
        }
        if let Some(lobbyist_id) = self.lobbyist_id {
            url.query_pairs_mut()
                .append_pair("lobbyist_id", &lobbyist_id.to_string());
        }
        if let Some(lobbyist_name) = &self.lobbyist_name {
            url.query_pairs_mut()
                .append_pair("lobbyist_name", lobbyist_name.as_str());
        }
        if let Some(filing_year) = self.filing_year {
            url.query_pairs_mut()
                .append_pair("filing_year", &filing_year.to_string());
        }
        url
    }
}

impl FilingQuery {
    pub fn with_client_id(mut self, client_id: i64) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub fn with_client_name(mut self, client_name: &str) -> Self {
        self.client_name = Some(client_name.to_string());
        self
    }

    pub fn with_lobbyist_id(mut self, lobbyist_id: i64) -> Self {
        self.lobbyist_id = Some(lobbyist_id);
        self
    }

    pub fn with_lobbyist_name(mut self, lobbyist_name: &str) -> Self {
        self.lobbyist_name = Some(lobbyist_name.to_string());
        self
    }

    pub fn with_filing_year(mut self, filing_year: i64) -> Self {
        self.filing_year = Some(filing_year);
        self
    }

    /// True when at least one client or lobbyist identifier is set. The API
    /// refuses unbounded pagination over the whole filings corpus.
    pub fn has_filter(&self) -> bool {
        self.client_id.is_some()
            || self.client_name.is_some()
            || self.lobbyist_id.is_some()
            || self.lobbyist_name.is_some()
    }
}
