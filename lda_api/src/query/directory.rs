//! Queries for the `/clients/` and `/lobbyists/` directory endpoints.

use url::Url;

use super::common::{Query, QueryCommon};

/// Name search against the `/clients/` endpoint.
#[derive(Default)]
pub struct ClientQuery {
    pub common: QueryCommon,
    pub name: Option<String>,
}

impl Query for ClientQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(name) = &self.name {
            url.query_pairs_mut()
                .append_pair("client_name", name.as_str());
        }
        url
    }
}

impl ClientQuery {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

/// Name search against the `/lobbyists/` endpoint.
#[derive(Default)]
pub struct LobbyistQuery {
    pub common: QueryCommon,
    pub name: Option<String>,
}

impl Query for LobbyistQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(name) = &self.name {
            url.query_pairs_mut()
                .append_pair("lobbyist_name", name.as_str());
        }
        url
    }
}

impl LobbyistQuery {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{ClientQuery, LobbyistQuery, Query};

    #[test]
    fn test_client_query() {
        let base = Url::parse("https://lda.senate.gov/api/v1/clients/").unwrap();
        let url = ClientQuery::default()
            .with_name("Acme Corp")
            .with_page(2)
            .with_page_size(10)
            .add_to_url(&base);
        assert_eq!(
            url.to_string(),
            "https://lda.senate.gov/api/v1/clients/?page=2&page_size=10&client_name=Acme+Corp"
        );
    }

    #[test]
    fn test_lobbyist_query() {
        let base = Url::parse("https://lda.senate.gov/api/v1/lobbyists/").unwrap();
        let url = LobbyistQuery::default()
            .with_name("Jane Doe")
            .add_to_url(&base);
        assert_eq!(
            url.to_string(),
            "https://lda.senate.gov/api/v1/lobbyists/?page=1&lobbyist_name=Jane+Doe"
        );
    }
}
