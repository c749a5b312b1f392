//! HTTP client for the balldontlie API, including the page-following fetch loop.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::{
    bdl::types::{Game, Page, Player, Team},
    cli::types::Season,
    Result, StatsError,
};


/// Base path for the balldontlie v1 API.
pub const BDL_BASE_URL: &str = "https://www.balldontlie.io/api/v1/";

/// Collection resources exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Teams,
    Players,
    Games,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Teams => "teams",
            Endpoint::Players => "players",
            Endpoint::Games => "games",
        }
    }
}

/// Connection settings for [`BdlClient`].
///
/// No timeout is applied unless one is configured, so a stalled server
/// blocks the request indefinitely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BDL_BASE_URL.to_string(),
            user_agent: format!("bdl-stats/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Thin wrapper over a `reqwest::Client` bound to one API base URL.
#[derive(Debug, Clone)]
pub struct BdlClient {
    http: Client,
    base_url: String,
}

impl BdlClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let mut base_url = config.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a collection resource.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Fetch a single page. `page == None` requests the first page without
    /// sending a `page` parameter.
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &[(&str, String)],
        page: Option<u32>,
    ) -> Result<Page<T>> {
        let mut params: Vec<(&str, String)> = query.to_vec();
        if let Some(page) = page {
            params.push(("page", page.to_string()));
        }

        let url = self.endpoint_url(endpoint);
        debug!(%url, ?params, "requesting page");

        let body = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch every page of a collection, following `meta.next_page` until it
    /// is absent, `null` or `"null"`.
    ///
    /// Any failure aborts the whole fetch; records from earlier pages are
    /// dropped rather than returned.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        self.fetch_all_with_progress(endpoint, query, |_, _| {})
            .await
    }

    /// Same as [`fetch_all`](Self::fetch_all), calling `on_page(page_number, records_on_page)`
    /// after each page arrives.
    ///
    /// Page numbers must strictly increase; a token pointing at the current
    /// or an earlier page fails with [`StatsError::InvalidPageToken`].
    pub async fn fetch_all_with_progress<T, F>(
        &self,
        endpoint: Endpoint,
        query: &[(&str, String)],
        mut on_page: F,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        F: FnMut(u32, usize),
    {
        let mut records = Vec::new();
        let mut page_number = 1;
        let mut page: Page<T> = self.fetch_page(endpoint, query, None).await?;

        loop {
            let count = page.data.len();
            records.extend(page.data);
            on_page(page_number, count);

            match page.meta.next_page_number()? {
                Some(next) if next <= page_number => {
                    return Err(StatsError::InvalidPageToken {
                        value: format!("{next} (after page {page_number})"),
                    });
                }
                Some(next) => {
                    page_number = next;
                    page = self.fetch_page(endpoint, query, Some(next)).await?;
                }
                None => break,
            }
        }

        info!(
            endpoint = endpoint.path(),
            last_page = page_number,
            records = records.len(),
            "fetched collection"
        );
        Ok(records)
    }

    pub async fn teams(&self) -> Result<Vec<Team>> {
        self.fetch_all(Endpoint::Teams, &[]).await
    }

    /// Players whose name matches `search` (server-side search).
    pub async fn players(&self, search: &str) -> Result<Vec<Player>> {
        self.fetch_all(Endpoint::Players, &[("search", search.to_string())])
            .await
    }

    pub async fn games<F>(&self, season: &Season, on_page: F) -> Result<Vec<Game>>
    where
        F: FnMut(u32, usize),
    {
        self.fetch_all_with_progress(
            Endpoint::Games,
            &[("seasons[]", season.to_string())],
            on_page,
        )
        .await
    }
}
