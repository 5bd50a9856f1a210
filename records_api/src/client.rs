//! HTTP client for the paginated Records API.

use std::time::Duration;

use chrono::Utc;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{IncomeQuery, OrderQuery, Query, SaleQuery, StockQuery},
    types::{Income, Order, Page, Sale, Stock},
    Config, Error,
};

/// Request timeout for Records API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the Records API.
///
/// Holds one `reqwest::Client` with a bounded timeout; every fetch is a
/// single GET with the configured key appended to the query string. Calls
/// are independent and idempotent, so one `Client` can serve concurrent
/// callers.
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl Client {
    /// Creates a client from a validated [`Config`].
    pub fn new(config: Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Self::new(Config::new(base_url, api_key)?)
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        // The base may or may not carry a trailing slash; either way the
        // endpoint path lands directly under it.
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(format!("{base}{path}").as_str())
            .map_err(|e| Error::Config(format!("invalid request URL for {path}: {e}")))
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<Page<T>, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        // Recomputed on every call; a cached "today" would silently skew
        // date-defaulted queries in long-lived processes.
        let today = Utc::now().date_naive();
        let mut url = query.add_to_url(&self.endpoint_url(path)?, today);
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("request to {} failed: {}", path, e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("failed to read response body from {}: {}", path, e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("{} returned status {}: {}", path, status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<Page<T>>(&body).map_err(|e| {
            tracing::error!(
                "failed to decode {} response: {} | body: {}",
                path,
                e,
                truncate_body(&body)
            );
            Error::Decode(e)
        })
    }

    /// Fetches a page of warehouse stock snapshots.
    pub async fn stocks(&self, query: &StockQuery) -> Result<Page<Stock>, Error> {
        self.get("/stocks", query).await
    }

    /// Fetches a page of receiving events.
    pub async fn incomes(&self, query: &IncomeQuery) -> Result<Page<Income>, Error> {
        self.get("/incomes", query).await
    }

    /// Fetches a page of completed sales.
    pub async fn sales(&self, query: &SaleQuery) -> Result<Page<Sale>, Error> {
        self.get("/sales", query).await
    }

    /// Fetches a page of placed orders.
    pub async fn orders(&self, query: &OrderQuery) -> Result<Page<Order>, Error> {
        self.get("/orders", query).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        // back the cut off to a char boundary; byte MAX can land inside a
        // multibyte character
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...[truncated]", &body[..cut])
    }
}
