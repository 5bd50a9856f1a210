//! Startup configuration for the Records API client.

use url::Url;

use crate::Error;

/// Environment variable holding the Records API base URL.
const ENV_BASE_URL: &str = "RECORDS_API_URL";
/// Environment variable holding the Records API key.
const ENV_API_KEY: &str = "RECORDS_API_KEY";

/// Base URL and API key for the Records API, resolved once at startup.
///
/// Build this at process startup and hand it to [`Client::new`]; a missing
/// key or an unparseable URL fails here rather than on the first fetch.
///
/// [`Client::new`]: crate::Client::new
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) base_url: Url,
    pub(crate) api_key: String,
}

impl Config {
    /// Validates and stores the base URL and API key.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        if api_key.is_empty() {
            return Err(Error::Config("API key is empty".to_string()));
        }
        tracing::debug!(base_url = %base_url, "records API key configured");
        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// Reads the base URL and key from `RECORDS_API_URL` and
    /// `RECORDS_API_KEY`.
    pub fn from_env() -> Result<Self, Error> {
        let base_url = std::env::var(ENV_BASE_URL)
            .map_err(|_| Error::Config(format!("{ENV_BASE_URL} is not set")))?;
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| Error::Config(format!("{ENV_API_KEY} is not set")))?;
        Self::new(&base_url, &api_key)
    }

    /// Rewrites an `http` base URL to `https`.
    ///
    /// Apply once at startup when the hosting page is served over an
    /// encrypted transport: browsers block plaintext requests from such a
    /// context (mixed content), so the scheme has to be upgraded before the
    /// first fetch. Base URLs that are already `https` pass through
    /// untouched.
    pub fn upgrade_insecure_base(mut self) -> Self {
        if self.base_url.scheme() == "http" {
            // set_scheme cannot fail for http -> https
            let _ = self.base_url.set_scheme("https");
            tracing::debug!(base_url = %self.base_url, "upgraded plaintext base URL");
        }
        self
    }
}
