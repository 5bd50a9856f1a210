//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] fields.

use chrono::NaiveDate;
use url::Url;

/// Wire format for calendar dates.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trait implemented by all per-kind query builders. Provides URL
/// serialization and shared builder methods for the date range, pagination,
/// and search.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the
    /// modified URL. `today` backs the per-kind date defaults; the client
    /// recomputes it on every call so a long-lived query never pins a stale
    /// date.
    fn add_to_url(&self, url: &Url, today: NaiveDate) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the start of the date range (`dateFrom`).
    fn with_date_from(mut self, date_from: NaiveDate) -> Self
    where
        Self: Sized,
    {
        self.get_common().date_from = Some(date_from);
        self
    }

    /// Sets the end of the date range (`dateTo`).
    fn with_date_to(mut self, date_to: NaiveDate) -> Self
    where
        Self: Sized,
    {
        self.get_common().date_to = Some(date_to);
        self
    }

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }

    /// Sets the number of results per page.
    fn with_limit(mut self, limit: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit);
        self
    }

    /// Sets a free-text search filter.
    fn with_search(mut self, search: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().search = Some(search.to_string());
        self
    }
}

/// Fields shared by all query kinds. Everything is optional; the per-kind
/// date-default policy lives in each kind's `add_to_url`.
#[derive(Clone, Default)]
pub struct QueryCommon {
    /// Start of the date range. Defaults to "today" when unset.
    pub date_from: Option<NaiveDate>,
    /// End of the date range. Whether an unset value is omitted or defaulted
    /// depends on the record kind.
    pub date_to: Option<NaiveDate>,
    /// Page number (1-indexed). `None` uses the API default.
    pub page: Option<i64>,
    /// Results per page. `None` uses the API default.
    pub limit: Option<i64>,
    /// Free-text search filter.
    pub search: Option<String>,
}

impl QueryCommon {
    /// Appends `dateFrom`, falling back to `today` when the caller set none.
    pub(crate) fn add_date_from(&self, url: &mut Url, today: NaiveDate) {
        let date_from = self.date_from.unwrap_or(today);
        url.query_pairs_mut()
            .append_pair("dateFrom", &date_from.format(DATE_FORMAT).to_string());
    }

    /// Appends `dateTo` only when the caller supplied one.
    pub(crate) fn add_date_to_if_set(&self, url: &mut Url) {
        if let Some(date_to) = self.date_to {
            url.query_pairs_mut()
                .append_pair("dateTo", &date_to.format(DATE_FORMAT).to_string());
        }
    }

    /// Appends `dateTo`, falling back to `today` when the caller set none.
    /// Used by the one kind whose server requires a closed date range.
    pub(crate) fn add_date_to_or_today(&self, url: &mut Url, today: NaiveDate) {
        let date_to = self.date_to.unwrap_or(today);
        url.query_pairs_mut()
            .append_pair("dateTo", &date_to.format(DATE_FORMAT).to_string());
    }

    /// Appends the pagination and search parameters, identically for every
    /// kind.
    pub(crate) fn add_paging(&self, url: &mut Url) {
        if let Some(page) = self.page {
            url.query_pairs_mut()
                .append_pair("page", &page.to_string());
        }
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        }
    }
}
