use chrono::NaiveDate;
use url::Url;

use super::common::{Query, QueryCommon};

/// Query for warehouse stock snapshots (`GET /stocks`).
///
/// `dateFrom` is mandatory upstream and falls back to today; `dateTo` is
/// sent only when the caller supplies it.
#[derive(Clone, Default)]
pub struct StockQuery {
    pub common: QueryCommon,
}

impl Query for StockQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url, today: NaiveDate) -> Url {
        let mut url = url.clone();
        self.common.add_date_from(&mut url, today);
        self.common.add_date_to_if_set(&mut url);
        self.common.add_paging(&mut url);
        url
    }
}
