use chrono::NaiveDate;
use url::Url;

use super::common::{Query, QueryCommon};

/// Query for receiving events (`GET /incomes`).
///
/// The incomes endpoint requires a closed date range: both `dateFrom` and
/// `dateTo` fall back to today when the caller leaves them unset.
#[derive(Clone, Default)]
pub struct IncomeQuery {
    pub common: QueryCommon,
}

impl Query for IncomeQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url, today: NaiveDate) -> Url {
        let mut url = url.clone();
        self.common.add_date_from(&mut url, today);
        self.common.add_date_to_or_today(&mut url, today);
        self.common.add_paging(&mut url);
        url
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use url::Url;

    use crate::query::{IncomeQuery, Query};

    #[test]
    fn both_dates_fall_back_to_today() {
        let base = Url::parse("https://example.com").unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        let url = IncomeQuery::default().add_to_url(&base, today);
        assert_eq!(url.query(), Some("dateFrom=2024-06-15&dateTo=2024-06-15"));
    }

    #[test]
    fn caller_dates_win_over_defaults() {
        let base = Url::parse("https://example.com").unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        let url = IncomeQuery::default()
            .with_date_from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .with_date_to(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
            .add_to_url(&base, today);
        assert_eq!(url.query(), Some("dateFrom=2024-01-01&dateTo=2024-01-31"));
    }
}
