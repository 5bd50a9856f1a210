mod common;
pub use self::common::{Query, QueryCommon};

mod stock;
pub use self::stock::StockQuery;

mod income;
pub use self::income::IncomeQuery;

mod sale;
pub use self::sale::SaleQuery;

mod order;
pub use self::order::OrderQuery;
