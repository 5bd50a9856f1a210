mod client;
mod config;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::config::Config;
pub use self::errors::Error;
pub use self::query::{IncomeQuery, OrderQuery, Query, QueryCommon, SaleQuery, StockQuery};
