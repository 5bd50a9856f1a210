use serde::{Deserialize, Serialize};

/// A placed order event. Cancelled orders carry `is_cancel` plus the
/// cancellation timestamp in `cancel_dt`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Order {
    pub g_number: String,

    pub date: String,

    pub last_change_date: String,

    pub supplier_article: String,

    pub tech_size: String,

    pub barcode: i64,

    pub total_price: String,

    pub discount_percent: i64,

    pub warehouse_name: String,

    pub oblast: String,

    pub income_id: i64,

    pub odid: String,

    pub nm_id: i64,

    pub subject: String,

    pub category: String,

    pub brand: String,

    pub is_cancel: bool,

    pub cancel_dt: Option<String>,
}
