use serde::{Deserialize, Serialize};

/// Inventory snapshot for one (product, size, warehouse) combination on a
/// given date.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Stock {
    pub date: String,

    pub last_change_date: Option<String>,

    pub supplier_article: String,

    pub tech_size: String,

    pub barcode: i64,

    pub quantity: i64,

    pub is_supply: Option<bool>,

    pub is_realization: Option<bool>,

    pub quantity_full: Option<i64>,

    pub warehouse_name: String,

    pub in_way_to_client: Option<i64>,

    pub in_way_from_client: Option<i64>,

    pub nm_id: i64,

    pub subject: String,

    pub category: String,

    pub brand: String,

    pub sc_code: i64,

    pub price: String,

    pub discount: String,
}
