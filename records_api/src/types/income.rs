use serde::{Deserialize, Serialize};

/// A receiving event: product quantity accepted into a warehouse.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Income {
    pub income_id: i64,

    pub number: String,

    pub date: String,

    pub last_change_date: String,

    pub supplier_article: String,

    pub tech_size: String,

    pub barcode: i64,

    pub quantity: i64,

    pub total_price: String,

    pub date_close: String,

    pub warehouse_name: String,

    pub nm_id: i64,
}
