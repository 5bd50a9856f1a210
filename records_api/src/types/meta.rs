use serde::{Deserialize, Serialize};

/// One server-paginated slice of records plus navigation metadata. The
/// server is the sole source of truth for pagination; nothing here is
/// recomputed client-side.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub links: Links,
    pub meta: Meta,
}

/// Absolute navigation links for the current page.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Links {
    pub first: String,
    pub last: String,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Pagination metadata. `per_page` arrives as a string on the wire.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Meta {
    pub current_page: i64,
    #[serde(default)]
    pub from: Option<i64>,
    pub last_page: i64,
    pub links: Vec<MetaLink>,
    pub path: String,
    pub per_page: String,
    #[serde(default)]
    pub to: Option<i64>,
    pub total: i64,
}

/// One entry of the server-rendered pager.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MetaLink {
    #[serde(default)]
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}
