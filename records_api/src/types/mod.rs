mod meta;
pub use self::meta::{Links, Meta, MetaLink, Page};

mod stock;
pub use self::stock::Stock;

mod income;
pub use self::income::Income;

mod sale;
pub use self::sale::Sale;

mod order;
pub use self::order::Order;
