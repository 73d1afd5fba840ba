//! Lightspeed Retail API V3 payloads.
//!
//! | Resource | Envelope key | Endpoint |
//! |---|---|---|
//! | [`Account`] | `Account` | `Account.json` |
//! | [`Category`] | `Category` | `Account/{id}/Category.json` |
//! | [`Item`] | `Item` | `Account/{id}/Item.json`, `Account/{id}/Item/{itemID}.json` |
//! | [`Sale`] | `Sale` | `Account/{id}/Sale.json` |
//!
//! Fields without a typed counterpart land in each payload's `other` map and
//! serialize back unchanged. A typed field that arrives as `null` becomes
//! `None` and is left out when the payload is serialized again.

mod account;
mod category;
mod item;
mod sale;

pub use account::{Account, AccountId};
pub use category::Category;
pub use item::{
    default_price, total_quantity, Item, ItemPrice, ItemShop, ItemShops, Prices, ALL_SHOPS_ID,
    DEFAULT_PRICE_USE_TYPE, NOT_AVAILABLE,
};
pub use sale::{Sale, SaleLine, SaleLines};
