//! Item resource and its embedded price and stock lists.
//!
//! # Helpers
//!
//! [`default_price`] and [`total_quantity`] read the two values most callers
//! want out of an item. Both return [`NOT_AVAILABLE`] instead of failing
//! when the value is absent.
//!
//! ```rust
//! use lightspeed_retail::rest::resources::{default_price, total_quantity, ItemPrice, ItemShop};
//!
//! let prices = vec![
//!     ItemPrice::new("10.00", "Default"),
//!     ItemPrice::new("12.00", "MSRP"),
//! ];
//! assert_eq!(default_price(&prices), "10.00");
//! assert_eq!(default_price(&prices[1..]), "Not available");
//!
//! let shops = vec![ItemShop::new("0", "42"), ItemShop::new("3", "5")];
//! assert_eq!(total_quantity(&shops), "42");
//! assert_eq!(total_quantity(&shops[1..]), "Not available");
//! ```

use serde::{Deserialize, Serialize};

use super::Category;
use crate::rest::one_or_many;

/// Returned by the helpers when the requested value is absent.
pub const NOT_AVAILABLE: &str = "Not available";

/// The `shopID` Lightspeed uses for stock summed across every shop.
pub const ALL_SHOPS_ID: &str = "0";

/// The `useType` of an item's regular selling price.
pub const DEFAULT_PRICE_USE_TYPE: &str = "Default";

/// An inventory item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// The item identifier.
    #[serde(rename = "itemID", skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_sku: Option<String>,

    /// The item's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_cost: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_cost: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,

    /// `"true"` when the item is archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,

    /// Identifier of the item's category, `"0"` when uncategorized.
    #[serde(rename = "categoryID", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<String>,

    /// Price tiers.
    #[serde(rename = "Prices", skip_serializing_if = "Option::is_none")]
    pub prices: Option<Prices>,

    /// The embedded category, present when the `Category` relation is loaded.
    #[serde(rename = "Category", skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Per-shop stock, present when the `ItemShops` relation is loaded.
    #[serde(rename = "ItemShops", skip_serializing_if = "Option::is_none")]
    pub item_shops: Option<ItemShops>,

    /// Every other field, as received.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Item {
    /// Returns the price tiers, empty when none were sent.
    #[must_use]
    pub fn price_list(&self) -> &[ItemPrice] {
        self.prices
            .as_ref()
            .map_or(&[][..], |prices| prices.item_price.as_slice())
    }

    /// Returns the per-shop stock entries, empty when none were sent.
    #[must_use]
    pub fn shop_list(&self) -> &[ItemShop] {
        self.item_shops
            .as_ref()
            .map_or(&[][..], |shops| shops.item_shop.as_slice())
    }

    /// Returns the amount of the `Default` price tier, or [`NOT_AVAILABLE`].
    #[must_use]
    pub fn default_price(&self) -> &str {
        default_price(self.price_list())
    }

    /// Returns the quantity on hand across all shops, or [`NOT_AVAILABLE`].
    #[must_use]
    pub fn total_quantity(&self) -> &str {
        total_quantity(self.shop_list())
    }
}

/// The `Prices` wrapper object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    #[serde(rename = "ItemPrice", default, deserialize_with = "one_or_many")]
    pub item_price: Vec<ItemPrice>,
}

/// One price tier of an item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPrice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Name of the tier, e.g. `"Default"` or `"MSRP"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_type: Option<String>,

    #[serde(rename = "useTypeID", skip_serializing_if = "Option::is_none")]
    pub use_type_id: Option<String>,

    /// Every other field, as received.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl ItemPrice {
    /// Creates a price tier.
    #[must_use]
    pub fn new(amount: impl Into<String>, use_type: impl Into<String>) -> Self {
        Self {
            amount: Some(amount.into()),
            use_type: Some(use_type.into()),
            ..Self::default()
        }
    }
}

/// The `ItemShops` wrapper object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemShops {
    #[serde(rename = "ItemShop", default, deserialize_with = "one_or_many")]
    pub item_shop: Vec<ItemShop>,
}

/// Stock of an item at one shop, or across all shops when `shopID` is `"0"`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemShop {
    #[serde(rename = "itemShopID", skip_serializing_if = "Option::is_none")]
    pub item_shop_id: Option<String>,

    /// Quantity on hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qoh: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sellable: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backorder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_point: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_level: Option<String>,

    #[serde(rename = "itemID", skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,

    #[serde(rename = "shopID", skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<String>,

    /// Every other field, as received.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl ItemShop {
    /// Creates a stock entry.
    #[must_use]
    pub fn new(shop_id: impl Into<String>, qoh: impl Into<String>) -> Self {
        Self {
            shop_id: Some(shop_id.into()),
            qoh: Some(qoh.into()),
            ..Self::default()
        }
    }
}

/// Returns the amount of the first tier whose `useType` is `Default`.
///
/// Returns [`NOT_AVAILABLE`] if there is no such tier or it has no amount.
#[must_use]
pub fn default_price(prices: &[ItemPrice]) -> &str {
    prices
        .iter()
        .find(|price| price.use_type.as_deref() == Some(DEFAULT_PRICE_USE_TYPE))
        .and_then(|price| price.amount.as_deref())
        .unwrap_or(NOT_AVAILABLE)
}

/// Returns the quantity on hand of the entry whose `shopID` is [`ALL_SHOPS_ID`].
///
/// Returns [`NOT_AVAILABLE`] if there is no such entry or it has no quantity.
#[must_use]
pub fn total_quantity(shops: &[ItemShop]) -> &str {
    shops
        .iter()
        .find(|shop| shop.shop_id.as_deref() == Some(ALL_SHOPS_ID))
        .and_then(|shop| shop.qoh.as_deref())
        .unwrap_or(NOT_AVAILABLE)
}
