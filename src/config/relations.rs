//! Default relation lists for list operations.

/// Relations embedded by default when a caller does not supply
/// [`QueryOptions::load_relations`](crate::rest::QueryOptions::load_relations).
///
/// A caller-supplied list replaces the matching default wholesale.
///
/// # Example
///
/// ```rust
/// use lightspeed_retail::RelationDefaults;
///
/// let defaults = RelationDefaults::default();
/// assert_eq!(defaults.items, vec!["Category", "ItemAttributes"]);
/// assert_eq!(
///     defaults.items_by_category,
///     vec!["Category", "ItemAttributes", "ItemShops"]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationDefaults {
    /// Used by [`LightspeedClient::items`](crate::LightspeedClient::items).
    pub items: Vec<String>,
    /// Used by [`LightspeedClient::items_by_category`](crate::LightspeedClient::items_by_category).
    pub items_by_category: Vec<String>,
    /// Used by [`LightspeedClient::sales`](crate::LightspeedClient::sales).
    pub sales: Vec<String>,
}

impl Default for RelationDefaults {
    fn default() -> Self {
        Self {
            items: relations(&["Category", "ItemAttributes"]),
            items_by_category: relations(&["Category", "ItemAttributes", "ItemShops"]),
            sales: relations(&["SaleLines"]),
        }
    }
}

fn relations(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}
