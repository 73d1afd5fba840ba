//! Sale resource.
//!
//! Sales are read with the `SaleLines` relation by default, so each sale
//! carries the lines that make it up.

use serde::{Deserialize, Serialize};

use crate::rest::one_or_many;

/// A completed, open or voided sale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// The sale identifier.
    #[serde(rename = "saleID", skip_serializing_if = "Option::is_none")]
    pub sale_id: Option<String>,

    #[serde(rename = "employeeID", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,

    #[serde(rename = "shopID", skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<String>,

    #[serde(rename = "registerID", skip_serializing_if = "Option::is_none")]
    pub register_id: Option<String>,

    #[serde(rename = "customerID", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// `"true"` once the sale is closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub voided: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub calc_subtotal: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub calc_tax1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub calc_total: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,

    /// Lines of the sale, present when the `SaleLines` relation is loaded.
    #[serde(rename = "SaleLines", skip_serializing_if = "Option::is_none")]
    pub sale_lines: Option<SaleLines>,

    /// Every other field, as received.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Sale {
    /// Returns the lines of the sale, empty when none were sent.
    #[must_use]
    pub fn lines(&self) -> &[SaleLine] {
        self.sale_lines
            .as_ref()
            .map_or(&[][..], |lines| lines.sale_line.as_slice())
    }
}

/// The `SaleLines` wrapper object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleLines {
    #[serde(rename = "SaleLine", default, deserialize_with = "one_or_many")]
    pub sale_line: Vec<SaleLine>,
}

/// One line of a sale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    #[serde(rename = "saleLineID", skip_serializing_if = "Option::is_none")]
    pub sale_line_id: Option<String>,

    #[serde(rename = "saleID", skip_serializing_if = "Option::is_none")]
    pub sale_id: Option<String>,

    #[serde(rename = "itemID", skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_quantity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_unit_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub calc_total: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<String>,

    /// Every other field, as received.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
