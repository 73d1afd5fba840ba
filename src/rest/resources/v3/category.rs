//! Category resource.

use serde::{Deserialize, Serialize};

/// A node in the account's category tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// The category identifier.
    #[serde(rename = "categoryID", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    /// The category name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Depth in the tree, `"0"` for roots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_depth: Option<String>,

    /// Names from the root down to this node, joined with `/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_path_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_node: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_node: Option<String>,

    /// Parent category identifier, `"0"` for roots.
    #[serde(rename = "parentID", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<String>,

    /// Every other field, as received.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
