//! Account resource.
//!
//! `GET /API/V3/Account.json` returns the account the access token belongs to.
//! Every other resource path is scoped under its `accountID`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a Lightspeed account, as sent by the API.
///
/// # Example
///
/// ```rust
/// use lightspeed_retail::rest::resources::AccountId;
///
/// let id = AccountId::new("99");
/// assert_eq!(id.to_string(), "99");
/// assert_eq!(id.as_ref(), "99");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Wraps an account identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A Lightspeed Retail account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The account identifier.
    #[serde(rename = "accountID")]
    pub account_id: AccountId,

    /// The account's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Every other field, as received.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
