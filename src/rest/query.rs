//! Query options for list operations.
//!
//! [`QueryOptions`] holds the filters, paging and relation-loading knobs
//! Lightspeed accepts on list endpoints. [`QueryOptions::to_query`] turns them
//! into the sorted key/value map sent on the wire.

use std::collections::BTreeMap;
use std::fmt;

/// Wire key of the relation list.
pub const LOAD_RELATIONS_KEY: &str = "load_relations";

/// How archived records are treated by a list request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Archived {
    /// Return archived and live records (`archived=true`).
    Include,
    /// Return only live records (`archived=false`).
    Exclude,
    /// Return only archived records (`archived=only`).
    Only,
}

impl Archived {
    /// Returns the wire value for this filter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Include => "true",
            Self::Exclude => "false",
            Self::Only => "only",
        }
    }
}

impl fmt::Display for Archived {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional parameters for list operations.
///
/// `load_relations` follows override semantics: `None` lets the operation
/// use its default list, while `Some(list)` replaces the default entirely.
/// `Some(vec![])` is sent as `[]` and asks for no relations.
///
/// Parameters without a named field go in `extra`. A named field wins over
/// an `extra` entry with the same key. A `load_relations` entry in `extra`
/// counts as a caller list and also replaces the default.
///
/// # Example
///
/// ```rust
/// use lightspeed_retail::rest::QueryOptions;
///
/// let options = QueryOptions::new()
///     .limit(2)
///     .load_relations(["Category"])
///     .param("description", "~,shirt");
///
/// let defaults = vec!["Category".to_string(), "ItemAttributes".to_string()];
/// let query = options.to_query(&defaults);
///
/// assert_eq!(query.get("limit").map(String::as_str), Some("2"));
/// assert_eq!(query.get("load_relations").map(String::as_str), Some(r#"["Category"]"#));
/// assert_eq!(query.get("description").map(String::as_str), Some("~,shirt"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Cursor: return records after this one.
    pub after: Option<String>,
    /// Archived record filter.
    pub archived: Option<Archived>,
    /// Cursor: return records before this one.
    pub before: Option<String>,
    /// Ask for the record count.
    pub count: Option<bool>,
    /// Maximum number of records per page.
    pub limit: Option<u32>,
    /// Number of records to skip.
    pub offset: Option<u32>,
    /// Field to sort by, prefixed with `-` for descending order.
    pub sort: Option<String>,
    /// Filter on last modification, e.g. `>,2024-01-01T00:00:00`. Sent as `timeStamp`.
    pub time_stamp: Option<String>,
    /// Relations to embed. Replaces the operation default when set.
    pub load_relations: Option<Vec<String>>,
    /// Additional upstream parameters, in insertion order.
    pub extra: Vec<(String, String)>,
}

impl QueryOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `after` cursor.
    #[must_use]
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Sets the archived filter.
    #[must_use]
    pub const fn archived(mut self, archived: Archived) -> Self {
        self.archived = Some(archived);
        self
    }

    /// Sets the `before` cursor.
    #[must_use]
    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Asks for the record count.
    #[must_use]
    pub const fn count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the number of records to skip.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the sort field.
    #[must_use]
    pub fn sort(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(field.into());
        self
    }

    /// Sets the `timeStamp` filter.
    #[must_use]
    pub fn time_stamp(mut self, filter: impl Into<String>) -> Self {
        self.time_stamp = Some(filter.into());
        self
    }

    /// Replaces the operation's default relations with `relations`.
    #[must_use]
    pub fn load_relations<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.load_relations = Some(relations.into_iter().map(Into::into).collect());
        self
    }

    /// Adds an upstream parameter that has no named field.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Returns the relation list that will be sent, given the operation's
    /// default.
    #[must_use]
    pub fn effective_relations<'a>(&'a self, default_relations: &'a [String]) -> &'a [String] {
        self.load_relations.as_deref().unwrap_or(default_relations)
    }

    /// Builds the query map for a request.
    ///
    /// Later insertions win: `extra` first, then the named fields, then
    /// `load_relations` encoded as a JSON array string. A `load_relations`
    /// entry in `extra` is the caller's list and is sent as given, unless the
    /// named field is also set. The default list is only sent when neither is.
    #[must_use]
    pub fn to_query(&self, default_relations: &[String]) -> BTreeMap<String, String> {
        let mut query: BTreeMap<String, String> = self.extra.iter().cloned().collect();

        let named = [
            ("after", self.after.clone()),
            ("archived", self.archived.map(|a| a.as_str().to_string())),
            ("before", self.before.clone()),
            ("count", self.count.map(|c| u8::from(c).to_string())),
            ("limit", self.limit.map(|l| l.to_string())),
            ("offset", self.offset.map(|o| o.to_string())),
            ("sort", self.sort.clone()),
            ("timeStamp", self.time_stamp.clone()),
        ];
        for (key, value) in named {
            if let Some(value) = value {
                query.insert(key.to_string(), value);
            }
        }

        if self.load_relations.is_some() || !query.contains_key(LOAD_RELATIONS_KEY) {
            let relations = self.effective_relations(default_relations);
            query.insert(
                LOAD_RELATIONS_KEY.to_string(),
                serde_json::Value::from(relations.to_vec()).to_string(),
            );
        }

        query
    }
}
