use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::types::CustomerId;

/// Customer record as served by the backend `GET /customers/` endpoint.
///
/// Text fields accept whatever scalar the backend sends and keep its string
/// form; `null` or a missing field reads as empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub customer_id: CustomerId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub mobile: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    /// Server-defined activity status, used only by the status filter.
    #[serde(default, deserialize_with = "lenient_status")]
    pub activity_status: Option<String>,
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| value_to_text(value).unwrap_or_default())
}

fn lenient_status<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_to_text)
}

impl Customer {
    #[must_use]
    pub fn new(
        customer_id: CustomerId,
        name: impl Into<String>,
        mobile: impl Into<String>,
        email: impl Into<String>,
        activity_status: Option<String>,
    ) -> Self {
        Self {
            customer_id,
            name: name.into(),
            mobile: mobile.into(),
            email: email.into(),
            activity_status,
        }
    }

    /// Name and email match case-insensitively, mobile matches verbatim.
    pub fn matches_search(&self, search: &str) -> bool {
        let needle = search.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
            || self.mobile.contains(search)
    }
}
