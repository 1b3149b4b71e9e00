//! Wire types shared by the client and its callers.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One result row, exactly as the server serialized it.
///
/// Service endpoints return the full entity; the PQL endpoint returns an
/// object keyed by column label.
pub type Row = Map<String, Value>;

// ============ Networks ============

/// A publisher network the signed-in user has access to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Network code; every service query is scoped to one.
    #[serde(deserialize_with = "string_or_number")]
    pub network_code: String,
    /// Human readable network name.
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub property_code: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Test networks are created through `POST /api/networks`.
    #[serde(default)]
    pub is_test: Option<bool>,
    /// Everything else the server sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Network {
    /// Create a network with only a code, mostly useful in tests.
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            network_code: code.into(),
            display_name: None,
            property_code: None,
            time_zone: None,
            currency_code: None,
            is_test: None,
            extra: Map::new(),
        }
    }

    /// `"<name> (<code>)"`, or just the code when the name is missing.
    pub fn label(&self) -> String {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => format!("{name} ({})", self.network_code),
            _ => self.network_code.clone(),
        }
    }
}

/// `GET /api/networks` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkList {
    #[serde(default)]
    pub results: Vec<Network>,
    #[serde(default)]
    pub total_result_set_size: Option<u64>,
}

// ============ Service queries ============

/// `GET /api/<route>` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Row>,
    /// Column labels; only the PQL endpoint sends them.
    #[serde(default)]
    pub columns: Option<Vec<String>>,
    /// Total number of matching entities. Absent for PQL.
    #[serde(default)]
    pub total_result_set_size: Option<u64>,
    /// Limit the server applied, echoed back.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Offset the server applied, echoed back.
    #[serde(default)]
    pub offset: Option<u32>,
}

/// Query parameters accepted by every service endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Filter clause, sent as `where`.
    #[serde(rename = "where")]
    pub where_clause: String,
    pub limit: u32,
    pub offset: u32,
    pub network_code: String,
}

impl QueryParams {
    pub fn new(
        where_clause: impl Into<String>,
        limit: u32,
        offset: u32,
        network_code: impl Into<String>,
    ) -> Self {
        Self {
            where_clause: where_clause.into(),
            limit,
            offset,
            network_code: network_code.into(),
        }
    }

    /// Percent-encoded query string.
    ///
    /// Parameter order is fixed (`where`, `network_code`, `limit`, `offset`)
    /// so identical parameters always produce byte-identical URIs.
    pub fn query_string(&self) -> String {
        format!(
            "where={}&network_code={}&limit={}&offset={}",
            urlencoding::encode(&self.where_clause),
            urlencoding::encode(&self.network_code),
            self.limit,
            self.offset
        )
    }

    /// Server-relative request URI for `route`.
    pub fn uri(&self, route: &str) -> String {
        format!("/api/{route}?{}", self.query_string())
    }
}

/// Accept `"12345"` as well as `12345`.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for networkCode, got {other}"
        ))),
    }
}
