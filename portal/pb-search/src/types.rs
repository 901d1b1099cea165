//! Search service response types
//!
//! Mirrors the JSON a Solr-style service returns for `wt=json`. Documents
//! are kept as open JSON objects since the page never assumes a schema
//! beyond the configured display fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single indexed record
pub type Document = Map<String, Value>;

/// A complete search response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Status, timing, and echoed request parameters
    #[serde(rename = "responseHeader", default)]
    pub header: ResponseHeader,
    /// The matching documents
    #[serde(default)]
    pub response: ResultSet,
}

/// The `responseHeader` block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseHeader {
    #[serde(default)]
    pub status: i32,
    /// Query time in milliseconds
    #[serde(rename = "QTime", default)]
    pub qtime: u64,
    /// Request parameters as echoed by the service
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl ResponseHeader {
    /// Echoed parameter as an unsigned integer
    ///
    /// Solr echoes parameters as strings, so both `"10"` and `10` parse.
    pub fn param_u64(&self, key: &str) -> Option<u64> {
        match self.params.get(key)? {
            Value::String(s) => s.trim().parse().ok(),
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }
}

/// The `response` block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    /// Total number of matches, not just the ones returned
    #[serde(rename = "numFound", default)]
    pub num_found: u64,
    /// Offset of the first returned document
    #[serde(default)]
    pub start: u64,
    #[serde(default)]
    pub docs: Vec<Document>,
}

/// Display text for a document field
///
/// Multi-valued fields are joined with `", "`. Objects and nulls have no
/// display text.
pub fn field_text(doc: &Document, field: &str) -> Option<String> {
    value_text(doc.get(field)?)
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_text).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        Value::Null | Value::Object(_) => None,
    }
}
