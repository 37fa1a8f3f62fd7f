//! JSON export of converted items.

use serde::{Deserialize, Serialize};

use crate::legacy::QtiItem;

/// Format version stamped on exported documents.
pub const JSON_FORMAT_VERSION: &str = "1.0";

/// Top-level document written by the JSON exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonDocument {
    pub version: String,
    pub questions: Vec<QtiItem>,
}

/// Collects items into a versioned document, preserving order.
pub fn export_json(items: &[QtiItem]) -> JsonDocument {
    JsonDocument {
        version: JSON_FORMAT_VERSION.to_string(),
        questions: items.to_vec(),
    }
}
