//! # Drag Payloads
//!
//! The serialized record carried by a drag, in one of two JSON shapes:
//!
//! ```text
//! { "symbol": "𓄿", "meaning": "a", "category": "letter" }   catalog card
//! { "type": "reorder", "index": 3 }                          placed item
//! ```
//!
//! Drag sources are untrusted, so parsing never panics. An entry only needs a
//! non-empty `symbol`: a missing or non-string `meaning` reads as empty and an
//! unrecognised `category` is derived from the meaning. Anything else is a
//! [`PayloadError`].

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::catalog::{Category, SymbolEntry};

const REORDER_TYPE: &str = "reorder";

/// Wire form of a catalog card.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EntryPayload {
    pub symbol: String,
    #[serde(default, deserialize_with = "lenient_meaning")]
    pub meaning: String,
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<Category>,
}

fn lenient_meaning<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(meaning) => Ok(meaning),
        _ => Ok(String::new()),
    }
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(Category::from_label))
}

/// Drag sources written in JavaScript may send `1.0` for `1`.
fn whole_number_index<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if let Some(index) = value.as_u64() {
        return usize::try_from(index).map_err(de::Error::custom);
    }
    match value.as_f64() {
        Some(index) if index >= 0.0 && index.fract() == 0.0 && index <= u32::MAX as f64 => {
            Ok(index as usize)
        }
        _ => Err(de::Error::custom(format!("invalid reorder index: {value}"))),
    }
}

impl EntryPayload {
    /// Category as sent, or derived from the meaning when absent.
    pub fn category(&self) -> Category {
        self.category.unwrap_or_else(|| Category::for_key(&self.meaning))
    }

    pub fn into_entry(self) -> SymbolEntry {
        let category = self.category();
        SymbolEntry {
            key: self.meaning,
            symbol: self.symbol,
            category,
        }
    }
}

impl From<&SymbolEntry> for EntryPayload {
    fn from(entry: &SymbolEntry) -> Self {
        Self {
            symbol: entry.symbol.clone(),
            meaning: entry.key.clone(),
            category: Some(entry.category),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    Entry(EntryPayload),
    Reorder { index: usize },
}

#[derive(Debug)]
pub enum PayloadError {
    /// Not valid JSON, or JSON of the wrong shape.
    Malformed(serde_json::Error),
    /// A JSON object without a usable `symbol` string.
    MissingSymbol,
    /// `type` present but not a kind we accept.
    UnknownType(String),
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::Malformed(e) => write!(f, "malformed drag payload: {e}"),
            PayloadError::MissingSymbol => write!(f, "drag payload has no symbol"),
            PayloadError::UnknownType(kind) => write!(f, "unknown drag payload type: {kind}"),
        }
    }
}

impl std::error::Error for PayloadError {}

impl From<serde_json::Error> for PayloadError {
    fn from(e: serde_json::Error) -> Self {
        PayloadError::Malformed(e)
    }
}

#[derive(Serialize, Deserialize)]
struct ReorderWire {
    #[serde(rename = "type")]
    kind: String,
    #[serde(deserialize_with = "whole_number_index")]
    index: usize,
}

impl DragPayload {
    pub fn parse(raw: &str) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_str(raw)?;

        if let Some(kind) = value.get("type") {
            return match kind.as_str() {
                Some(REORDER_TYPE) => {
                    let wire: ReorderWire = serde_json::from_value(value)?;
                    Ok(DragPayload::Reorder { index: wire.index })
                }
                _ => Err(PayloadError::UnknownType(kind.to_string())),
            };
        }

        match value.get("symbol") {
            Some(Value::String(symbol)) if !symbol.is_empty() => {}
            _ => return Err(PayloadError::MissingSymbol),
        }
        let entry: EntryPayload = serde_json::from_value(value)?;
        Ok(DragPayload::Entry(entry))
    }

    pub fn to_json(&self) -> String {
        let encoded = match self {
            DragPayload::Entry(entry) => serde_json::to_string(entry),
            DragPayload::Reorder { index } => serde_json::to_string(&ReorderWire {
                kind: REORDER_TYPE.to_string(),
                index: *index,
            }),
        };
        // Both shapes are plain structs of strings and integers.
        encoded.unwrap_or_default()
    }

    pub fn for_entry(entry: &SymbolEntry) -> Self {
        DragPayload::Entry(EntryPayload::from(entry))
    }
}
