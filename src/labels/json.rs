//! `Labels.json` parsing.
//!
//! The classifier ships its categories as a JSON object keyed by decimal class
//! index, e.g. `{"0": "tench", "1": "goldfish"}`. Keys are ordered by their
//! numeric value and must cover `0..n` without gaps. A plain array of strings
//! is accepted as well.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::labels::LabelTable;
use crate::util::{PostRankError, PostRankResult};

fn invalid(reason: impl Into<String>) -> PostRankError {
    PostRankError::InvalidLabels {
        reason: reason.into(),
    }
}

impl LabelTable {
    /// Parses a label table from JSON text.
    pub fn from_json_str(text: &str) -> PostRankResult<Self> {
        let value: Value = serde_json::from_str(text).map_err(|err| invalid(err.to_string()))?;
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(label) => Ok(label),
                    other => Err(invalid(format!("expected a string label, got {other}"))),
                })
                .collect::<PostRankResult<Vec<_>>>()
                .map(LabelTable::new),
            Value::Object(map) => {
                let mut ordered = BTreeMap::new();
                for (key, item) in map {
                    let idx: usize = key
                        .parse()
                        .map_err(|_| invalid(format!("label key {key:?} is not a class index")))?;
                    let Value::String(label) = item else {
                        return Err(invalid(format!("label {key:?} is not a string")));
                    };
                    if ordered.insert(idx, label).is_some() {
                        return Err(invalid(format!("duplicate label for class {idx}")));
                    }
                }
                for (expected, idx) in ordered.keys().enumerate() {
                    if *idx != expected {
                        return Err(invalid(format!("missing label for class {expected}")));
                    }
                }
                Ok(LabelTable::new(ordered.into_values().collect()))
            }
            _ => Err(invalid("expected a JSON object or array")),
        }
    }

    /// Reads and parses a label file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> PostRankResult<Self> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|err| {
            invalid(format!("cannot read {}: {err}", path.as_ref().display()))
        })?;
        Self::from_json_str(&text)
    }
}
