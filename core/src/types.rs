//! Argument types shared by several endpoints.
//!
//! Responses are returned as untyped `serde_json::Value`; only the inputs
//! that need more structure than a string or integer live here.

use serde::{Deserialize, Serialize};

use crate::params::ParamValue;

/// A game id, or a comma-separated list of game ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdList {
    Single(i64),
    Csv(String),
}

impl From<i64> for IdList {
    fn from(value: i64) -> Self {
        IdList::Single(value)
    }
}

impl From<i32> for IdList {
    fn from(value: i32) -> Self {
        IdList::Single(i64::from(value))
    }
}

impl From<u32> for IdList {
    fn from(value: u32) -> Self {
        IdList::Single(i64::from(value))
    }
}

impl From<&str> for IdList {
    fn from(value: &str) -> Self {
        IdList::Csv(value.to_string())
    }
}

impl From<String> for IdList {
    fn from(value: String) -> Self {
        IdList::Csv(value)
    }
}

impl From<&[u32]> for IdList {
    fn from(ids: &[u32]) -> Self {
        let csv = ids
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        IdList::Csv(csv)
    }
}

impl From<IdList> for ParamValue {
    fn from(ids: IdList) -> Self {
        match ids {
            IdList::Single(id) => ParamValue::Int(id),
            IdList::Csv(csv) => ParamValue::Str(csv),
        }
    }
}
