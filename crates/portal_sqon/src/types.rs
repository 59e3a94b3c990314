//! Structured form of a sqon, for callers that need to inspect a fragment.

use crate::error::{Result, SqonError};
use crate::fragment::SQON_PARAM;
use serde::{Deserialize, Serialize};

/// Operator joining the filters of a sqon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombineOp {
    And,
    Or,
    Not,
}

/// Operator applied to a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOp {
    In,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilterContent {
    pub field: String,
    pub value: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilter {
    pub op: FilterOp,
    pub content: FieldFilterContent,
}

/// Operator/content filter tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sqon {
    pub op: CombineOp,
    pub content: Vec<FieldFilter>,
}

impl Sqon {
    /// Parse a fragment with or without its `sqon=` prefix.
    ///
    /// A leading `?` or `&` is ignored. Fragments built from inputs that
    /// contain quotes fail here with [`SqonError::Json`].
    pub fn from_query_string(fragment: &str) -> Result<Self> {
        let fragment = fragment.trim_start_matches(|c: char| c == '?' || c == '&');
        let json = match fragment.split_once('=') {
            Some((param, rest)) if !param.trim_start().starts_with('{') => {
                if param != SQON_PARAM {
                    return Err(SqonError::UnexpectedParam {
                        param: SQON_PARAM,
                        found: param.to_string(),
                    });
                }
                rest
            }
            _ => fragment,
        };
        Ok(serde_json::from_str(json)?)
    }

    /// `(field, values)` for each filter.
    pub fn field_values(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.content
            .iter()
            .map(|f| (f.content.field.as_str(), f.content.value.as_slice()))
    }
}
