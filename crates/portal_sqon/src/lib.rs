//! Sqon filter fragments for portal URLs.
//!
//! [`sqon_url_query_string`] formats the `sqon=` query parameter used to link
//! into a pre-filtered repository view. It is plain string templating: inputs
//! are embedded verbatim. [`Sqon`] parses such a fragment back into a filter
//! tree.

pub mod error;
pub mod fragment;
pub mod types;

pub use error::{Result, SqonError};
pub use fragment::{needs_escaping, sqon_url_query_string, SQON_PARAM};
pub use types::{CombineOp, FieldFilter, FieldFilterContent, FilterOp, Sqon};
