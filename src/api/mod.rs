//! Purpose: Define the stable public Rust API boundary for colmatch.
//! Exports: Column model, comparison engine, diagnostics, and join name helpers.
//! Role: Public, additive-only surface; strategy modules stay internal.
//! Invariants: This module is the only public path to the comparison engine.
//! Invariants: Internal strategy functions are not directly exposed.

pub use crate::core::datetime::parse_timestamp;
pub use crate::core::diagnostics::{
    CompareEvent, DiagnosticSink, NoopSink, Strategy, TracingSink,
};
pub use crate::core::engine::{ColumnComparer, Comparison, columns_equal};
pub use crate::core::error::{CompareError, Error, ErrorKind};
pub use crate::core::matches::MatchVector;
pub use crate::core::names::{NameSet, resolve_merged_columns, temp_column_name};
pub use crate::core::options::CompareOptions;
pub use crate::core::value::{Column, StorageKind, Value};
