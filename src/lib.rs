//! Purpose: Tolerance-aware equality for heterogeneous table columns.
//! Exports: `api` (column model, `columns_equal`, diagnostics, join name helpers).
//! Role: Library consumed by a table-diff orchestrator once per column pair.
//! Invariants: Comparisons are pure; no global state, I/O, or logger installation.
//! Invariants: Strategy failures resolve inside the engine and never reach callers.
pub mod api;
mod core;
