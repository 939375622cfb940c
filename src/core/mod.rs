// Core modules implementing the column model, comparison strategies, and name helpers.
pub mod datetime;
pub mod decimal;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod exact;
pub mod matches;
pub mod names;
pub mod options;
pub mod tolerance;
pub mod value;
