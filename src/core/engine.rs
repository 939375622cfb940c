//! Purpose: Column equality entry point running the comparison fallback chain.
//! Exports: `ColumnComparer`, `Comparison`, `columns_equal`.
//! Role: Tolerance → decimal cast → date/string → exact, each step consuming only
//! the failure of the step before it.
//! Invariants: Always returns one boolean per position of the first column.
//! Invariants: Strategy failures never reach the caller; unresolvable input is all-false.
use crate::core::datetime;
use crate::core::decimal;
use crate::core::diagnostics::{CompareEvent, DiagnosticSink, Strategy, TracingSink};
use crate::core::error::{CompareError, Error};
use crate::core::exact;
use crate::core::matches::MatchVector;
use crate::core::options::CompareOptions;
use crate::core::tolerance::{self, Tolerance};
use crate::core::value::Column;

/// Compares two aligned columns with the given tolerances, logging fallbacks
/// through `tracing`.
pub fn columns_equal(a: &Column, b: &Column, rel_tol: f64, abs_tol: f64) -> MatchVector {
    let options = CompareOptions { rel_tol, abs_tol };
    ColumnComparer::with_sink(options, TracingSink).compare(a, b)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub matches: MatchVector,
    /// Strategy that produced `matches`; for an all-false degradation, the
    /// strategy that failed.
    pub strategy: Strategy,
    pub degraded: bool,
}

pub struct ColumnComparer<S = TracingSink> {
    options: CompareOptions,
    sink: S,
}

impl ColumnComparer<TracingSink> {
    pub fn new(options: CompareOptions) -> Result<Self, Error> {
        options.validate()?;
        Ok(Self::with_sink(options, TracingSink))
    }
}

impl Default for ColumnComparer<TracingSink> {
    fn default() -> Self {
        Self::with_sink(CompareOptions::default(), TracingSink)
    }
}

impl<S: DiagnosticSink> ColumnComparer<S> {
    pub fn with_sink(options: CompareOptions, sink: S) -> Self {
        Self { options, sink }
    }

    pub fn options(&self) -> CompareOptions {
        self.options
    }

    pub fn compare(&self, a: &Column, b: &Column) -> MatchVector {
        self.compare_detailed(a, b).matches
    }

    pub fn compare_detailed(&self, a: &Column, b: &Column) -> Comparison {
        let tolerance = self.options.tolerance();
        match tolerance::compare(a, b, tolerance) {
            Ok(matches) => return self.resolved(Strategy::Tolerance, matches),
            Err(cause @ CompareError::TypeMismatch { .. }) => {
                self.fallback(Strategy::Tolerance, Strategy::DecimalCast, cause)
            }
            Err(cause) => return self.degraded(Strategy::Tolerance, cause, a.len()),
        }
        self.after_type_mismatch(a, b, tolerance)
    }

    fn after_type_mismatch(&self, a: &Column, b: &Column, tolerance: Tolerance) -> Comparison {
        match decimal::compare(a, b, tolerance) {
            Ok(matches) => return self.resolved(Strategy::DecimalCast, matches),
            Err(cause @ CompareError::CastFailure { .. }) => {
                if datetime::applies(a.kind(), b.kind()) {
                    self.fallback(Strategy::DecimalCast, Strategy::DateString, cause);
                    return self.date_string(a, b);
                }
                self.fallback(Strategy::DecimalCast, Strategy::Exact, cause);
            }
            Err(cause) => return self.degraded(Strategy::DecimalCast, cause, a.len()),
        }
        match exact::compare(a, b) {
            Ok(matches) => self.resolved(Strategy::Exact, matches),
            Err(cause) => self.degraded(Strategy::Exact, cause, a.len()),
        }
    }

    fn date_string(&self, a: &Column, b: &Column) -> Comparison {
        match datetime::reconcile(a, b) {
            Ok(matches) => self.resolved(Strategy::DateString, matches),
            Err(cause) => self.degraded(Strategy::DateString, cause, a.len()),
        }
    }

    fn fallback(&self, from: Strategy, to: Strategy, cause: CompareError) {
        self.sink.record(&CompareEvent::Fallback { from, to, cause });
    }

    fn resolved(&self, strategy: Strategy, matches: MatchVector) -> Comparison {
        self.sink.record(&CompareEvent::Resolved {
            strategy,
            len: matches.len(),
        });
        Comparison {
            matches,
            strategy,
            degraded: false,
        }
    }

    fn degraded(&self, strategy: Strategy, cause: CompareError, len: usize) -> Comparison {
        self.sink.record(&CompareEvent::Degraded { strategy, cause });
        Comparison {
            matches: MatchVector::all_false(len),
            strategy,
            degraded: true,
        }
    }
}
