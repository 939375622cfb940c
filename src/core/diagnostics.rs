//! Purpose: Report how the engine arrived at a match vector.
//! Exports: `Strategy`, `CompareEvent`, `DiagnosticSink`, `TracingSink`, `NoopSink`.
//! Role: Injected sink replacing process-wide logger state; `TracingSink` is the default.
//! Invariants: Sinks observe events only; they cannot alter the comparison outcome.
use crate::core::error::CompareError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Strategy {
    Tolerance,
    DecimalCast,
    DateString,
    Exact,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Tolerance => "tolerance",
            Strategy::DecimalCast => "decimal_cast",
            Strategy::DateString => "date_string",
            Strategy::Exact => "exact",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CompareEvent {
    /// `from` could not compare the columns; `to` is tried next.
    Fallback {
        from: Strategy,
        to: Strategy,
        cause: CompareError,
    },
    /// `strategy` failed and the whole vector resolved to false.
    Degraded {
        strategy: Strategy,
        cause: CompareError,
    },
    Resolved { strategy: Strategy, len: usize },
}

pub trait DiagnosticSink: Send + Sync {
    fn record(&self, event: &CompareEvent);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&CompareEvent) + Send + Sync,
{
    fn record(&self, event: &CompareEvent) {
        self(event)
    }
}

/// Emits events through `tracing`; degradations log at warn level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &CompareEvent) {
        match event {
            CompareEvent::Fallback { from, to, cause } => {
                tracing::debug!(%from, %to, %cause, "column comparison fallback");
            }
            CompareEvent::Degraded { strategy, cause } => {
                tracing::warn!(%strategy, %cause, "column comparison resolved to all-false");
            }
            CompareEvent::Resolved { strategy, len } => {
                tracing::debug!(%strategy, len, "column comparison resolved");
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _event: &CompareEvent) {}
}
