//! Purpose: Error types for the public surface and the internal comparison signals.
//! Exports: `Error`, `ErrorKind`, `CompareError`.
//! Role: `Error` reaches callers; `CompareError` only drives the engine's fallback chain.
//! Invariants: `CompareError` never escapes `columns_equal`; sinks may observe it.
use crate::core::value::StorageKind;
use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Usage,
    NotFound,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    column: Option<String>,
    position: Option<usize>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            column: None,
            position: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub(crate) fn column_not_found(column: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound)
            .with_message("column not found")
            .with_column(column)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(column) = &self.column {
            write!(f, " (column: {column})")?;
        }
        if let Some(position) = self.position {
            write!(f, " (position: {position})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

/// Why a comparison strategy could not produce a match vector.
#[derive(Clone, Debug, PartialEq)]
pub enum CompareError {
    /// Numeric closeness does not apply to a column of this kind.
    TypeMismatch { kind: StorageKind, position: usize },
    /// A value could not be cast to `f64`.
    CastFailure { position: usize },
    /// A candidate value could not be read as a timestamp.
    Unparseable { position: usize },
    /// The two columns differ in length.
    Misaligned { left: usize, right: usize },
}

impl CompareError {
    pub(crate) fn check_aligned(left: usize, right: usize) -> Result<(), CompareError> {
        if left == right {
            Ok(())
        } else {
            Err(CompareError::Misaligned { left, right })
        }
    }
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareError::TypeMismatch { kind, position } => {
                write!(f, "type mismatch: {kind} value at position {position}")
            }
            CompareError::CastFailure { position } => {
                write!(f, "cast to float failed at position {position}")
            }
            CompareError::Unparseable { position } => {
                write!(f, "timestamp parse failed at position {position}")
            }
            CompareError::Misaligned { left, right } => {
                write!(f, "column lengths differ ({left} vs {right})")
            }
        }
    }
}

impl StdError for CompareError {}
