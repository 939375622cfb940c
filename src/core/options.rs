//! Purpose: Tolerance configuration for column comparisons.
//! Exports: `CompareOptions`.
//! Role: Config layer shared by `ColumnComparer` and callers loading settings from JSON.
//! Invariants: Validated options hold finite, non-negative tolerances.
use crate::core::error::{Error, ErrorKind};
use crate::core::tolerance::Tolerance;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CompareOptions {
    pub rel_tol: f64,
    pub abs_tol: f64,
}

impl CompareOptions {
    pub fn new(rel_tol: f64, abs_tol: f64) -> Result<Self, Error> {
        let options = Self { rel_tol, abs_tol };
        options.validate()?;
        Ok(options)
    }

    pub fn from_json(input: &str) -> Result<Self, Error> {
        let options: Self = serde_json::from_str(input).map_err(|err| {
            Error::new(ErrorKind::Usage)
                .with_message("invalid compare options")
                .with_source(err)
        })?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [("rel_tol", self.rel_tol), ("abs_tol", self.abs_tol)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::new(ErrorKind::Usage)
                    .with_message(format!("{name} must be a finite, non-negative number")));
            }
        }
        Ok(())
    }

    pub(crate) fn tolerance(&self) -> Tolerance {
        Tolerance::new(self.rel_tol, self.abs_tol)
    }
}
