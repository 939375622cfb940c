//! Purpose: Retry numeric closeness after casting every value to `f64`.
//! Exports: `compare`, `cast_f64`.
//! Role: Second strategy; covers decimal and mixed numeric object columns.
//! Invariants: Decimals convert through their exact text, giving the nearest `f64`.
//! Invariants: The first uncastable value stops the cast; no partial results.
use crate::core::error::CompareError;
use crate::core::matches::MatchVector;
use crate::core::tolerance::{self, Tolerance};
use crate::core::value::{Column, Value};

pub fn compare(a: &Column, b: &Column, tolerance: Tolerance) -> Result<MatchVector, CompareError> {
    CompareError::check_aligned(a.len(), b.len())?;
    let left = cast_column(a)?;
    let right = cast_column(b)?;
    Ok(tolerance::compare_floats(&left, &right, tolerance))
}

/// `Ok(None)` for missing values; text and datetimes are cast failures.
pub fn cast_f64(value: &Value, position: usize) -> Result<Option<f64>, CompareError> {
    if value.is_null() {
        return Ok(None);
    }
    let failure = CompareError::CastFailure { position };
    match value {
        Value::Int(int) => Ok(Some(*int as f64)),
        Value::Float(float) => Ok(Some(*float)),
        Value::Bool(flag) => Ok(Some(if *flag { 1.0 } else { 0.0 })),
        Value::Decimal(decimal) => decimal
            .to_string()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| failure),
        Value::Null | Value::Text(_) | Value::DateTime(_) => Err(failure),
    }
}

fn cast_column(column: &Column) -> Result<Vec<Option<f64>>, CompareError> {
    column
        .iter()
        .enumerate()
        .map(|(position, value)| cast_f64(value, position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{cast_f64, compare};
    use crate::core::error::CompareError;
    use crate::core::tolerance::Tolerance;
    use crate::core::value::{Column, Value};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(text: &str) -> Value {
        Value::Decimal(Decimal::from_str(text).expect("decimal literal"))
    }

    #[test]
    fn decimals_cast_to_nearest_float() {
        assert_eq!(cast_f64(&dec("1.3"), 0), Ok(Some(1.3)));
        assert_eq!(cast_f64(&dec("1.000003"), 0), Ok(Some(1.000003)));
        assert_eq!(cast_f64(&dec("-0.1"), 0), Ok(Some(-0.1)));
        assert_eq!(cast_f64(&Value::Float(f64::NAN), 0), Ok(None));
        assert_eq!(
            cast_f64(&Value::from("1"), 3),
            Err(CompareError::CastFailure { position: 3 })
        );
    }

    #[test]
    fn decimal_against_float() {
        let a = Column::new(vec![
            dec("1"),
            dec("1.3"),
            dec("1.000003"),
            dec("1.000000004"),
            dec("1.3"),
            Value::Null,
            Value::Null,
            dec("1"),
        ]);
        let b = Column::new(vec![
            Value::Int(1),
            Value::Float(1.3),
            Value::Float(1.000003),
            Value::Float(1.000000003),
            Value::Float(1.2),
            Value::Float(f64::NAN),
            Value::Int(1),
            Value::Null,
        ]);
        let exact = compare(&a, &b, Tolerance::default()).expect("castable");
        assert_eq!(
            exact.into_inner(),
            vec![true, true, true, false, false, true, false, false]
        );
        let loose = compare(&a, &b, Tolerance::new(0.0, 0.001)).expect("castable");
        assert_eq!(
            loose.into_inner(),
            vec![true, true, true, true, false, true, false, false]
        );
    }

    #[test]
    fn text_value_is_cast_failure() {
        let a = Column::new(vec![Value::Int(1), Value::from("hi")]);
        let b = Column::new(vec![Value::Int(1), Value::Int(2)]);
        let err = compare(&a, &b, Tolerance::default()).expect_err("should fail");
        assert_eq!(err, CompareError::CastFailure { position: 1 });
    }
}
