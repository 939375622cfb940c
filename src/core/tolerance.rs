//! Purpose: Numeric closeness test over two aligned columns.
//! Exports: `Tolerance`, `compare`, `compare_floats`, `is_close`.
//! Role: First strategy of the fallback chain; also reused after float casting.
//! Invariants: Null pairs match; a single null never matches.
//! Invariants: Tolerance scales with the second operand only.
use crate::core::error::CompareError;
use crate::core::matches::MatchVector;
use crate::core::value::{Column, StorageKind, Value};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tolerance {
    pub rel: f64,
    pub abs: f64,
}

impl Tolerance {
    pub fn new(rel: f64, abs: f64) -> Self {
        Self { rel, abs }
    }
}

/// Compares natively numeric columns. Object, text, and datetime columns
/// fail with `TypeMismatch`.
pub fn compare(a: &Column, b: &Column, tolerance: Tolerance) -> Result<MatchVector, CompareError> {
    CompareError::check_aligned(a.len(), b.len())?;
    let left = native_numbers(a)?;
    let right = native_numbers(b)?;
    Ok(compare_floats(&left, &right, tolerance))
}

pub fn compare_floats(
    left: &[Option<f64>],
    right: &[Option<f64>],
    tolerance: Tolerance,
) -> MatchVector {
    left.iter()
        .zip(right)
        .map(|pair| match pair {
            (None, None) => true,
            (Some(a), Some(b)) => is_close(*a, *b, tolerance),
            _ => false,
        })
        .collect()
}

/// `|a - b| <= abs + rel * |b|`; infinities only match themselves.
pub fn is_close(a: f64, b: f64, tolerance: Tolerance) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= tolerance.abs + tolerance.rel * b.abs()
}

fn native_numbers(column: &Column) -> Result<Vec<Option<f64>>, CompareError> {
    let kind = column.kind();
    if !matches!(kind, StorageKind::Numeric | StorageKind::Boolean) {
        let position = column
            .iter()
            .position(|value| !value.is_null() && native_number(value).is_none())
            .unwrap_or(0);
        return Err(CompareError::TypeMismatch { kind, position });
    }
    column
        .iter()
        .enumerate()
        .map(|(position, value)| {
            if value.is_null() {
                return Ok(None);
            }
            native_number(value)
                .map(Some)
                .ok_or(CompareError::TypeMismatch { kind, position })
        })
        .collect()
}

fn native_number(value: &Value) -> Option<f64> {
    match value {
        Value::Int(int) => Some(*int as f64),
        Value::Float(float) => Some(*float),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{Tolerance, compare, is_close};
    use crate::core::error::CompareError;
    use crate::core::value::{Column, StorageKind, Value};

    fn numbers(values: &[Option<f64>]) -> Column {
        values.iter().copied().collect()
    }

    #[test]
    fn absolute_tolerance_table() {
        let a = numbers(&[Some(1.0), Some(2.0), Some(3.0), Some(4.0), None, None]);
        let b = numbers(&[Some(1.0), Some(2.1), Some(4.0), None, Some(4.0), None]);
        let matches = compare(&a, &b, Tolerance::new(0.0, 0.2)).expect("numeric");
        assert_eq!(
            matches.into_inner(),
            vec![true, true, false, false, false, true]
        );
    }

    #[test]
    fn relative_tolerance_scales_with_second_operand() {
        assert!(is_close(2.0, 2.1, Tolerance::new(0.2, 0.0)));
        assert!(!is_close(3.0, 4.0, Tolerance::new(0.2, 0.0)));
        // |1.0 - 1.2| is within 17% of 1.2 but not of 1.0.
        assert!(is_close(1.0, 1.2, Tolerance::new(0.17, 0.0)));
        assert!(!is_close(1.2, 1.0, Tolerance::new(0.17, 0.0)));
    }

    #[test]
    fn infinities_match_only_same_sign() {
        let tol = Tolerance::new(0.5, 1e9);
        assert!(is_close(f64::INFINITY, f64::INFINITY, tol));
        assert!(is_close(f64::NEG_INFINITY, f64::NEG_INFINITY, tol));
        assert!(!is_close(f64::INFINITY, f64::NEG_INFINITY, tol));
        assert!(!is_close(f64::INFINITY, 1e300, tol));
    }

    #[test]
    fn booleans_read_as_numbers() {
        let a: Column = [true, false].into_iter().collect();
        let b: Column = [true, true].into_iter().collect();
        let matches = compare(&a, &b, Tolerance::default()).expect("boolean");
        assert_eq!(matches.into_inner(), vec![true, false]);
    }

    #[test]
    fn object_columns_are_type_mismatches() {
        let a = Column::new(vec![Value::Int(1), Value::from("x")]);
        let b = numbers(&[Some(1.0), Some(2.0)]);
        let err = compare(&a, &b, Tolerance::default()).expect_err("should fail");
        assert_eq!(
            err,
            CompareError::TypeMismatch {
                kind: StorageKind::Mixed,
                position: 1
            }
        );
    }

    #[test]
    fn unequal_lengths_are_misaligned() {
        let err = compare(&numbers(&[Some(1.0)]), &numbers(&[]), Tolerance::default())
            .expect_err("should fail");
        assert_eq!(err, CompareError::Misaligned { left: 1, right: 0 });
    }
}
