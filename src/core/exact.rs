//! Purpose: Elementwise exact equality for columns no numeric strategy can handle.
//! Exports: `compare`, `values_equal`.
//! Role: Last strategy of the fallback chain.
//! Invariants: Null pairs match; numbers compare by value across int/float/bool/decimal.
//! Invariants: Text never equals a number, even when it spells one.
use crate::core::error::CompareError;
use crate::core::matches::MatchVector;
use crate::core::value::{Column, Value};
use rust_decimal::Decimal;

pub fn compare(a: &Column, b: &Column) -> Result<MatchVector, CompareError> {
    CompareError::check_aligned(a.len(), b.len())?;
    Ok(a.iter()
        .zip(b.iter())
        .map(|(left, right)| values_equal(left, right))
        .collect())
}

pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left.is_null(), right.is_null()) {
        (true, true) => return true,
        (true, false) | (false, true) => return false,
        (false, false) => {}
    }
    match (left, right) {
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::DateTime(a), Value::DateTime(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Decimal(a), Value::Decimal(b)) => a == b,
        (Value::Decimal(decimal), other) | (other, Value::Decimal(decimal)) => {
            decimal_equals(*decimal, other)
        }
        _ => match (plain_number(left), plain_number(right)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
    }
}

fn plain_number(value: &Value) -> Option<f64> {
    match value {
        Value::Int(int) => Some(*int as f64),
        Value::Float(float) => Some(*float),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        _ => None,
    }
}

// A float equals a decimal only when its retained expansion is that decimal,
// so 1.0 == 1 but 1.3f64 != 1.3.
fn decimal_equals(decimal: Decimal, other: &Value) -> bool {
    match other {
        Value::Int(int) => Decimal::from(*int) == decimal,
        Value::Bool(flag) => Decimal::from(i64::from(*flag)) == decimal,
        Value::Float(float) => Decimal::from_f64_retain(*float) == Some(decimal),
        _ => false,
    }
}
