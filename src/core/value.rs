//! Purpose: Cell values, per-column storage kinds, and the `Column` container.
//! Exports: `Value`, `StorageKind`, `Column`.
//! Role: Input model for every comparison strategy; kind is inferred once per column.
//! Invariants: NaN floats are missing values, exactly like `Value::Null`.
//! Invariants: A column's kind never changes after construction.
use crate::core::error::{Error, ErrorKind};
use rust_decimal::Decimal;
use std::fmt;
use time::{Date, PrimitiveDateTime};

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    Text(String),
    DateTime(PrimitiveDateTime),
}

impl Value {
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(value) => value.is_nan(),
            _ => false,
        }
    }

    /// Kind this value would give a column made only of values like it.
    /// `None` for missing values.
    pub fn storage_kind(&self) -> Option<StorageKind> {
        if self.is_null() {
            return None;
        }
        Some(match self {
            Value::Null => return None,
            Value::Bool(_) => StorageKind::Boolean,
            Value::Int(_) | Value::Float(_) => StorageKind::Numeric,
            Value::Decimal(_) => StorageKind::Decimal,
            Value::Text(_) => StorageKind::Text,
            Value::DateTime(_) => StorageKind::DateTime,
        })
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<PrimitiveDateTime> for Value {
    fn from(value: PrimitiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl From<Date> for Value {
    fn from(value: Date) -> Self {
        Value::DateTime(value.midnight())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StorageKind {
    Numeric,
    Decimal,
    Boolean,
    Text,
    DateTime,
    Mixed,
}

impl StorageKind {
    /// Generic/object storage: anything that is not a native numeric,
    /// boolean, or datetime array.
    pub fn is_object(self) -> bool {
        matches!(
            self,
            StorageKind::Text | StorageKind::Decimal | StorageKind::Mixed
        )
    }

    fn accepts(self, value_kind: StorageKind) -> bool {
        self == StorageKind::Mixed || self == value_kind
    }

    fn infer<'a>(values: impl IntoIterator<Item = &'a Value>) -> StorageKind {
        let mut inferred = None;
        for kind in values.into_iter().filter_map(Value::storage_kind) {
            match inferred {
                None => inferred = Some(kind),
                Some(seen) if seen == kind => {}
                Some(_) => return StorageKind::Mixed,
            }
        }
        inferred.unwrap_or(StorageKind::Numeric)
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageKind::Numeric => "numeric",
            StorageKind::Decimal => "decimal",
            StorageKind::Boolean => "boolean",
            StorageKind::Text => "text",
            StorageKind::DateTime => "datetime",
            StorageKind::Mixed => "mixed",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    values: Vec<Value>,
    kind: StorageKind,
}

impl Column {
    pub fn new(values: Vec<Value>) -> Self {
        let kind = StorageKind::infer(&values);
        Self { values, kind }
    }

    /// Builds a column with a declared kind, e.g. an all-null text column.
    pub fn with_kind(values: Vec<Value>, kind: StorageKind) -> Result<Self, Error> {
        for (position, value) in values.iter().enumerate() {
            let Some(value_kind) = value.storage_kind() else {
                continue;
            };
            if !kind.accepts(value_kind) {
                return Err(Error::new(ErrorKind::Usage)
                    .with_message(format!("{value_kind} value in {kind} column"))
                    .with_position(position));
            }
        }
        Ok(Self { values, kind })
    }

    /// Builds a column from scalar JSON values; nested arrays and objects
    /// are rejected.
    pub fn from_json(values: &[serde_json::Value]) -> Result<Self, Error> {
        let values = values
            .iter()
            .enumerate()
            .map(|(position, value)| json_to_value(value, position))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(values))
    }

    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Value> {
        self.values.get(position)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }
}

impl<T: Into<Value>> FromIterator<T> for Column {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

fn json_to_value(value: &serde_json::Value, position: usize) -> Result<Value, Error> {
    use serde_json::Value as Json;
    match value {
        Json::Null => Ok(Value::Null),
        Json::Bool(flag) => Ok(Value::Bool(*flag)),
        Json::Number(number) => match number.as_i64() {
            Some(int) => Ok(Value::Int(int)),
            None => number.as_f64().map(Value::Float).ok_or_else(|| {
                Error::new(ErrorKind::Usage)
                    .with_message("number out of range")
                    .with_position(position)
            }),
        },
        Json::String(text) => Ok(Value::Text(text.clone())),
        Json::Array(_) | Json::Object(_) => Err(Error::new(ErrorKind::Usage)
            .with_message("nested JSON values are not column cells")
            .with_position(position)),
    }
}
