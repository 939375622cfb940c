//! Purpose: Compare a string/object column against a datetime column as timestamps.
//! Exports: `applies`, `reconcile`, `parse_timestamp`.
//! Role: Third strategy; chosen only for a {datetime, object} column pair.
//! Invariants: Argument order never changes the result.
//! Invariants: One unparseable candidate value fails the whole column.
use crate::core::error::{CompareError, Error, ErrorKind};
use crate::core::matches::MatchVector;
use crate::core::value::{Column, StorageKind, Value};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

/// True when exactly one side is a datetime column and the other is object storage.
pub fn applies(a: StorageKind, b: StorageKind) -> bool {
    (a == StorageKind::DateTime && b.is_object())
        || (b == StorageKind::DateTime && a.is_object())
}

pub fn reconcile(a: &Column, b: &Column) -> Result<MatchVector, CompareError> {
    CompareError::check_aligned(a.len(), b.len())?;
    let (candidate, reference) = if a.kind() == StorageKind::DateTime {
        (b, a)
    } else {
        (a, b)
    };
    let parsed = candidate
        .iter()
        .enumerate()
        .map(|(position, value)| candidate_timestamp(value, position))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(parsed
        .iter()
        .zip(reference.iter())
        .map(|(parsed, reference)| match (parsed, reference_timestamp(reference)) {
            (None, None) => true,
            (Some(left), Some(right)) => *left == right,
            _ => false,
        })
        .collect())
}

/// Parses a timestamp leniently. Accepted forms, surrounding whitespace ignored:
///
/// - Dates: `YYYY-M-D`, `YYYY/M/D`, `M/D/YYYY` (month and day with or without
///   a leading zero) and compact `YYYYMMDD`.
/// - An optional clock after `T` or a space: `H:MM`, `H:MM:SS` or
///   `H:MM:SS.fraction`.
/// - An optional offset after the clock: `Z`, `+HH:MM`, `+HHMM` or `+HH`
///   (or `-`), with or without a space before it.
///
/// Offset timestamps are normalized to UTC; timestamps without an offset are
/// taken as they are.
pub fn parse_timestamp(text: &str) -> Result<PrimitiveDateTime, Error> {
    let trimmed = text.trim();
    if let Ok(parsed) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        let utc = parsed.to_offset(UtcOffset::UTC);
        return Ok(PrimitiveDateTime::new(utc.date(), utc.time()));
    }

    let (date_part, clock_part) = match trimmed.find(|c: char| c == 'T' || c == ' ') {
        Some(split) => (&trimmed[..split], Some(trimmed[split + 1..].trim_start())),
        None => (trimmed, None),
    };
    let date = parse_date(date_part).map_err(|err| unrecognized(trimmed).with_source(err))?;
    let (time, offset) = match clock_part {
        Some(clock_part) => {
            parse_clock(clock_part).map_err(|err| unrecognized(trimmed).with_source(err))?
        }
        None => (Time::MIDNIGHT, UtcOffset::UTC),
    };
    let utc = PrimitiveDateTime::new(date, time)
        .assume_offset(offset)
        .checked_to_offset(UtcOffset::UTC)
        .ok_or_else(|| unrecognized(trimmed))?;
    Ok(PrimitiveDateTime::new(utc.date(), utc.time()))
}

fn parse_date(text: &str) -> Result<Date, time::error::Parse> {
    Date::parse(
        text,
        format_description!("[year]-[month padding:none]-[day padding:none]"),
    )
    .or_else(|_| {
        Date::parse(
            text,
            format_description!("[year]/[month padding:none]/[day padding:none]"),
        )
    })
    .or_else(|_| {
        Date::parse(
            text,
            format_description!("[month padding:none]/[day padding:none]/[year]"),
        )
    })
    .or_else(|_| Date::parse(text, format_description!("[year][month][day]")))
}

fn parse_clock(text: &str) -> Result<(Time, UtcOffset), time::error::Parse> {
    let (clock, offset) = split_offset(text)?;
    Ok((parse_time(clock)?, offset))
}

fn split_offset(text: &str) -> Result<(&str, UtcOffset), time::error::Parse> {
    if let Some(clock) = text.strip_suffix('Z') {
        return Ok((clock.trim_end(), UtcOffset::UTC));
    }
    match text.rfind(['+', '-']) {
        Some(split) => Ok((text[..split].trim_end(), parse_offset(&text[split..])?)),
        None => Ok((text, UtcOffset::UTC)),
    }
}

fn parse_offset(text: &str) -> Result<UtcOffset, time::error::Parse> {
    UtcOffset::parse(
        text,
        format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
    )
    .or_else(|_| {
        UtcOffset::parse(
            text,
            format_description!("[offset_hour sign:mandatory][offset_minute]"),
        )
    })
    .or_else(|_| UtcOffset::parse(text, format_description!("[offset_hour sign:mandatory]")))
}

fn parse_time(text: &str) -> Result<Time, time::error::Parse> {
    if text.contains('.') {
        return Time::parse(
            text,
            format_description!("[hour padding:none]:[minute]:[second].[subsecond]"),
        );
    }
    if text.matches(':').count() == 1 {
        let padded = format!("{text}:00");
        return Time::parse(
            &padded,
            format_description!("[hour padding:none]:[minute]:[second]"),
        );
    }
    Time::parse(text, format_description!("[hour padding:none]:[minute]:[second]"))
}

fn unrecognized(text: &str) -> Error {
    Error::new(ErrorKind::Usage).with_message(format!("unrecognized timestamp: {text:?}"))
}

fn candidate_timestamp(
    value: &Value,
    position: usize,
) -> Result<Option<PrimitiveDateTime>, CompareError> {
    if value.is_null() {
        return Ok(None);
    }
    match value {
        Value::DateTime(timestamp) => Ok(Some(*timestamp)),
        Value::Text(text) => parse_timestamp(text)
            .map(Some)
            .map_err(|_| CompareError::Unparseable { position }),
        _ => Err(CompareError::Unparseable { position }),
    }
}

fn reference_timestamp(value: &Value) -> Option<PrimitiveDateTime> {
    match value {
        Value::DateTime(timestamp) => Some(*timestamp),
        _ => None,
    }
}
