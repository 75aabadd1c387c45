use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_DISPLAY: &str = "%Y-%m-%d %H:%M:%S";
const MS_PER_DAY: f64 = 86_400_000.0;
/// Serial of 1900-03-01; below it the 1900 system counts the fictitious 1900-02-29.
const FIRST_SERIAL_AFTER_LEAP_BUG: f64 = 61.0;
/// Days between the 1900 and 1904 date systems.
pub const EPOCH_1904_OFFSET: f64 = 1462.0;

/// A date or time held as its serial number in the 1900 date system, the way xlsx stores it.
///
/// The serial is the source of truth, so a value read from a file is written back bit for bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SerialDateTime(f64);

impl SerialDateTime {
    pub fn from_serial(serial: f64) -> Self {
        Self(serial)
    }

    /// Serial from the 1904 date system, shifted into the 1900 system.
    pub fn from_1904_serial(serial: f64) -> Self {
        Self(serial + EPOCH_1904_OFFSET)
    }

    pub fn from_naive(value: NaiveDateTime) -> Self {
        let after_leap_bug = value.date() >= leap_bug_end();
        let epoch = serial_epoch(after_leap_bug);
        let millis = (value - epoch).num_milliseconds();
        Self(millis as f64 / MS_PER_DAY)
    }

    pub fn serial(self) -> f64 {
        self.0
    }

    /// Calendar reading of the serial, to the millisecond.
    pub fn to_naive(self) -> Option<NaiveDateTime> {
        if !self.0.is_finite() {
            return None;
        }
        let epoch = serial_epoch(self.0 >= FIRST_SERIAL_AFTER_LEAP_BUG);
        let millis = (self.0 * MS_PER_DAY).round();
        if millis.abs() > i64::MAX as f64 / 2.0 {
            return None;
        }
        epoch.checked_add_signed(Duration::milliseconds(millis as i64))
    }

    /// Serials below one day carry no date part.
    pub fn is_time_only(self) -> bool {
        self.0 >= 0.0 && self.0 < 1.0
    }

    pub fn has_time(self) -> bool {
        (self.0.fract() * MS_PER_DAY).round() != 0.0
    }
}

fn leap_bug_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 3, 1).unwrap_or(NaiveDate::MIN)
}

fn serial_epoch(after_leap_bug: bool) -> NaiveDateTime {
    let day = if after_leap_bug { 30 } else { 31 };
    NaiveDate::from_ymd_opt(1899, 12, day)
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
}

/// A scalar cell value as it travels between workbook files and tables.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(SerialDateTime),
}

impl CellValue {
    /// Empty text collapses to `Empty` so both spellings of "no value" compare equal.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Parses ISO 8601 timestamps (`2024-01-31T08:00:00`, `2024-01-31`).
    pub fn from_iso(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .map(CellValue::from)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(v) => f.write_str(v),
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Bool(v) => write!(f, "{v}"),
            CellValue::DateTime(v) => match v.to_naive() {
                Some(dt) => write!(f, "{}", dt.format(DATETIME_DISPLAY)),
                None => write!(f, "{}", v.serial()),
            },
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::DateTime(SerialDateTime::from_naive(value))
    }
}
