//! 勤怠セル値パーサー
//!
//! 勤怠表のセル文字列（`"H:MM:SS"`形式の時間、数値文字列）を
//! 時間数・日数のf64に変換する。
//!
//! 不正な値は0に丸めず、必ず `Error::Parse` を返す
//! （給与額が気付かれないまま狂うのを防ぐため）。

use crate::error::{Error, Result};
use regex::Regex;

lazy_static::lazy_static! {
    static ref HOURS_RE: Regex = Regex::new(r"^[+-]?\d+$").unwrap();
    static ref MINUTES_SECONDS_RE: Regex = Regex::new(r"^\d+$").unwrap();
    static ref ISO_DURATION_RE: Regex =
        Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+(?:\.\d+)?)S)?)?$").unwrap();
}

/// 時間文字列を時間数に変換
///
/// `"H"`, `"H:MM"`, `"H:MM:SS"` を受け付け、`H + MM/60 + SS/3600` を返す。
/// 省略された分・秒は0とみなす。
///
/// # Examples
/// ```
/// use payroll_common::parse_duration_hours;
///
/// assert_eq!(parse_duration_hours("2:30:00").unwrap(), 2.5);
/// assert_eq!(parse_duration_hours("5").unwrap(), 5.0);
/// assert_eq!(parse_duration_hours("1:15").unwrap(), 1.25);
/// ```
pub fn parse_duration_hours(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::parse(input, "time string is empty"));
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() > 3 {
        return Err(Error::parse(input, "expected H, H:MM or H:MM:SS"));
    }

    if !HOURS_RE.is_match(parts[0]) {
        return Err(Error::parse(input, "hours is not an integer"));
    }
    let hours: i64 = parts[0]
        .parse()
        .map_err(|e| Error::parse(input, format!("hours: {}", e)))?;

    let minutes = component(input, parts.get(1).copied(), "minutes")?;
    let seconds = component(input, parts.get(2).copied(), "seconds")?;

    Ok(hours as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0)
}

/// 分・秒の成分（省略時は0）
fn component(input: &str, part: Option<&str>, name: &str) -> Result<u32> {
    let Some(part) = part else {
        return Ok(0);
    };
    if !MINUTES_SECONDS_RE.is_match(part) {
        return Err(Error::parse(input, format!("{} is not an integer", name)));
    }
    part.parse()
        .map_err(|e| Error::parse(input, format!("{}: {}", name, e)))
}

/// 数値文字列をf64に変換
///
/// 前後の空白は無視する。`NaN` や `inf` は給与計算に使えないためエラー。
pub fn parse_number(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::parse(input, "number is empty"));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|e| Error::parse(input, format!("{}", e)))?;

    if !value.is_finite() {
        return Err(Error::parse(input, "number is not finite"));
    }

    Ok(value)
}

/// ISO 8601 の期間（`PT08H30M00S` など）を秒数に変換
///
/// ODSの時刻セルはこの形式で読まれる。年・月・負の期間は受け付けない。
///
/// # Examples
/// ```
/// use payroll_common::parse_iso_duration_seconds;
///
/// assert_eq!(parse_iso_duration_seconds("PT08H30M00S").unwrap(), 30600.0);
/// assert_eq!(parse_iso_duration_seconds("P1DT2H").unwrap(), 93600.0);
/// ```
pub fn parse_iso_duration_seconds(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let caps = ISO_DURATION_RE
        .captures(trimmed)
        .ok_or_else(|| Error::parse(input, "expected ISO 8601 duration like PT8H30M0S"))?;

    if (1..=4).all(|i| caps.get(i).is_none()) {
        return Err(Error::parse(input, "duration has no components"));
    }

    let value = |index: usize| -> Result<f64> {
        match caps.get(index) {
            Some(m) => m
                .as_str()
                .parse::<f64>()
                .map_err(|e| Error::parse(input, format!("{}", e))),
            None => Ok(0.0),
        }
    };

    Ok(value(1)? * 86400.0 + value(2)? * 3600.0 + value(3)? * 60.0 + value(4)?)
}
