//! 給与明細の計算ルール
//!
//! 作業員設定の照合（呼び出し側）と計算（このモジュール）を分離し、
//! スプレッドシートなしで業務ルールを検証できるようにする。

use crate::error::Error;
use crate::parser::{parse_duration_hours, parse_number};
use crate::types::{NonAttendanceEntry, PayType, Worker, WorkerConfig};
use thiserror::Error as ThisError;

/// 勤怠表から読む列の意味
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttendanceField {
    WorkerId,
    WorkDays,
    RegularHours,
    OvertimeHours,
    AbsenceHours,
    SickDays,
    VacationDays,
}

impl AttendanceField {
    pub const ALL: [AttendanceField; 7] = [
        AttendanceField::WorkerId,
        AttendanceField::WorkDays,
        AttendanceField::RegularHours,
        AttendanceField::OvertimeHours,
        AttendanceField::AbsenceHours,
        AttendanceField::SickDays,
        AttendanceField::VacationDays,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceField::WorkerId => "worker_id",
            AttendanceField::WorkDays => "work_days",
            AttendanceField::RegularHours => "regular_hours",
            AttendanceField::OvertimeHours => "overtime_hours",
            AttendanceField::AbsenceHours => "absence_hours",
            AttendanceField::SickDays => "sick_days",
            AttendanceField::VacationDays => "vacation_days",
        }
    }
}

impl std::fmt::Display for AttendanceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 勤怠表1行分のセル文字列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAttendanceRow {
    pub worker_id: String,
    pub work_days: String,
    pub regular_hours: String,
    pub overtime_hours: String,
    pub absence_hours: String,
    pub sick_days: String,
    pub vacation_days: String,
}

/// どの列のパースに失敗したか
#[derive(ThisError, Debug)]
#[error("{field}: {source}")]
pub struct FieldParseError {
    pub field: AttendanceField,
    #[source]
    pub source: Error,
}

fn duration(field: AttendanceField, value: &str) -> Result<f64, FieldParseError> {
    parse_duration_hours(value).map_err(|source| FieldParseError { field, source })
}

fn number(field: AttendanceField, value: &str) -> Result<f64, FieldParseError> {
    parse_number(value).map_err(|source| FieldParseError { field, source })
}

/// 勤怠行と作業員設定から給与明細を作る
///
/// 欠勤時間は月給者のみ。時給・日給の作業員は欠勤列を読まず0とする。
pub fn merge_attendance(
    config: &WorkerConfig,
    row: &RawAttendanceRow,
) -> Result<Worker, FieldParseError> {
    let regular_hours = duration(AttendanceField::RegularHours, &row.regular_hours)?
        + config.regular_hours_adjustment;
    let overtime_hours = duration(AttendanceField::OvertimeHours, &row.overtime_hours)?
        + config.overtime_hours_adjustment;
    let work_days = number(AttendanceField::WorkDays, &row.work_days)?;
    let sick_days = number(AttendanceField::SickDays, &row.sick_days)?;
    let vacation_days = number(AttendanceField::VacationDays, &row.vacation_days)?
        + config.vacation_days_adjustment;
    let absence_hours = match config.pay_type {
        PayType::Monthly => duration(AttendanceField::AbsenceHours, &row.absence_hours)?,
        PayType::Hourly | PayType::Daily => 0.0,
    };

    Ok(Worker {
        id: config.id.clone(),
        name: config.name.clone(),
        pay_type: config.pay_type,
        daily_hours: config.daily_hours,
        regular_hours,
        overtime_hours,
        total_hours: regular_hours + overtime_hours,
        work_days,
        sick_days,
        vacation_days,
        absence_hours,
        hourly_rate: config.hourly_rate,
        overtime_rate: config.overtime_rate,
        monthly_salary: config.monthly_salary,
        transport_allowance: config.transport_allowance,
        holiday_days: config.holiday_days,
        holiday_present_days: config.holiday_present_days,
        ..Default::default()
    })
}

/// 打刻なし作業員の明細を作る
///
/// 月給・交通費・通常時間（日当時間×出勤日数）は給与形態に関係なく設定から補う。
/// 名前・給与形態はエントリにない場合のみ設定の値を使う。
pub fn merge_non_attendance(config: &WorkerConfig, entry: &NonAttendanceEntry) -> Worker {
    let regular_hours = config.daily_hours * entry.work_days;

    Worker {
        id: config.id.clone(),
        name: entry.name.clone().unwrap_or_else(|| config.name.clone()),
        pay_type: entry.pay_type.unwrap_or(config.pay_type),
        daily_hours: config.daily_hours,
        regular_hours,
        overtime_hours: entry.overtime_hours,
        total_hours: regular_hours + entry.overtime_hours,
        work_days: entry.work_days,
        sick_days: entry.sick_days,
        vacation_days: entry.vacation_days,
        absence_hours: entry.absence_hours,
        hourly_rate: entry.hourly_rate,
        overtime_rate: entry.overtime_rate,
        monthly_salary: config.monthly_salary,
        transport_allowance: config.transport_allowance,
        holiday_days: entry.holiday_days,
        holiday_present_days: entry.holiday_present_days,
        ..Default::default()
    }
}
