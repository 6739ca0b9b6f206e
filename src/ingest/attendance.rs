//! 勤怠表の取り込み
//!
//! 勤怠Excelの最初のシートから固定範囲の行を読み、
//! 作業員設定と照合して給与明細を作る。

use super::schema::ColumnSchema;
use crate::config::RowWindow;
use crate::error::{ReportError, Result};
use crate::worker_store::WorkerStore;
use calamine::{open_workbook_auto, Data, Range, Reader};
use payroll_common::{
    merge_attendance, parse_iso_duration_seconds, AttendanceField, RawAttendanceRow, Worker,
};
use std::path::Path;
use tracing::{debug, info};

/// 勤怠表の1行（行番号は0始まり）
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceLine {
    pub row: usize,
    pub raw: RawAttendanceRow,
}

/// 勤怠表から読み取り範囲の行を取り出す
pub fn read_rows(path: &Path, schema: &ColumnSchema, window: RowWindow) -> Result<Vec<AttendanceLine>> {
    let range = open_first_sheet(path)?;

    let last_row = range.end().map(|(row, _)| row as usize);
    let mut lines = Vec::with_capacity(window.row_count);

    for row in window.rows() {
        if !last_row.is_some_and(|last| row <= last) {
            return Err(ReportError::MalformedSource {
                path: path.to_path_buf(),
                message: format!(
                    "{}行目がありません（読み取り範囲: {}行目から{}行）",
                    row + 1,
                    window.start_row + 1,
                    window.row_count
                ),
            });
        }

        let text = |field: AttendanceField| {
            cell_text(range.get_value((row as u32, schema.index(field) as u32)))
        };
        let raw = RawAttendanceRow {
            worker_id: text(AttendanceField::WorkerId),
            work_days: text(AttendanceField::WorkDays),
            regular_hours: text(AttendanceField::RegularHours),
            overtime_hours: text(AttendanceField::OvertimeHours),
            absence_hours: text(AttendanceField::AbsenceHours),
            sick_days: text(AttendanceField::SickDays),
            vacation_days: text(AttendanceField::VacationDays),
        };
        lines.push(AttendanceLine { row, raw });
    }

    Ok(lines)
}

/// 勤怠表を取り込み、行順に給与明細を返す
pub fn ingest(
    path: &Path,
    schema: &ColumnSchema,
    window: RowWindow,
    store: &WorkerStore,
) -> Result<Vec<Worker>> {
    let lines = read_rows(path, schema, window)?;
    let mut workers = Vec::with_capacity(lines.len());

    for line in lines {
        let worker_id = line.raw.worker_id.as_str();
        let config = store.get(worker_id).ok_or_else(|| ReportError::UnknownWorker {
            worker_id: worker_id.to_string(),
            path: path.to_path_buf(),
            row: Some(line.row + 1),
        })?;

        let worker = merge_attendance(config, &line.raw).map_err(|e| ReportError::Parse {
            path: path.to_path_buf(),
            row: line.row + 1,
            field: e.field.to_string(),
            source: e.source,
        })?;

        debug!(row = line.row + 1, worker_id = %worker.id, pay_type = %worker.pay_type, "勤怠行を取り込み");
        workers.push(worker);
    }

    Ok(workers)
}

fn open_first_sheet(path: &Path) -> Result<Range<Data>> {
    // 開けるかどうかを先に確認（存在しない・権限なしを形式エラーと区別する）
    std::fs::File::open(path).map_err(|e| ReportError::SourceUnavailable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let malformed = |message: String| ReportError::MalformedSource {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| malformed(e.to_string()))?;
    let sheet_name = workbook.sheet_names().first().cloned().unwrap_or_default();
    info!(sheet = %sheet_name, path = %path.display(), "勤怠シートを処理中");

    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| malformed("シートがありません".into()))?
        .map_err(|e| malformed(e.to_string()))
}

/// セル値を文字列に変換
///
/// 時刻書式のセル（1日に対する割合）とODSの期間セル（`PT8H30M0S`）は
/// `H:MM:SS` にする。
fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.trim().to_string(),
        Some(Data::Float(f)) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Bool(b)) => b.to_string(),
        Some(Data::DateTime(dt)) => day_fraction_to_duration(dt.as_f64()),
        Some(Data::DurationIso(s)) => match parse_iso_duration_seconds(s) {
            Ok(seconds) => seconds_to_duration(seconds),
            Err(_) => s.clone(),
        },
        Some(Data::DateTimeIso(s)) => s.clone(),
        Some(Data::Error(e)) => format!("#ERROR: {:?}", e),
    }
}

fn day_fraction_to_duration(days: f64) -> String {
    seconds_to_duration(days * 24.0 * 3600.0)
}

fn seconds_to_duration(seconds: f64) -> String {
    let total_seconds = seconds.round() as i64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}
