//! テスト用フィクスチャ
//!
//! 勤怠Excel（既定の列配置 D/H/K/M/P/U/V、3行目からデータ）と
//! 作業員設定・打刻なしリストのJSONを一時ディレクトリに作る。

#![allow(dead_code)]

use payroll_report::config::RowWindow;
use payroll_report::ReportSources;
use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};

pub const START_ROW: usize = 2;

/// 勤怠表の1行
pub struct Row<'a> {
    pub id: &'a str,
    pub work_days: &'a str,
    pub regular: &'a str,
    pub overtime: &'a str,
    pub absence: &'a str,
    pub sick: &'a str,
    pub vacation: &'a str,
}

impl<'a> Row<'a> {
    pub fn new(id: &'a str, regular: &'a str, overtime: &'a str, work_days: &'a str) -> Self {
        Self {
            id,
            work_days,
            regular,
            overtime,
            absence: "0:00",
            sick: "0",
            vacation: "0",
        }
    }

    pub fn absence(mut self, absence: &'a str) -> Self {
        self.absence = absence;
        self
    }
}

pub fn write_attendance(path: &Path, rows: &[Row]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "דוח נוכחות").unwrap();
    for (col, title) in [(3, "מספר"), (7, "ימים"), (10, "שעות"), (12, "125%")] {
        sheet.write_string(1, col, title).unwrap();
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (START_ROW + i) as u32;
        sheet.write_string(r, 3, row.id).unwrap();
        sheet.write_string(r, 7, row.work_days).unwrap();
        sheet.write_string(r, 10, row.regular).unwrap();
        sheet.write_string(r, 12, row.overtime).unwrap();
        sheet.write_string(r, 15, row.absence).unwrap();
        sheet.write_string(r, 20, row.sick).unwrap();
        sheet.write_string(r, 21, row.vacation).unwrap();
    }

    workbook.save(path).unwrap();
}

/// 数値セルの勤怠行（時間は `[h]:mm:ss` 書式、日数はそのままの数値）
pub struct NumericRow<'a> {
    pub id: &'a str,
    pub work_days: f64,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub absence_hours: f64,
    pub sick_days: f64,
    pub vacation_days: f64,
}

impl<'a> NumericRow<'a> {
    pub fn new(id: &'a str, regular_hours: f64, overtime_hours: f64, work_days: f64) -> Self {
        Self {
            id,
            work_days,
            regular_hours,
            overtime_hours,
            absence_hours: 0.0,
            sick_days: 0.0,
            vacation_days: 0.0,
        }
    }
}

/// 勤怠システムの出力と同じく、時間は1日に対する割合で書く
pub fn write_numeric_attendance(path: &Path, rows: &[NumericRow]) {
    let mut workbook = Workbook::new();
    let duration = Format::new().set_num_format("[h]:mm:ss");
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "דוח נוכחות").unwrap();

    for (i, row) in rows.iter().enumerate() {
        let r = (START_ROW + i) as u32;
        sheet.write_string(r, 3, row.id).unwrap();
        sheet.write_number(r, 7, row.work_days).unwrap();
        sheet.write_number_with_format(r, 10, row.regular_hours / 24.0, &duration).unwrap();
        sheet.write_number_with_format(r, 12, row.overtime_hours / 24.0, &duration).unwrap();
        sheet.write_number_with_format(r, 15, row.absence_hours / 24.0, &duration).unwrap();
        sheet.write_number(r, 20, row.sick_days).unwrap();
        sheet.write_number(r, 21, row.vacation_days).unwrap();
    }

    workbook.save(path).unwrap();
}

/// W1: 時給 / W2: 日給 / W3: 月給 / M1: 月給（打刻なし）
pub const WORKERS_JSON: &str = r#"{
    "W1": {"name": "Worker One", "pay_type": "hourly", "daily_hours": 8,
           "hourly_rate": 50, "overtime_rate": 75, "transport_allowance": 200,
           "regular_hours_adjustment": 0, "overtime_hours_adjustment": 0,
           "vacation_days_adjustment": 0},
    "W2": {"name": "Worker Two", "pay_type": "daily", "daily_hours": 9,
           "hourly_rate": 40, "overtime_rate": 60, "regular_hours_adjustment": 2,
           "vacation_days_adjustment": 1},
    "W3": {"name": "Worker Three", "worker_type": "monthly", "daily_hours": 8,
           "monthly_sal": 9000, "trans_expanses": 300, "holidays": 1},
    "M1": {"name": "Office", "pay_type": "monthly", "daily_hours": 8.5,
           "monthly_salary": 12000, "transport_allowance": 400}
}"#;

pub const NON_ATTENDANCE_JSON: &str = r#"[
    {"id": "M1", "work_days": 20},
    {"id": "W3", "name": "Worker Three (manual)", "work_days": 2, "sick_days": 1}
]"#;

pub struct Fixture {
    pub dir: tempfile::TempDir,
    pub sources: ReportSources,
}

impl Fixture {
    pub fn new(rows: &[Row]) -> Self {
        Self::with_json(rows, WORKERS_JSON, NON_ATTENDANCE_JSON)
    }

    pub fn with_json(rows: &[Row], workers: &str, non_attendance: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let attendance = dir.path().join("attendance.xlsx");
        let workers_path = dir.path().join("workers.json");
        let non_attendance_path = dir.path().join("non_attendance.json");

        write_attendance(&attendance, rows);
        std::fs::write(&workers_path, workers).unwrap();
        std::fs::write(&non_attendance_path, non_attendance).unwrap();

        Self {
            dir,
            sources: ReportSources {
                attendance,
                non_attendance: non_attendance_path,
                workers: workers_path,
            },
        }
    }

    /// 数値セルの勤怠表で作る
    pub fn numeric(rows: &[NumericRow]) -> Self {
        let fixture = Self::with_json(&[], WORKERS_JSON, NON_ATTENDANCE_JSON);
        write_numeric_attendance(&fixture.sources.attendance, rows);
        fixture
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

pub fn window(row_count: usize) -> RowWindow {
    RowWindow {
        start_row: START_ROW,
        row_count,
    }
}

pub fn standard_rows() -> Vec<Row<'static>> {
    vec![
        Row::new("W1", "8:00", "1:30", "22"),
        Row::new("W2", "180:30:00", "4:00", "20").absence("7:00"),
        Row::new("W3", "160", "0", "21").absence("3:30:00"),
    ]
}
