//! 集計（勤怠表 × 作業員設定 × 打刻なしリスト）の統合テスト

mod common;

use common::{
    standard_rows, window, Fixture, NumericRow, Row, NON_ATTENDANCE_JSON, WORKERS_JSON,
};
use payroll_common::PayType;
use payroll_report::ingest::ColumnSchema;
use payroll_report::{AttendanceReport, ReportError};

fn build(fixture: &Fixture, row_count: usize) -> Result<AttendanceReport, ReportError> {
    AttendanceReport::build_with(
        fixture.sources.clone(),
        &ColumnSchema::default(),
        window(row_count),
    )
}

/// 仕様例: 時給 50 / 残業 75、通常 8:00・残業 1:30・出勤 22日
#[test]
fn test_hourly_worker_scenario() {
    let fixture = Fixture::new(&[Row::new("W1", "8:00", "1:30", "22")]);
    let report = build(&fixture, 1).expect("集計に失敗");

    let worker = &report.workers()[0];
    assert_eq!(worker.id, "W1");
    assert_eq!(worker.name, "Worker One");
    assert_eq!(worker.pay_type, PayType::Hourly);
    assert_eq!(worker.regular_hours, 8.0);
    assert_eq!(worker.overtime_hours, 1.5);
    assert_eq!(worker.work_days, 22.0);
    assert_eq!(worker.hourly_rate, 50.0);
    assert_eq!(worker.overtime_rate, 75.0);
    assert_eq!(worker.transport_allowance, 200.0);
    assert_eq!(worker.absence_hours, 0.0);
}

/// 件数 = 勤怠行数 + 打刻なし件数、順序は勤怠（行順）→ 打刻なし（リスト順）
#[test]
fn test_worker_order_and_count() {
    let fixture = Fixture::new(&standard_rows());
    let report = build(&fixture, 3).expect("集計に失敗");

    let ids: Vec<&str> = report.workers().iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["W1", "W2", "W3", "M1", "W3"]);
    assert_eq!(report.len(), 5);
}

#[test]
fn test_adjustments_applied() {
    let fixture = Fixture::new(&standard_rows());
    let report = build(&fixture, 3).unwrap();

    let daily = &report.workers()[1];
    assert_eq!(daily.pay_type, PayType::Daily);
    assert_eq!(daily.regular_hours, 182.5);
    assert_eq!(daily.overtime_hours, 4.0);
    assert_eq!(daily.vacation_days, 1.0);
}

#[test]
fn test_absence_hours_only_for_monthly() {
    let fixture = Fixture::new(&standard_rows());
    let report = build(&fixture, 3).unwrap();

    // 日給: 欠勤列に値があっても0
    assert_eq!(report.workers()[1].absence_hours, 0.0);
    // 月給: 欠勤列の値
    assert_eq!(report.workers()[2].pay_type, PayType::Monthly);
    assert_eq!(report.workers()[2].absence_hours, 3.5);
}

#[test]
fn test_legacy_config_keys_carry_through() {
    let fixture = Fixture::new(&standard_rows());
    let report = build(&fixture, 3).unwrap();

    let monthly = &report.workers()[2];
    assert_eq!(monthly.monthly_salary, 9000.0);
    assert_eq!(monthly.transport_allowance, 300.0);
    assert_eq!(monthly.holiday_days, 1.0);
}

#[test]
fn test_non_attendance_backfill() {
    let fixture = Fixture::new(&standard_rows());
    let report = build(&fixture, 3).unwrap();

    let office = &report.workers()[3];
    assert_eq!(office.name, "Office");
    assert_eq!(office.pay_type, PayType::Monthly);
    assert_eq!(office.regular_hours, 170.0);
    assert_eq!(office.monthly_salary, 12000.0);
    assert_eq!(office.transport_allowance, 400.0);

    let manual = &report.workers()[4];
    assert_eq!(manual.name, "Worker Three (manual)");
    assert_eq!(manual.regular_hours, 16.0);
    assert_eq!(manual.sick_days, 1.0);
}

#[test]
fn test_unknown_worker_in_attendance() {
    let fixture = Fixture::new(&[
        Row::new("W1", "8:00", "0", "1"),
        Row::new("W9", "8:00", "0", "1"),
    ]);

    match build(&fixture, 2) {
        Err(ReportError::UnknownWorker { worker_id, row, .. }) => {
            assert_eq!(worker_id, "W9");
            assert_eq!(row, Some(4));
        }
        other => panic!("UnknownWorkerになるべき: {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn test_unknown_worker_in_non_attendance() {
    let fixture = Fixture::with_json(
        &[Row::new("W1", "8:00", "0", "1")],
        WORKERS_JSON,
        r#"[{"id": "M1", "work_days": 1}, {"id": "GHOST", "work_days": 3}]"#,
    );

    match build(&fixture, 1) {
        Err(ReportError::UnknownWorker { worker_id, row, path }) => {
            assert_eq!(worker_id, "GHOST");
            assert_eq!(row, Some(2));
            assert_eq!(path, fixture.sources.non_attendance);
        }
        other => panic!("UnknownWorkerになるべき: {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn test_bad_cell_is_parse_error() {
    let fixture = Fixture::new(&[Row::new("W1", "8:00", "1:xx", "22")]);

    match build(&fixture, 1) {
        Err(ReportError::Parse { row, field, .. }) => {
            assert_eq!(row, 3);
            assert_eq!(field, "overtime_hours");
        }
        other => panic!("Parseエラーになるべき: {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn test_bad_absence_ignored_for_hourly() {
    let fixture = Fixture::new(&[Row::new("W1", "8:00", "0", "22").absence("n/a")]);
    let report = build(&fixture, 1).expect("時給者の欠勤列は読まない");
    assert_eq!(report.workers()[0].absence_hours, 0.0);
}

#[test]
fn test_window_beyond_sheet_is_malformed() {
    let fixture = Fixture::new(&standard_rows());

    match build(&fixture, 5) {
        Err(ReportError::MalformedSource { path, message }) => {
            assert_eq!(path, fixture.sources.attendance);
            assert!(message.contains("6行目"), "{}", message);
        }
        other => panic!("MalformedSourceになるべき: {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn test_missing_attendance_is_source_unavailable() {
    let mut fixture = Fixture::new(&standard_rows());
    fixture.sources.attendance = fixture.path("nope.xlsx");

    assert!(matches!(
        build(&fixture, 3),
        Err(ReportError::SourceUnavailable { .. })
    ));
}

#[test]
fn test_attendance_not_a_workbook_is_malformed() {
    let mut fixture = Fixture::new(&standard_rows());
    let bogus = fixture.path("bogus.xlsx");
    std::fs::write(&bogus, b"not a zip file").unwrap();
    fixture.sources.attendance = bogus;

    assert!(matches!(
        build(&fixture, 3),
        Err(ReportError::MalformedSource { .. })
    ));
}

#[test]
fn test_missing_non_attendance_is_source_unavailable() {
    let mut fixture = Fixture::new(&standard_rows());
    fixture.sources.non_attendance = fixture.path("nope.json");

    assert!(matches!(
        build(&fixture, 3),
        Err(ReportError::SourceUnavailable { .. })
    ));
}

#[test]
fn test_bad_non_attendance_json_is_malformed() {
    let fixture = Fixture::with_json(&standard_rows(), WORKERS_JSON, r#"{"id": "M1"}"#);

    assert!(matches!(
        build(&fixture, 3),
        Err(ReportError::MalformedSource { .. })
    ));
}

#[test]
fn test_non_attendance_entry_without_work_days_is_malformed() {
    let fixture = Fixture::with_json(&standard_rows(), WORKERS_JSON, r#"[{"id": "M1"}]"#);

    match build(&fixture, 3) {
        Err(ReportError::MalformedSource { path, message }) => {
            assert_eq!(path, fixture.sources.non_attendance);
            assert!(message.contains("work_days"), "{}", message);
        }
        other => panic!("MalformedSourceになるべき: {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn test_non_attendance_entry_without_id_is_malformed() {
    let fixture = Fixture::with_json(
        &standard_rows(),
        WORKERS_JSON,
        r#"[{"worker": "M1", "work_days": 3}]"#,
    );

    match build(&fixture, 3) {
        Err(ReportError::MalformedSource { path, message }) => {
            assert_eq!(path, fixture.sources.non_attendance);
            assert!(message.contains("id"), "{}", message);
        }
        other => panic!("MalformedSourceになるべき: {:?}", other.map(|r| r.len())),
    }
}

/// 時間が時刻書式の数値、日数が数値のセルでも同じ結果になる
#[test]
fn test_numeric_time_cells() {
    let mut monthly = NumericRow::new("W3", 160.0, 0.0, 21.0);
    monthly.absence_hours = 3.5;
    monthly.sick_days = 1.0;
    let fixture = Fixture::numeric(&[
        NumericRow::new("W1", 8.0, 1.5, 22.0),
        NumericRow::new("W2", 180.5, 4.0, 20.0),
        monthly,
    ]);
    let report = build(&fixture, 3).expect("数値セルの勤怠表を読めない");

    let hourly = &report.workers()[0];
    assert_eq!(hourly.regular_hours, 8.0);
    assert_eq!(hourly.overtime_hours, 1.5);
    assert_eq!(hourly.work_days, 22.0);

    // 180:30:00 + 調整 2
    let daily = &report.workers()[1];
    assert_eq!(daily.regular_hours, 182.5);
    assert_eq!(daily.overtime_hours, 4.0);

    let monthly = &report.workers()[2];
    assert_eq!(monthly.absence_hours, 3.5);
    assert_eq!(monthly.sick_days, 1.0);
    assert_eq!(monthly.work_days, 21.0);
}

#[test]
fn test_bad_workers_json_is_config_load_error() {
    let fixture = Fixture::with_json(
        &standard_rows(),
        r#"{"W1": {"pay_type": "weekly"}}"#,
        NON_ATTENDANCE_JSON,
    );

    assert!(matches!(
        build(&fixture, 3),
        Err(ReportError::ConfigLoad { .. })
    ));
}

#[test]
fn test_build_with_settings() {
    let fixture = Fixture::new(&standard_rows());
    let mut config = payroll_report::config::Config::default();
    config.window.row_count = 3;

    let report = AttendanceReport::build(fixture.sources.clone(), &config).unwrap();
    assert_eq!(report.len(), 5);
    assert_eq!(report.sources(), &fixture.sources);
}
