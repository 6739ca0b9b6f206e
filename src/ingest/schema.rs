//! 勤怠表の列スキーマ
//!
//! 設定の列名（"D" など）を読み込み時に一度だけ列番号へ解決する。

use crate::config::AttendanceColumns;
use crate::error::{ReportError, Result};
use payroll_common::layout::column_index;
use payroll_common::AttendanceField;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    indices: HashMap<AttendanceField, u16>,
}

impl ColumnSchema {
    pub fn resolve(columns: &AttendanceColumns) -> Result<Self> {
        let mut indices = HashMap::new();
        for field in AttendanceField::ALL {
            let name = Self::column_name(columns, field);
            let index = column_index(name).ok_or_else(|| {
                ReportError::Config(format!("列名が不正です: {} = '{}'", field, name))
            })?;
            indices.insert(field, index);
        }
        Ok(Self { indices })
    }

    fn column_name(columns: &AttendanceColumns, field: AttendanceField) -> &str {
        match field {
            AttendanceField::WorkerId => &columns.worker_id,
            AttendanceField::WorkDays => &columns.work_days,
            AttendanceField::RegularHours => &columns.regular_hours,
            AttendanceField::OvertimeHours => &columns.overtime_hours,
            AttendanceField::AbsenceHours => &columns.absence_hours,
            AttendanceField::SickDays => &columns.sick_days,
            AttendanceField::VacationDays => &columns.vacation_days,
        }
    }

    /// 列番号（0始まり）
    pub fn index(&self, field: AttendanceField) -> u16 {
        // resolve() で全フィールドを登録済み
        self.indices.get(&field).copied().unwrap_or_default()
    }
}

impl Default for ColumnSchema {
    fn default() -> Self {
        let columns = AttendanceColumns::default();
        let indices = AttendanceField::ALL
            .into_iter()
            .map(|field| {
                let index = column_index(Self::column_name(&columns, field)).unwrap_or_default();
                (field, index)
            })
            .collect();
        Self { indices }
    }
}
