//! 月次勤怠レポート（集計の起点）
//!
//! 作業員設定 → 勤怠表 → 打刻なしリスト の順に読み込み、
//! 給与明細のリストを作る。途中のエラーはその場で中断し、部分的な結果は返さない。

use crate::config::{Config, RowWindow};
use crate::error::Result;
use crate::ingest::{attendance, non_attendance, ColumnSchema};
use crate::worker_store::WorkerStore;
use payroll_common::Worker;
use std::path::PathBuf;
use tracing::info;

/// 入力ファイル一式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSources {
    /// 勤怠Excel
    pub attendance: PathBuf,
    /// 打刻なし作業員JSON
    pub non_attendance: PathBuf,
    /// 作業員設定JSON
    pub workers: PathBuf,
}

#[derive(Debug, Clone)]
pub struct AttendanceReport {
    sources: ReportSources,
    workers: Vec<Worker>,
}

impl AttendanceReport {
    /// 設定の列スキーマ・読み取り範囲で集計する
    pub fn build(sources: ReportSources, config: &Config) -> Result<Self> {
        let schema = ColumnSchema::resolve(&config.columns)?;
        Self::build_with(sources, &schema, config.window)
    }

    pub fn build_with(sources: ReportSources, schema: &ColumnSchema, window: RowWindow) -> Result<Self> {
        // 1. 作業員設定
        let store = WorkerStore::load(&sources.workers)?;

        // 2. 勤怠表（行順）
        let mut workers = attendance::ingest(&sources.attendance, schema, window, &store)?;
        let attendance_count = workers.len();

        // 3. 打刻なし作業員（勤怠の後ろにリスト順で追加）
        workers.extend(non_attendance::ingest(&sources.non_attendance, &store)?);

        info!(
            attendance = attendance_count,
            non_attendance = workers.len() - attendance_count,
            "給与明細を集計しました"
        );

        Ok(Self { sources, workers })
    }

    /// 追加順の給与明細
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn sources(&self) -> &ReportSources {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}
