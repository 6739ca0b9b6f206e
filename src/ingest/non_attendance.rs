//! 打刻なし作業員リストの取り込み
//!
//! 勤怠表に行がない作業員（主に月給者）のJSON配列を読み、
//! 作業員設定から月給・交通費・通常時間を補う。

use crate::error::{ReportError, Result};
use crate::worker_store::WorkerStore;
use payroll_common::{merge_non_attendance, NonAttendanceEntry, PayType, Worker};
use std::path::Path;
use tracing::{debug, warn};

/// リストを読み込む（補完前）
pub fn read_entries(path: &Path) -> Result<Vec<NonAttendanceEntry>> {
    let content = std::fs::read_to_string(path).map_err(|e| ReportError::SourceUnavailable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| ReportError::MalformedSource {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// リストを取り込み、入力順に給与明細を返す
pub fn ingest(path: &Path, store: &WorkerStore) -> Result<Vec<Worker>> {
    let entries = read_entries(path)?;
    let mut workers = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let config = store.get(&entry.id).ok_or_else(|| ReportError::UnknownWorker {
            worker_id: entry.id.clone(),
            path: path.to_path_buf(),
            row: Some(index + 1),
        })?;

        // 月給以外の作業員も補完する（給与規定との照合が必要な箇所）
        if config.pay_type != PayType::Monthly {
            warn!(
                worker_id = %entry.id,
                pay_type = %config.pay_type,
                "打刻なしリストに月給以外の作業員があります"
            );
        }

        let worker = merge_non_attendance(config, entry);
        debug!(worker_id = %worker.id, regular_hours = worker.regular_hours, "打刻なし作業員を取り込み");
        workers.push(worker);
    }

    Ok(workers)
}
