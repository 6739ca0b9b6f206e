//! 作業員設定の月次リセット
//!
//! 翌月の集計前に、現在の設定をアーカイブへ退避し、
//! 月ごとに入力する値（祝日・ギフト・時間調整）を0に戻す。

use crate::error::{ReportError, Result};
use crate::export::excel::persist_bytes;
use crate::worker_store::WorkerStore;
use chrono::NaiveDateTime;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::info;

/// リセット結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetOutcome {
    /// 退避したファイル
    pub archive_path: PathBuf,
    /// リセットした作業員数
    pub reset_count: usize,
}

/// アーカイブのファイル名（タイムスタンプ付き）
pub fn archive_file_name(timestamp: NaiveDateTime) -> String {
    format!("workers-{}.json", timestamp.format("%Y-%m-%dT%H-%M-%S"))
}

/// 設定を退避してから月次の値をリセットする
///
/// 設定ファイルが読めない場合や、同じ名前のアーカイブが既にある場合は
/// 何も変更しない。
pub fn archive_and_reset(
    workers_path: &Path,
    archive_dir: &Path,
    timestamp: NaiveDateTime,
) -> Result<ResetOutcome> {
    let store = WorkerStore::load(workers_path)?;

    std::fs::create_dir_all(archive_dir).map_err(|source| ReportError::Write {
        path: archive_dir.to_path_buf(),
        source,
    })?;

    let archive_path = archive_dir.join(archive_file_name(timestamp));
    copy_to_new_file(workers_path, &archive_path)?;
    info!(from = %workers_path.display(), to = %archive_path.display(), "作業員設定を退避しました");

    let mut workers = store.into_map();
    for config in workers.values_mut() {
        config.holiday_days = 0.0;
        config.holiday_present_days = 0.0;
        config.regular_hours_adjustment = 0.0;
        config.overtime_hours_adjustment = 0.0;
    }

    let content = serde_json::to_string_pretty(&workers)?;
    persist_bytes(content.as_bytes(), workers_path)?;
    info!(count = workers.len(), "月次の値をリセットしました");

    Ok(ResetOutcome {
        archive_path,
        reset_count: workers.len(),
    })
}

/// 既存のファイルは上書きしない
fn copy_to_new_file(from: &Path, to: &Path) -> Result<()> {
    let write_error = |source: std::io::Error| ReportError::Write {
        path: to.to_path_buf(),
        source,
    };

    let mut archive = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(to)
        .map_err(write_error)?;
    let mut original = File::open(from).map_err(write_error)?;
    std::io::copy(&mut original, &mut archive).map_err(write_error)?;
    archive.sync_all().map_err(write_error)?;
    Ok(())
}
