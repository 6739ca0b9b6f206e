//! 作業員設定ストア
//!
//! 作業員ID → 設定 のJSONマップを読み込む。
//! 読み込み後は変更しない（1回の集計ごとに作り直す）。

use crate::error::{ReportError, Result};
use payroll_common::WorkerConfig;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct WorkerStore {
    workers: BTreeMap<String, WorkerConfig>,
}

impl WorkerStore {
    /// 設定ファイルを読み込む
    ///
    /// マップのキーを正とし、レコード内の `id` は上書きする。
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ReportError::ConfigLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let workers = Self::parse(&content).map_err(|e| ReportError::ConfigLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        info!(path = %path.display(), count = workers.len(), "作業員設定を読み込みました");
        Ok(Self { workers })
    }

    fn parse(content: &str) -> serde_json::Result<BTreeMap<String, WorkerConfig>> {
        let mut workers: BTreeMap<String, WorkerConfig> = serde_json::from_str(content)?;
        for (worker_id, config) in workers.iter_mut() {
            if config.id != *worker_id {
                debug!(key = %worker_id, record_id = %config.id, "IDをキーで上書き");
            }
            config.id = worker_id.clone();
        }
        Ok(workers)
    }

    pub fn get(&self, worker_id: &str) -> Option<&WorkerConfig> {
        self.workers.get(worker_id)
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// 月次リセット用に設定を取り出す
    pub fn into_map(self) -> BTreeMap<String, WorkerConfig> {
        self.workers
    }
}
