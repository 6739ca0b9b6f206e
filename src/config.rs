use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 勤怠表の列割り当て（列名 A, B, ...）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceColumns {
    pub worker_id: String,
    pub work_days: String,
    pub regular_hours: String,
    pub overtime_hours: String,
    pub absence_hours: String,
    pub sick_days: String,
    pub vacation_days: String,
}

impl Default for AttendanceColumns {
    fn default() -> Self {
        Self {
            worker_id: "D".into(),
            work_days: "H".into(),
            regular_hours: "K".into(),
            overtime_hours: "M".into(),
            absence_hours: "P".into(),
            sick_days: "U".into(),
            vacation_days: "V".into(),
        }
    }
}

/// 勤怠表の読み取り範囲（自動検出はしない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowWindow {
    /// 先頭データ行（0始まり、見出し行を飛ばす）
    pub start_row: usize,
    /// 読み取る行数
    pub row_count: usize,
}

impl Default for RowWindow {
    fn default() -> Self {
        Self {
            start_row: 2,
            row_count: 5,
        }
    }
}

impl RowWindow {
    pub fn rows(&self) -> std::ops::Range<usize> {
        self.start_row..self.start_row + self.row_count
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub columns: AttendanceColumns,
    pub window: RowWindow,
    /// 作業員設定JSONの既定パス
    pub workers_path: Option<PathBuf>,
    /// 打刻なし作業員リストJSONの既定パス
    pub non_attendance_path: Option<PathBuf>,
    /// 作業員設定のアーカイブ先
    pub archive_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ReportError::Config(format!("{}: {}", config_path.display(), e)))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReportError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("payroll-report").join("config.json"))
    }

    /// アーカイブ先（未設定なら作業員設定と同じ場所の archive/）
    pub fn archive_dir_for(&self, workers_path: &std::path::Path) -> PathBuf {
        self.archive_dir.clone().unwrap_or_else(|| {
            workers_path
                .parent()
                .unwrap_or_else(|| std::path::Path::new("."))
                .join("archive")
        })
    }
}
