//! 給与明細レポート生成
//!
//! 勤怠Excel・作業員設定・打刻なし作業員リストを突き合わせ、
//! 作業員ごとの給与明細ブロックを並べたExcelを出力する。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod ingest;
pub mod maintenance;
pub mod report;
pub mod worker_store;

pub use error::{ReportError, Result};
pub use report::{AttendanceReport, ReportSources};
