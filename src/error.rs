use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("入力ファイルを開けません: {path}: {message}")]
    SourceUnavailable { path: PathBuf, message: String },

    #[error("入力ファイルの形式が不正: {path}: {message}")]
    MalformedSource { path: PathBuf, message: String },

    #[error("作業員設定の読み込みに失敗: {path}: {message}")]
    ConfigLoad { path: PathBuf, message: String },

    #[error("セル値の解析に失敗: {path} {row}行目 {field}: {source}")]
    Parse {
        path: PathBuf,
        /// 1始まりの行番号（Excel表示と同じ）
        row: usize,
        field: String,
        #[source]
        source: payroll_common::Error,
    },

    #[error("作業員設定が見つかりません: {worker_id} ({})", describe_location(.path, .row))]
    UnknownWorker {
        worker_id: String,
        path: PathBuf,
        /// 勤怠表なら1始まりの行番号、打刻なしリストなら1始まりの要素番号
        row: Option<usize>,
    },

    #[error("出力ファイルの書き込みに失敗: {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Excel生成エラー: {0}")]
    Render(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] payroll_common::Error),
}

fn describe_location(path: &std::path::Path, row: &Option<usize>) -> String {
    match row {
        Some(row) => format!("{} #{}", path.display(), row),
        None => path.display().to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
