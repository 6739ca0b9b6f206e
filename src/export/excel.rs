//! Excel出力（CLI版）
//!
//! 描画済みのバイト列を同じディレクトリの一時ファイルに書いてから置き換える。
//! 失敗時に中途半端な出力ファイルは残らない。

use crate::error::{ReportError, Result};
use payroll_common::Document;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

pub fn write_report(document: &Document, output_path: &Path) -> Result<()> {
    persist_bytes(&document.bytes, output_path)?;
    info!(path = %output_path.display(), bytes = document.bytes.len(), "給与明細を保存しました");
    Ok(())
}

/// 一時ファイル経由でバイト列を書き込む
pub(crate) fn persist_bytes(bytes: &[u8], output_path: &Path) -> Result<()> {
    let write_error = |source: std::io::Error| ReportError::Write {
        path: output_path.to_path_buf(),
        source,
    };

    let parent = match output_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(parent).map_err(write_error)?;
    file.write_all(bytes).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(output_path).map_err(|e| write_error(e.error))?;
    Ok(())
}
