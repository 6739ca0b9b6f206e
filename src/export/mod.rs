pub mod excel;

use crate::error::{ReportError, Result};
use crate::report::AttendanceReport;
use payroll_common::{layout_report, render_workbook, Document, RenderWarning, ReportStyles};
use std::path::Path;
use tracing::warn;

/// レポートをxlsxに描画する
///
/// セル単位の失敗は `Document::warnings` に入る。
pub fn render(report: &AttendanceReport) -> Result<Document> {
    let layout = layout_report(report.workers());
    let styles = ReportStyles::new();

    let document =
        render_workbook(&layout, &styles).map_err(|e| ReportError::Render(e.to_string()))?;

    if !document.warnings.is_empty() {
        warn!(count = document.warnings.len(), "描画中に警告がありました");
    }
    Ok(document)
}

/// 描画して保存し、警告を返す
pub fn export_report(report: &AttendanceReport, output_path: &Path) -> Result<Vec<RenderWarning>> {
    let document = render(report)?;
    excel::write_report(&document, output_path)?;
    Ok(document.warnings)
}
