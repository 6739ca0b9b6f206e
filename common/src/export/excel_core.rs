//! Excel生成（共通ライブラリ）
//!
//! render.rs のレイアウトを rust_xlsxwriter のワークブックに書き出す。
//! セル単位の書き込み失敗は警告として集めて処理を続け、
//! ワークブックのシリアライズ失敗のみエラーにする。

use super::styles::ReportStyles;
use crate::error::Result;
use crate::render::{CellContent, CellEntry, SheetLayout};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook, Worksheet, XlsxError};
use tracing::warn;

/// 描画中の警告（続行可能な失敗）
#[derive(Debug, Clone, PartialEq)]
pub struct RenderWarning {
    /// 対象セル（"B3"）またはシート設定名
    pub target: String,
    pub message: String,
}

impl std::fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.target, self.message)
    }
}

/// 描画済みドキュメント
#[derive(Debug, Clone)]
pub struct Document {
    pub bytes: Vec<u8>,
    pub warnings: Vec<RenderWarning>,
}

/// レイアウトからxlsxバイト列を生成
///
/// 作成日時は固定値。同じ入力からは常に同じバイト列になる。
pub fn render_workbook(layout: &SheetLayout, styles: &ReportStyles) -> Result<Document> {
    let mut workbook = Workbook::new();
    let mut warnings = Vec::new();

    let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
    let properties = DocProperties::new().set_creation_datetime(&created);
    workbook.set_properties(&properties);

    let worksheet = workbook.add_worksheet();
    setup_sheet(worksheet, layout, &mut warnings);

    for cell in &layout.cells {
        if let Err(e) = write_cell(worksheet, cell, styles) {
            record(&mut warnings, cell.cell_ref(), e);
        }
    }

    let bytes = workbook.save_to_buffer()?;
    Ok(Document { bytes, warnings })
}

fn setup_sheet(worksheet: &mut Worksheet, layout: &SheetLayout, warnings: &mut Vec<RenderWarning>) {
    if let Err(e) = worksheet.set_name(layout.sheet_name) {
        record(warnings, "sheet name".to_string(), e);
    }

    worksheet.set_right_to_left(layout.right_to_left);

    for (col, width) in layout.column_widths.iter().enumerate() {
        if let Err(e) = worksheet.set_column_width(col as u16, *width) {
            record(warnings, format!("column {} width", col), e);
        }
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    cell: &CellEntry,
    styles: &ReportStyles,
) -> std::result::Result<(), XlsxError> {
    let format = styles.format(cell.style);
    match &cell.content {
        CellContent::Text(text) => {
            worksheet.write_string_with_format(cell.row, cell.col, text, format)?;
        }
        CellContent::Blank => {
            worksheet.write_blank(cell.row, cell.col, format)?;
        }
        CellContent::Number(value) => {
            worksheet.write_number_with_format(cell.row, cell.col, *value, format)?;
        }
        CellContent::Formula(formula) => {
            worksheet.write_formula_with_format(cell.row, cell.col, formula.as_str(), format)?;
        }
    }
    Ok(())
}

fn record(warnings: &mut Vec<RenderWarning>, target: String, error: XlsxError) {
    warn!(cell = %target, error = %error, "セル書き込みに失敗（続行）");
    warnings.push(RenderWarning {
        target,
        message: error.to_string(),
    });
}
