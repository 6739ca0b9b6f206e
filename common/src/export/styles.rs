//! セルスタイル定義
//!
//! 1回の描画につき1度だけ作り、参照で描画処理に渡す。

use crate::render::CellStyle;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder};

const FONT_SIZE: f64 = 14.0;
const INTEGER_FORMAT: &str = "#";
const DECIMAL_FORMAT: &str = "0.0";

/// 給与明細シートのスタイル一式
#[derive(Debug, Clone)]
pub struct ReportStyles {
    title: Format,
    header: Format,
    data: Format,
    detail: Format,
}

impl ReportStyles {
    pub fn new() -> Self {
        let base = Format::new()
            .set_font_size(FONT_SIZE)
            .set_align(FormatAlign::Right)
            .set_align(FormatAlign::VerticalCenter);

        let bordered = base
            .clone()
            .set_border(FormatBorder::Thin)
            .set_border_color(Color::Black);

        Self {
            title: base.clone().set_bold(),
            header: bordered.clone().set_bold(),
            data: bordered.clone().set_num_format(INTEGER_FORMAT),
            detail: bordered.set_num_format(DECIMAL_FORMAT),
        }
    }

    pub fn format(&self, style: CellStyle) -> &Format {
        match style {
            CellStyle::Title => &self.title,
            CellStyle::Header => &self.header,
            CellStyle::Data => &self.data,
            CellStyle::Detail => &self.detail,
        }
    }
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self::new()
    }
}
