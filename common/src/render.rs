//! 給与明細のシートレイアウト生成
//!
//! 作業員リストをセル配置（値・数式・スタイル種別）に変換する。
//! Excelライブラリには依存しないため、数式の内容をそのまま検証できる。
//!
//! 給与形態ごとの違い（合計を数式にするか月給を直接書くか、
//! 残業合計を出すか）は `RenderPolicy` の表で決める。

use crate::layout::*;
use crate::types::{PayType, Worker};

/// 合計セルの書き方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalRule {
    /// `=時間*単価` の数式
    HoursTimesRate,
    /// 月給をそのまま書く
    MonthlySalary,
}

/// 給与形態ごとの描画方針
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPolicy {
    pub regular_total: TotalRule,
    /// `None` なら残業合計セルを出さない
    pub overtime_total: Option<TotalRule>,
}

impl PayType {
    /// 描画方針の表（残業代は時給者のみ）
    pub const fn render_policy(self) -> RenderPolicy {
        match self {
            PayType::Hourly => RenderPolicy {
                regular_total: TotalRule::HoursTimesRate,
                overtime_total: Some(TotalRule::HoursTimesRate),
            },
            PayType::Daily => RenderPolicy {
                regular_total: TotalRule::HoursTimesRate,
                overtime_total: None,
            },
            PayType::Monthly => RenderPolicy {
                regular_total: TotalRule::MonthlySalary,
                overtime_total: None,
            },
        }
    }
}

/// スタイル種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStyle {
    /// 作業員名（太字・枠なし）
    Title,
    /// 見出し・ラベル（太字・枠あり）
    Header,
    /// 時間・単価・金額（整数表示）
    Data,
    /// 日数など（小数1桁表示）
    Detail,
}

/// セルの中身
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Text(String),
    Blank,
    Number(f64),
    Formula(String),
}

/// 配置済みセル（行・列は0始まり）
#[derive(Debug, Clone, PartialEq)]
pub struct CellEntry {
    pub row: u32,
    pub col: u16,
    pub content: CellContent,
    pub style: CellStyle,
}

impl CellEntry {
    pub fn cell_ref(&self) -> String {
        cell_name(self.row, self.col)
    }
}

/// シート全体のレイアウト
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub sheet_name: &'static str,
    pub right_to_left: bool,
    pub column_widths: Vec<f64>,
    pub cells: Vec<CellEntry>,
}

impl SheetLayout {
    /// 指定セルを探す
    pub fn cell(&self, row: u32, col: u16) -> Option<&CellEntry> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }
}

/// 作業員リストからシートレイアウトを作る
///
/// ブロックはリスト順に上から並ぶ。
pub fn layout_report(workers: &[Worker]) -> SheetLayout {
    let mut cells = Vec::with_capacity(workers.len() * 32);
    for (index, worker) in workers.iter().enumerate() {
        let start_row = index as u32 * BLOCK_HEIGHT;
        cells.extend(layout_worker(worker, start_row));
    }

    SheetLayout {
        sheet_name: SHEET_NAME,
        right_to_left: true,
        column_widths: vec![COLUMN_WIDTH; COLUMN_COUNT as usize],
        cells,
    }
}

/// 作業員1人分のブロック
pub fn layout_worker(worker: &Worker, start_row: u32) -> Vec<CellEntry> {
    let policy = worker.pay_type.render_policy();
    let mut block = BlockWriter {
        start_row,
        cells: Vec::with_capacity(32),
    };

    block.text(ROW_NAME, COL_LABEL, &worker.name, CellStyle::Title);

    block.push(ROW_HEADER, COL_LABEL, CellContent::Blank, CellStyle::Header);
    block.text(ROW_HEADER, COL_HOURS, LABEL_HOURS, CellStyle::Header);
    block.text(ROW_HEADER, COL_RATE, LABEL_RATE, CellStyle::Header);
    block.text(ROW_HEADER, COL_TOTAL, LABEL_TOTAL, CellStyle::Header);

    block.text(ROW_REGULAR, COL_LABEL, LABEL_REGULAR, CellStyle::Header);
    block.number(ROW_REGULAR, COL_HOURS, worker.regular_hours, CellStyle::Data);
    block.number(ROW_REGULAR, COL_RATE, worker.hourly_rate, CellStyle::Data);
    block.total(ROW_REGULAR, policy.regular_total, worker);

    block.text(ROW_OVERTIME, COL_LABEL, LABEL_OVERTIME, CellStyle::Header);
    block.number(ROW_OVERTIME, COL_HOURS, worker.overtime_hours, CellStyle::Data);
    block.number(ROW_OVERTIME, COL_RATE, worker.overtime_rate, CellStyle::Data);
    if let Some(rule) = policy.overtime_total {
        block.total(ROW_OVERTIME, rule, worker);
    }

    block.text(ROW_TRANSPORT, COL_LABEL, LABEL_TRANSPORT, CellStyle::Header);
    block.number(ROW_TRANSPORT, COL_TOTAL, worker.transport_allowance, CellStyle::Data);

    // 合計は値ではなくセル参照で足す
    block.text(ROW_TOTAL, COL_LABEL, LABEL_TOTAL, CellStyle::Header);
    let total_hours = format!(
        "={}+{}",
        block.cell_ref(ROW_REGULAR, COL_HOURS),
        block.cell_ref(ROW_OVERTIME, COL_HOURS),
    );
    block.push(ROW_TOTAL, COL_HOURS, CellContent::Formula(total_hours), CellStyle::Data);
    let total_pay = format!(
        "={}+{}+{}",
        block.cell_ref(ROW_REGULAR, COL_TOTAL),
        block.cell_ref(ROW_OVERTIME, COL_TOTAL),
        block.cell_ref(ROW_TRANSPORT, COL_TOTAL),
    );
    block.push(ROW_TOTAL, COL_TOTAL, CellContent::Formula(total_pay), CellStyle::Data);

    let details = [
        (ROW_WORK_DAYS, LABEL_WORK_DAYS, worker.work_days, CellStyle::Data),
        (ROW_HOLIDAYS, LABEL_HOLIDAYS, worker.holiday_days, CellStyle::Detail),
        (ROW_HOLIDAY_PRESENT, LABEL_HOLIDAY_PRESENT, worker.holiday_present_days, CellStyle::Detail),
        (ROW_SICK_DAYS, LABEL_SICK_DAYS, worker.sick_days, CellStyle::Detail),
        (ROW_VACATION_DAYS, LABEL_VACATION_DAYS, worker.vacation_days, CellStyle::Detail),
        (ROW_ABSENCE_HOURS, LABEL_ABSENCE_HOURS, worker.absence_hours, CellStyle::Detail),
    ];
    for (row, label, value, style) in details {
        block.text(row, COL_LABEL, label, CellStyle::Header);
        block.number(row, COL_HOURS, value, style);
    }

    block.cells
}

struct BlockWriter {
    start_row: u32,
    cells: Vec<CellEntry>,
}

impl BlockWriter {
    fn cell_ref(&self, offset: u32, col: u16) -> String {
        cell_name(self.start_row + offset, col)
    }

    fn push(&mut self, offset: u32, col: u16, content: CellContent, style: CellStyle) {
        self.cells.push(CellEntry {
            row: self.start_row + offset,
            col,
            content,
            style,
        });
    }

    fn text(&mut self, offset: u32, col: u16, value: &str, style: CellStyle) {
        self.push(offset, col, CellContent::Text(value.to_string()), style);
    }

    fn number(&mut self, offset: u32, col: u16, value: f64, style: CellStyle) {
        self.push(offset, col, CellContent::Number(value), style);
    }

    fn total(&mut self, offset: u32, rule: TotalRule, worker: &Worker) {
        let content = match rule {
            TotalRule::HoursTimesRate => CellContent::Formula(format!(
                "={}*{}",
                self.cell_ref(offset, COL_HOURS),
                self.cell_ref(offset, COL_RATE),
            )),
            TotalRule::MonthlySalary => CellContent::Number(worker.monthly_salary),
        };
        self.push(offset, COL_TOTAL, content, CellStyle::Data);
    }
}
