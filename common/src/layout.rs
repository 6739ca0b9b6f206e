//! レイアウト設定モジュール
//!
//! 給与明細シートのブロック配置・ラベル・セル番地の定義。
//! 作業員1人につき18行のブロックを縦に積む。

// ============================================
// シート設定
// ============================================

/// 出力シート名（毎回同じ）
pub const SHEET_NAME: &str = "Sheet1";

/// 使用する列数（A〜D）
pub const COLUMN_COUNT: u16 = 4;

/// A〜D列の幅（Excel文字幅）
pub const COLUMN_WIDTH: f64 = 20.0;

/// 作業員1人分のブロック高さ（行）
pub const BLOCK_HEIGHT: u32 = 18;

// ============================================
// ブロック内の行オフセット
// ============================================

pub const ROW_NAME: u32 = 0;
pub const ROW_HEADER: u32 = 1;
pub const ROW_REGULAR: u32 = 2;
pub const ROW_OVERTIME: u32 = 4;
pub const ROW_TRANSPORT: u32 = 6;
pub const ROW_TOTAL: u32 = 7;
pub const ROW_WORK_DAYS: u32 = 9;
pub const ROW_HOLIDAYS: u32 = 10;
pub const ROW_HOLIDAY_PRESENT: u32 = 11;
pub const ROW_SICK_DAYS: u32 = 12;
pub const ROW_VACATION_DAYS: u32 = 13;
pub const ROW_ABSENCE_HOURS: u32 = 14;

// ============================================
// 列
// ============================================

pub const COL_LABEL: u16 = 0;
pub const COL_HOURS: u16 = 1;
pub const COL_RATE: u16 = 2;
pub const COL_TOTAL: u16 = 3;

// ============================================
// ラベル（ヘブライ語、右から左）
// ============================================

pub const LABEL_HOURS: &str = "שעות";
pub const LABEL_RATE: &str = "לשעה ₪";
pub const LABEL_TOTAL: &str = "סה״כ ₪";
pub const LABEL_REGULAR: &str = "ש.רגילות";
pub const LABEL_OVERTIME: &str = "ש.נ. 125%";
pub const LABEL_TRANSPORT: &str = "נסיעות";
pub const LABEL_WORK_DAYS: &str = "ימי עבודה";
pub const LABEL_HOLIDAYS: &str = "חג";
pub const LABEL_HOLIDAY_PRESENT: &str = "מתנה";
pub const LABEL_SICK_DAYS: &str = "ימי מחלה";
pub const LABEL_VACATION_DAYS: &str = "ימי חופש";
pub const LABEL_ABSENCE_HOURS: &str = "שעות להוריד";

// ============================================
// セル番地
// ============================================

/// 列番号（0始まり）から列名（A, B, ..., Z, AA, ...）
pub fn column_name(col: u16) -> String {
    let mut n = col as u32 + 1;
    let mut name = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        name.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}

/// 列名から列番号（0始まり）
///
/// 大文字小文字は区別しない。英字以外や空文字は `None`。
pub fn column_index(name: &str) -> Option<u16> {
    let name = name.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut index: u32 = 0;
    for c in name.chars() {
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as u32 + 1;
        index = index.checked_mul(26)?.checked_add(digit)?;
    }

    u16::try_from(index - 1).ok()
}

/// 行・列（0始まり）からセル名（"B3" など）
pub fn cell_name(row: u32, col: u16) -> String {
    format!("{}{}", column_name(col), row + 1)
}
