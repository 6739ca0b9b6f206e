//! 入力データの取り込み
//!
//! - attendance: 勤怠Excel（位置指定の列）
//! - non_attendance: 打刻なし作業員のJSONリスト
//! - schema: 列名 → 列番号の解決

pub mod attendance;
pub mod non_attendance;
pub mod schema;

pub use schema::ColumnSchema;
