//! Payroll Report Common Library
//!
//! CLIと統合テストで共有される型・計算ルール・Excel描画コア

pub mod types;
pub mod layout;
pub mod error;
pub mod parser;
pub mod rules;
pub mod render;
pub mod export;

pub use types::{NonAttendanceEntry, PayType, Worker, WorkerConfig};
pub use error::{Error, Result};
pub use parser::{parse_duration_hours, parse_iso_duration_seconds, parse_number};
pub use rules::{merge_attendance, merge_non_attendance, AttendanceField, FieldParseError, RawAttendanceRow};
pub use render::{layout_report, CellContent, CellEntry, CellStyle, RenderPolicy, SheetLayout, TotalRule};

#[cfg(feature = "excel")]
pub use export::excel_core::{render_workbook, Document, RenderWarning};
#[cfg(feature = "excel")]
pub use export::styles::ReportStyles;
