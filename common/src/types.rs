//! 給与明細の型定義
//!
//! - WorkerConfig: 作業員ごとの固定設定（設定ファイルから読み込み）
//! - Worker: 1回の集計で作られる給与明細の1行
//! - NonAttendanceEntry: 打刻のない作業員の補足リストの1件

use serde::{Deserialize, Serialize};

/// 給与形態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayType {
    /// 時給
    #[default]
    Hourly,
    /// 日給
    Daily,
    /// 月給
    Monthly,
}

impl PayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayType::Hourly => "hourly",
            PayType::Daily => "daily",
            PayType::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for PayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hourly" => Ok(PayType::Hourly),
            "daily" => Ok(PayType::Daily),
            "monthly" => Ok(PayType::Monthly),
            _ => Err(format!("Unknown pay type: {}. Use hourly, daily, or monthly", s)),
        }
    }
}

/// 作業員設定
///
/// 旧形式の設定ファイル（`per_hour`, `monthly_sal` など）のキーも受け付ける。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// 作業員ID（読み込み後にマップのキーで上書きされる）
    #[serde(alias = "worker_id")]
    pub id: String,
    pub name: String,
    #[serde(alias = "worker_type")]
    pub pay_type: PayType,
    pub daily_hours: f64,
    #[serde(alias = "per_hour")]
    pub hourly_rate: f64,
    #[serde(alias = "per_hour_125")]
    pub overtime_rate: f64,
    #[serde(alias = "monthly_sal")]
    pub monthly_salary: f64,
    #[serde(alias = "trans_expanses")]
    pub transport_allowance: f64,
    #[serde(alias = "holidays")]
    pub holiday_days: f64,
    #[serde(alias = "holiday_present")]
    pub holiday_present_days: f64,
    #[serde(alias = "hours_adjustment")]
    pub regular_hours_adjustment: f64,
    #[serde(alias = "hours_125_adjustment")]
    pub overtime_hours_adjustment: f64,
    #[serde(alias = "vac_days_adjustment")]
    pub vacation_days_adjustment: f64,
}

/// 給与明細の1行
///
/// 金額フィールド（`regular_pay` 等）は0のまま。
/// 合計は出力Excel側の数式で計算する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub pay_type: PayType,
    pub daily_hours: f64,

    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub total_hours: f64,
    pub work_days: f64,
    pub sick_days: f64,
    pub vacation_days: f64,
    pub absence_hours: f64,

    pub regular_pay: f64,
    pub overtime_pay: f64,
    pub total_pay: f64,

    pub hourly_rate: f64,
    pub overtime_rate: f64,
    pub monthly_salary: f64,
    pub transport_allowance: f64,
    pub holiday_days: f64,
    pub holiday_present_days: f64,
}

/// 打刻なし作業員リストの1件
///
/// `id` と `work_days` は必須、それ以外は省略可能。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NonAttendanceEntry {
    #[serde(alias = "worker_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "worker_type")]
    pub pay_type: Option<PayType>,
    pub work_days: f64,
    #[serde(default)]
    pub overtime_hours: f64,
    #[serde(default)]
    pub sick_days: f64,
    #[serde(default, alias = "vac_days")]
    pub vacation_days: f64,
    #[serde(default, alias = "absense_hours")]
    pub absence_hours: f64,
    #[serde(default, alias = "per_hour")]
    pub hourly_rate: f64,
    #[serde(default, alias = "per_hour_125")]
    pub overtime_rate: f64,
    #[serde(default, alias = "holidays")]
    pub holiday_days: f64,
    #[serde(default, alias = "holiday_present")]
    pub holiday_present_days: f64,
}
