use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "payroll-report")]
#[command(about = "勤怠表・作業員設定から給与明細Excelを生成するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 入力ファイル（省略時は設定ファイルの既定パス）
#[derive(clap::Args, Clone, Debug)]
pub struct SourceArgs {
    /// 勤怠Excelファイル
    #[arg(short, long, required = true)]
    pub attendance: PathBuf,

    /// 打刻なし作業員リスト（JSON）
    #[arg(short, long)]
    pub non_attendance: Option<PathBuf>,

    /// 作業員設定（JSON）
    #[arg(short, long)]
    pub workers: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 給与明細Excelを生成
    Build {
        #[command(flatten)]
        sources: SourceArgs,

        /// 出力Excelファイル
        #[arg(short, long, default_value = "salary_details.xlsx")]
        output: PathBuf,
    },

    /// 集計結果（給与明細の行）をJSONで表示
    Inspect {
        #[command(flatten)]
        sources: SourceArgs,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 作業員設定を退避し、月次の値をリセット
    ResetWorkers {
        /// 作業員設定（JSON）
        #[arg(short, long)]
        workers: Option<PathBuf>,

        /// アーカイブ先ディレクトリ
        #[arg(long)]
        archive_dir: Option<PathBuf>,

        /// 確認なしで実行
        #[arg(short, long)]
        yes: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 先頭データ行（1始まり）
        #[arg(long)]
        start_row: Option<usize>,

        /// 読み取る行数
        #[arg(long)]
        row_count: Option<usize>,

        /// 作業員設定の既定パス
        #[arg(long)]
        workers_path: Option<PathBuf>,

        /// 打刻なしリストの既定パス
        #[arg(long)]
        non_attendance_path: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
