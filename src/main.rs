use clap::Parser;
use payroll_report::{cli, config, error, export, maintenance, report};
use cli::{Cli, Commands, SourceArgs};
use config::Config;
use error::{ReportError, Result};
use report::{AttendanceReport, ReportSources};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "処理を中断しました");
            eprintln!("✖ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Build { sources, output } => {
            println!("📊 payroll-report - 給与明細生成\n");

            // 1. 集計
            println!("[1/2] 勤怠表と作業員設定を照合中...");
            let sources = resolve_sources(sources, &config)?;
            let report = AttendanceReport::build(sources, &config)?;
            println!("✔ {}人分の明細を作成\n", report.len());

            // 2. 描画・保存
            println!("[2/2] Excelを生成中...");
            let warnings = export::export_report(&report, &output)?;
            for warning in &warnings {
                println!("⚠ {}", warning);
            }
            println!("✔ Excel出力: {}", output.display());

            println!("\n✅ 完了");
        }

        Commands::Inspect { sources, output } => {
            let sources = resolve_sources(sources, &config)?;
            let report = AttendanceReport::build(sources, &config)?;
            let json = serde_json::to_string_pretty(report.workers())?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ 結果を保存: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::ResetWorkers { workers, archive_dir, yes } => {
            let workers_path = workers
                .or_else(|| config.workers_path.clone())
                .ok_or_else(|| missing_path("--workers"))?;
            let archive_dir = archive_dir.unwrap_or_else(|| config.archive_dir_for(&workers_path));

            if !yes && !confirm_reset(&workers_path)? {
                println!("中止しました");
                return Ok(());
            }

            let timestamp = chrono::Local::now().naive_local();
            let outcome = maintenance::archive_and_reset(&workers_path, &archive_dir, timestamp)?;
            println!("✔ 退避: {}", outcome.archive_path.display());
            println!("✔ {}人分の月次の値をリセットしました", outcome.reset_count);
        }

        Commands::Config { start_row, row_count, workers_path, non_attendance_path, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(row) = start_row {
                if row == 0 {
                    return Err(ReportError::Config("先頭行は1以上を指定してください".into()));
                }
                config.window.start_row = row - 1;
                changed = true;
            }
            if let Some(count) = row_count {
                config.window.row_count = count;
                changed = true;
            }
            if let Some(path) = workers_path {
                config.workers_path = Some(path);
                changed = true;
            }
            if let Some(path) = non_attendance_path {
                config.non_attendance_path = Some(path);
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                let columns = &config.columns;
                println!("設定:");
                println!("  読み取り範囲: {}行目から{}行", config.window.start_row + 1, config.window.row_count);
                println!(
                    "  列: ID={} 出勤日数={} 通常={} 残業={} 欠勤={} 病欠={} 休暇={}",
                    columns.worker_id,
                    columns.work_days,
                    columns.regular_hours,
                    columns.overtime_hours,
                    columns.absence_hours,
                    columns.sick_days,
                    columns.vacation_days
                );
                println!("  作業員設定: {}", display_path(&config.workers_path));
                println!("  打刻なしリスト: {}", display_path(&config.non_attendance_path));
            }
        }
    }

    Ok(())
}

fn resolve_sources(args: SourceArgs, config: &Config) -> Result<ReportSources> {
    let workers = args
        .workers
        .or_else(|| config.workers_path.clone())
        .ok_or_else(|| missing_path("--workers"))?;
    let non_attendance = args
        .non_attendance
        .or_else(|| config.non_attendance_path.clone())
        .ok_or_else(|| missing_path("--non-attendance"))?;

    Ok(ReportSources {
        attendance: args.attendance,
        non_attendance,
        workers,
    })
}

fn missing_path(flag: &str) -> ReportError {
    ReportError::Config(format!(
        "{} を指定するか、`payroll-report config` で既定パスを設定してください",
        flag
    ))
}

fn confirm_reset(workers_path: &std::path::Path) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(format!(
            "{} を退避して月次の値（祝日・ギフト・時間調整）をリセットしますか？",
            workers_path.display()
        ))
        .default(false)
        .interact()
        .map_err(|e| ReportError::Config(format!("入力エラー: {}", e)))
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "未設定".to_string())
}
