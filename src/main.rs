//! Entry point for the `strings-merge` command line tool.

use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use clap::{
    Parser,
    Subcommand,
};
use strings_merge::config::{
    ConfigManager,
    NameMatcher,
    SettingsOverrides,
};
use strings_merge::driver::{
    BatchReport,
    discover_jobs,
    merge_files,
    run_batch,
};
use tracing_subscriber::EnvFilter;

/// Merge regenerated .strings tables with existing translations
#[derive(Parser, Debug)]
#[command(name = "strings-merge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Merge one previously translated table with a freshly extracted one
    Merge {
        /// Previously translated table (may not exist yet)
        old: PathBuf,
        /// Freshly extracted table
        new: PathBuf,
        /// Where to write the merged table
        dest: PathBuf,
    },
    /// Merge every `.old`/`.new` sidecar pair found in language directories under ROOT
    Scan {
        /// Directory containing the language directories and `.strings-merge.json`
        root: PathBuf,

        /// Keep the `.old`/`.new` files after merging
        #[arg(long)]
        keep_intermediates: bool,

        /// Language adopted without merging (overrides the config file)
        #[arg(long, value_name = "LANGUAGE")]
        development_language: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Merge { old, new, dest } => match merge_files(&old, &new, &dest) {
            Ok(outcome) => {
                tracing::info!("{}: {:?}", dest.display(), outcome);
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("{}", e);
                ExitCode::FAILURE
            }
        },
        Command::Scan { root, keep_intermediates, development_language } => {
            scan(&root, &SettingsOverrides { keep_intermediates, development_language })
        }
    }
}

/// `scan` サブコマンド: 設定を読み込み、ジョブを探索してまとめて実行する
fn scan(root: &Path, overrides: &SettingsOverrides) -> ExitCode {
    let config = match ConfigManager::load(root, overrides) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let settings = config.settings();

    let jobs = match NameMatcher::new(settings)
        .map_err(|e| e.to_string())
        .and_then(|matcher| discover_jobs(root, settings, &matcher).map_err(|e| e.to_string()))
    {
        Ok(jobs) => jobs,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if jobs.is_empty() {
        tracing::warn!("No strings files to merge under {}", root.display());
        return ExitCode::SUCCESS;
    }

    let report = run_batch(&jobs, settings.remove_intermediates);
    log_report(&report);

    if report.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// バッチ結果の要約をログに出す
fn log_report(report: &BatchReport) {
    for (dest, outcome) in &report.succeeded {
        tracing::info!("{}: {:?}", dest.display(), outcome);
    }
    for (dest, error) in &report.failed {
        if error.path() == dest.as_path() {
            tracing::error!("{}", error);
        } else {
            tracing::error!("{} not written: {}", dest.display(), error);
        }
    }
    tracing::info!("{} merged, {} failed", report.succeeded.len(), report.failed.len());
}

/// `RUST_LOG` があればそれを、なければ `--verbose` に応じたレベルを使う
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
