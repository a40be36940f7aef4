use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use leaderboard_export_lib::config::{
    DEFAULT_DATABASE_PATH, DEFAULT_HARMFUL_LIMIT, DEFAULT_OUTPUT_PATH, DEFAULT_TARGET_USER,
};
use leaderboard_export_lib::utils::logger::init_logging;
use leaderboard_export_lib::{run_export, ExportConfig};

/// Export the sustainability leaderboard and a user's most harmful products
/// as static JSON. Running without arguments uses the legacy defaults.
#[derive(Parser, Debug)]
#[command(name = "export_leaderboard", version, about)]
struct Cli {
    /// SQLite database holding leaderboard, purchases and emissions tables
    #[arg(long, default_value = DEFAULT_DATABASE_PATH)]
    database: PathBuf,
    /// Output JSON file; its directory must already exist
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
    /// User whose purchases are ranked
    #[arg(long, default_value = DEFAULT_TARGET_USER)]
    user: String,
    /// Number of harmful products to keep
    #[arg(long, default_value_t = DEFAULT_HARMFUL_LIMIT)]
    limit: usize,
    /// Also write logs to a daily rolling file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> ExportConfig {
        ExportConfig::default()
            .with_database_path(self.database)
            .with_output_path(self.output)
            .with_target_user(self.user)
            .with_harmful_limit(self.limit)
            .with_log_dir(self.log_dir)
    }
}

fn main() -> ExitCode {
    let config = Cli::parse().into_config();

    if let Err(err) = init_logging(config.log_dir.as_deref()) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    match run_export(&config) {
        Ok(summary) => {
            println!(
                "✅ Leaderboard data exported to {}",
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("export failed: {err}");
            ExitCode::FAILURE
        }
    }
}
