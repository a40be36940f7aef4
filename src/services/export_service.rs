use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::ExportConfig;
use crate::db::repositories::purchase_repository::PurchaseRepository;
use crate::db::schema::ensure_source_tables;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::report::ExportReport;
use crate::services::harmful_product_service::HarmfulProductService;
use crate::services::leaderboard_service::LeaderboardService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output_path: PathBuf,
    pub leaderboard_entries: usize,
    pub harmful_products: usize,
    pub bytes_written: usize,
}

pub struct ExportService {
    db: DbPool,
    harmful: HarmfulProductService,
}

impl ExportService {
    pub fn new(db: DbPool, harmful_limit: usize) -> Self {
        Self {
            db,
            harmful: HarmfulProductService::new(harmful_limit),
        }
    }

    /// Runs every query inside one connection scope; the connection is closed
    /// before this returns.
    pub fn build_report(&self, target_user: &str) -> AppResult<ExportReport> {
        self.db.with_connection(|conn| {
            ensure_source_tables(conn)?;

            let leaderboard = LeaderboardService::ranked_entries(conn)?;

            let purchasers = PurchaseRepository::distinct_purchasers(conn)?;
            if purchasers.iter().any(|user| user == target_user) {
                info!(
                    target: "app::export",
                    purchasers = purchasers.len(),
                    %target_user,
                    "target user has purchases"
                );
            } else {
                info!(
                    target: "app::export",
                    purchasers = purchasers.len(),
                    %target_user,
                    "target user has no purchases"
                );
            }

            let harmful_products = self.harmful.most_harmful(conn, target_user)?;

            Ok(ExportReport::new(leaderboard, target_user, harmful_products))
        })
    }

    /// Serializes the whole document first, then overwrites `output_path`.
    /// The parent directory must already exist.
    pub fn write_report(report: &ExportReport, output_path: &Path) -> AppResult<ExportSummary> {
        let payload = render_report(report)?;

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(AppError::output_directory_missing(parent));
            }
        }

        fs::write(output_path, payload.as_bytes())?;
        info!(
            target: "app::export",
            path = %output_path.display(),
            bytes = payload.len(),
            "report written"
        );

        Ok(ExportSummary {
            output_path: output_path.to_path_buf(),
            leaderboard_entries: report.leaderboard.len(),
            harmful_products: report.harmful_products.len(),
            bytes_written: payload.len(),
        })
    }
}

/// Pretty JSON with two-space indentation.
pub fn render_report(report: &ExportReport) -> AppResult<String> {
    serde_json::to_string_pretty(report).map_err(AppError::from)
}

pub fn run_export(config: &ExportConfig) -> AppResult<ExportSummary> {
    info!(
        target: "app::export",
        database = %config.database_path.display(),
        output = %config.output_path.display(),
        user = %config.target_user,
        limit = config.harmful_limit,
        "starting export"
    );

    let pool = DbPool::new(&config.database_path)?;
    let service = ExportService::new(pool, config.harmful_limit);
    let report = service.build_report(&config.target_user)?;

    ExportService::write_report(&report, &config.output_path)
}
