pub mod export_service;
pub mod harmful_product_service;
pub mod leaderboard_service;

pub use export_service::{run_export, ExportSummary};
