pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::ExportConfig;
pub use error::{AppError, AppResult};
pub use services::{run_export, ExportSummary};
