use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error: {message}")]
    Database { message: String },

    #[error("source table `{table}` does not exist")]
    MissingTable { table: String },

    #[error("unexpected value in column `{column}`: {message}")]
    InvalidValue { column: String, message: String },

    #[error("output directory {} does not exist", path.display())]
    OutputDirectoryMissing { path: PathBuf },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn database(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::database", %message, "database error");
        AppError::Database { message }
    }

    pub fn missing_table(table: impl Into<String>) -> Self {
        let table = table.into();
        error!(target: "app::database", %table, "source table missing");
        AppError::MissingTable { table }
    }

    pub fn invalid_value(column: impl Into<String>, message: impl Into<String>) -> Self {
        let column = column.into();
        let message = message.into();
        error!(target: "app::database", %column, %message, "unexpected column value");
        AppError::InvalidValue { column, message }
    }

    pub fn output_directory_missing(path: &Path) -> Self {
        error!(target: "app::export", path = %path.display(), "output directory missing");
        AppError::OutputDirectoryMissing {
            path: path.to_path_buf(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::other", %message, "other error");
        AppError::Other(message)
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(error: rusqlite::Error) -> Self {
        use rusqlite::Error::{FromSqlConversionFailure, InvalidColumnType};

        match &error {
            InvalidColumnType(_, column, kind) => {
                AppError::invalid_value(column.as_str(), format!("found {kind}"))
            }
            FromSqlConversionFailure(index, kind, source) => AppError::invalid_value(
                format!("#{index}"),
                format!("cannot convert {kind}: {source}"),
            ),
            _ => AppError::database(error.to_string()),
        }
    }
}
