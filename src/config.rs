use std::path::PathBuf;

pub const DEFAULT_DATABASE_PATH: &str = "sustainability.db";
pub const DEFAULT_OUTPUT_PATH: &str = "public/data/leaderboard.json";
pub const DEFAULT_TARGET_USER: &str = "user_001";
pub const DEFAULT_HARMFUL_LIMIT: usize = 5;

/// Inputs of a single export run.
///
/// `Default` reproduces the legacy invocation: `sustainability.db` in the
/// working directory, output under `public/data/`, harmful products for
/// `user_001`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub database_path: PathBuf,
    pub output_path: PathBuf,
    pub target_user: String,
    pub harmful_limit: usize,
    pub log_dir: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            target_user: DEFAULT_TARGET_USER.to_string(),
            harmful_limit: DEFAULT_HARMFUL_LIMIT,
            log_dir: None,
        }
    }
}

impl ExportConfig {
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_target_user(mut self, user_id: impl Into<String>) -> Self {
        self.target_user = user_id.into();
        self
    }

    pub fn with_harmful_limit(mut self, limit: usize) -> Self {
        self.harmful_limit = limit;
        self
    }

    pub fn with_log_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.log_dir = dir;
        self
    }
}
