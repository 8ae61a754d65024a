//! Platform directory resolution.

use std::path::{Path, PathBuf};

use crate::error::AppError;

const APP_NAME: &str = "mars-globe";

/// OS-specific directories used by the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// Debug-build JSON logs.
    pub log_dir: PathBuf,
}

impl PlatformDirs {
    /// Resolve directories from the OS, with an optional config directory
    /// override from the command line. Nothing is created on disk.
    pub fn resolve(config_override: Option<&Path>) -> Result<Self, AppError> {
        let config_dir = match config_override {
            Some(dir) => dir.to_path_buf(),
            None => mars_config::default_config_dir(),
        };
        let log_dir = dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or(AppError::NoDataDir)?
            .join(APP_NAME)
            .join("logs");
        Ok(Self { config_dir, log_dir })
    }

    /// Directories rooted under `root`, for tests.
    pub fn with_root(root: &Path) -> Self {
        let app_dir = root.join(APP_NAME);
        Self {
            config_dir: app_dir.join("config"),
            log_dir: app_dir.join("logs"),
        }
    }

    /// Create every directory on disk.
    pub fn create_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.config_dir, &self.log_dir] {
            std::fs::create_dir_all(dir).map_err(|source| AppError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
