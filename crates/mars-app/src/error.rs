use std::path::PathBuf;

use mars_config::ConfigError;
use mars_scene::SceneError;
use mars_surface::SurfaceError;

/// Errors that abort the viewer during setup or the session.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("could not determine a data directory for logs")]
    NoDataDir,

    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("surface generation failed")]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}
