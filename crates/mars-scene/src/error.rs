//! Scene error types.

use mars_surface::SurfaceError;

/// Errors surfaced by [`SceneContext`](crate::SceneContext).
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// No surface site with this id.
    #[error("unknown site '{0}'")]
    UnknownSite(String),

    /// No satellite with this id.
    #[error("unknown satellite '{0}'")]
    UnknownSatellite(String),

    /// The surface maps have not been attached yet.
    #[error("surface textures are not ready")]
    TexturesNotReady,

    /// Attached surface maps failed validation.
    #[error("surface maps rejected: {0}")]
    Surface(#[from] SurfaceError),
}
