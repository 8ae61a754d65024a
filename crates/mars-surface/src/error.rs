//! Surface synthesis error types.

use std::path::PathBuf;

/// Largest edge length accepted for a surface raster.
pub const MAX_TEXTURE_EDGE: u32 = 16_384;

/// Errors that can occur while producing or exporting surface maps.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// A raster target with a zero edge.
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A raster target whose byte size would overflow or exceed the limit.
    #[error("surface dimensions {width}x{height} exceed the {MAX_TEXTURE_EDGE} px limit")]
    TooLarge { width: u32, height: u32 },

    /// The background generation thread could not be started.
    #[error("failed to spawn surface worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    /// The background generation thread exited without delivering maps.
    #[error("surface worker disconnected before delivering maps")]
    WorkerDisconnected,

    /// A pixel buffer did not match its declared dimensions.
    #[error("pixel buffer for '{name}' does not match its dimensions")]
    BufferSize { name: &'static str },

    /// Writing a PNG failed.
    #[error("failed to export {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Creating the export directory failed.
    #[error("failed to create export directory {}: {source}", path.display())]
    ExportDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reject raster targets that are empty or too large to allocate.
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), SurfaceError> {
    if width == 0 || height == 0 {
        return Err(SurfaceError::InvalidDimensions { width, height });
    }
    let fits = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .is_some();
    if width > MAX_TEXTURE_EDGE || height > MAX_TEXTURE_EDGE || !fits {
        return Err(SurfaceError::TooLarge { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_edges_rejected() {
        assert!(matches!(
            validate_dimensions(0, 64),
            Err(SurfaceError::InvalidDimensions { width: 0, height: 64 })
        ));
        assert!(matches!(
            validate_dimensions(64, 0),
            Err(SurfaceError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_oversized_rejected() {
        assert!(matches!(
            validate_dimensions(MAX_TEXTURE_EDGE + 1, 4),
            Err(SurfaceError::TooLarge { .. })
        ));
        assert!(validate_dimensions(MAX_TEXTURE_EDGE, 1).is_ok());
    }

    #[test]
    fn test_display_mentions_dimensions() {
        let msg = SurfaceError::InvalidDimensions {
            width: 0,
            height: 8,
        }
        .to_string();
        assert!(msg.contains("0x8"));
    }
}
