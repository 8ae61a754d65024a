//! PNG export of generated maps, for inspecting synthesis output.

use std::path::{Path, PathBuf};

use crate::error::SurfaceError;
use crate::generator::SurfaceMaps;

/// Write `albedo.png`, `bump.png` and `roughness.png` into `dir`, creating
/// it if needed. Returns the written paths in that order.
pub fn export_png(maps: &SurfaceMaps, dir: &Path) -> Result<Vec<PathBuf>, SurfaceError> {
    std::fs::create_dir_all(dir).map_err(|source| SurfaceError::ExportDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(3);
    for tex in maps.textures() {
        let path = dir.join(format!("{}.png", tex.name));
        let image = tex.to_rgba_image()?;
        image.save(&path).map_err(|source| SurfaceError::Export {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Exported surface map");
        written.push(path);
    }
    Ok(written)
}
