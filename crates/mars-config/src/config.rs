//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Viewport settings.
    pub window: WindowConfig,
    /// Globe, atmosphere and marker geometry.
    pub globe: GlobeConfig,
    /// Procedural surface texture settings.
    pub surface: SurfaceConfig,
    /// Orbit camera settings.
    pub camera: CameraConfig,
    /// Satellite motion settings.
    pub orbit: OrbitConfig,
    /// Background starfield settings.
    pub starfield: StarfieldConfig,
    /// Pointer input settings.
    pub input: InputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Viewport configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Viewport width in logical pixels.
    pub width: u32,
    /// Viewport height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

/// Globe geometry and atmosphere look.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobeConfig {
    /// Planet radius in scene units.
    pub radius: f32,
    /// Atmosphere shell thickness as a fraction of the radius.
    pub atmosphere_thickness: f32,
    /// Linear RGB tint of the atmosphere rim.
    pub atmosphere_color: [f32; 3],
    /// Exponent of the rim falloff (higher = thinner glow).
    pub rim_power: f32,
    /// Rim glow intensity multiplier.
    pub rim_intensity: f32,
    /// Radius of clickable site markers in scene units.
    pub marker_radius: f32,
}

/// Procedural surface texture configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Seed for every random stage of texture synthesis.
    pub seed: u64,
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    /// Number of fBm octaves (2-4 gives the intended look).
    pub octaves: u32,
    /// Lattice cells across the texture width for the first octave.
    pub base_cells: u32,
    /// Number of craters stamped into albedo and bump.
    pub crater_count: u32,
    /// Fraction of the image height covered by each polar ice cap.
    pub ice_cap_fraction: f32,
    /// Amplitude of per-pixel albedo grit in 8-bit color steps.
    pub grit: f32,
    /// Generate on a background thread instead of blocking setup.
    pub background: bool,
}

/// Orbit camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Initial distance from the planet center.
    pub start_distance: f32,
    /// Closest allowed zoom distance.
    pub min_distance: f32,
    /// Farthest allowed zoom distance.
    pub max_distance: f32,
    /// Fraction of the pending rotation consumed per frame when damping.
    pub damping_factor: f32,
    /// Let rotation glide after the pointer is released.
    pub enable_damping: bool,
    /// Allow secondary-button panning of the look-at target.
    pub enable_pan: bool,
    /// Radians of rotation per pixel of drag.
    pub rotate_sensitivity: f32,
    /// Radius multiplier per wheel notch towards the target (0..1).
    pub zoom_step: f32,
    /// Scene units of pan per pixel of drag, per unit of camera distance.
    pub pan_sensitivity: f32,
    /// Lower polar-angle bound in radians.
    pub min_polar: f32,
    /// Upper polar-angle bound in radians.
    pub max_polar: f32,
    /// Duration of site/satellite fly-to animations in milliseconds.
    pub fly_duration_ms: u32,
}

/// Satellite motion configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    /// Simulated seconds per wall-clock second.
    pub time_scale: f64,
    /// Compression applied to altitudes when mapping them into the scene.
    pub altitude_scale: f64,
    /// Minimum gap between the surface and any orbit, as a radius fraction.
    pub clearance: f64,
    /// Segments used to sample orbit paths.
    pub path_segments: u32,
}

/// Background starfield configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Seed for star placement.
    pub seed: u64,
    /// Number of stars.
    pub star_count: u32,
    /// Radius of the star shell in scene units.
    pub radius: f32,
}

/// Pointer input configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Mouse sensitivity multiplier applied on top of the camera sensitivity.
    pub mouse_sensitivity: f32,
    /// Invert vertical drag.
    pub invert_y: bool,
    /// Maximum pointer travel in pixels for a press/release to count as a click.
    pub click_threshold_px: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Directory receiving generated textures as PNG files, if any.
    pub export_dir: Option<PathBuf>,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Mars Globe".to_string(),
        }
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            atmosphere_thickness: 0.04,
            atmosphere_color: [0.85, 0.45, 0.25],
            rim_power: 3.0,
            rim_intensity: 1.2,
            marker_radius: 0.02,
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: 2048,
            height: 1024,
            octaves: 4,
            base_cells: 8,
            crater_count: 400,
            ice_cap_fraction: 0.1,
            grit: 6.0,
            background: true,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_deg: 45.0,
            start_distance: 3.0,
            min_distance: 1.3,
            max_distance: 10.0,
            damping_factor: 0.1,
            enable_damping: true,
            enable_pan: false,
            rotate_sensitivity: 0.005,
            zoom_step: 0.95,
            pan_sensitivity: 0.001,
            min_polar: 0.1,
            max_polar: std::f32::consts::PI - 0.1,
            fly_duration_ms: 1500,
        }
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            time_scale: 500.0,
            altitude_scale: 0.35,
            clearance: 0.08,
            path_segments: 128,
        }
    }
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            star_count: 4000,
            radius: 80.0,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 1.0,
            invert_y: false,
            click_threshold_px: 4.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            export_dir: None,
        }
    }
}

/// Platform config directory for the viewer, e.g. `~/.config/mars-globe`.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mars-globe")
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("width: 1280"));
        assert!(ron_str.contains("crater_count: 400"));
        assert!(ron_str.contains("enable_damping: true"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.debug.export_dir = Some(PathBuf::from("out/textures"));
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(window: (), surface: (seed: 7))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.camera, CameraConfig::default());
        assert_eq!(config.surface.seed, 7);
        assert_eq!(config.surface.width, SurfaceConfig::default().width);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_default_polar_bounds_inside_open_interval() {
        let camera = CameraConfig::default();
        assert!(camera.min_polar > 0.0);
        assert!(camera.max_polar < std::f32::consts::PI);
        assert!(camera.min_polar < camera.max_polar);
        assert!(camera.min_distance < camera.start_distance);
        assert!(camera.start_distance < camera.max_distance);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.surface.seed = 1234;
        config.camera.enable_pan = true;
        config.orbit.time_scale = 0.0;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.surface.crater_count = 10;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.map(|c| c.surface.crater_count), Some(10));
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
