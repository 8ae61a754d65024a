//! Configuration for the Mars globe viewer.
//!
//! Settings persist to disk as a RON file and can be overridden from the
//! command line. Every section is `#[serde(default)]`, so older or partial
//! files keep loading as new fields appear.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, Config, DebugConfig, GlobeConfig, InputConfig, OrbitConfig, StarfieldConfig,
    SurfaceConfig, WindowConfig, default_config_dir,
};
pub use error::ConfigError;
