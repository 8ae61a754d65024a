//! Mars globe application: frame loop, platform directories and the
//! scripted headless session behind the `mars-globe` binary.

pub mod error;
pub mod frame_loop;
pub mod platform;
pub mod session;

pub use error::AppError;
pub use frame_loop::{FrameLoop, FrameStatus, MAX_FRAME_TIME};
pub use platform::PlatformDirs;
pub use session::{ScriptAction, ScriptedInput, Session, SessionReport, default_script};
