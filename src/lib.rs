//! # splash-timeline
//!
//! A scripted splash-screen sequence for game engines.
//!
//! The core is a small tween scheduler: many delayed, eased scalar
//! interpolations advanced together from one frame clock, with global
//! cancellation. On top of it sits the splash itself: a fixed reveal
//! choreography of materials, lights and lens flares, three timed acts with
//! UI panels, a wait for external loading, and a skip-on-input escape path.

pub mod animation;
pub mod core;
pub mod prelude;
pub mod runtime;
pub mod scene;
pub mod sequence;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use animation::{Easing, Scheduler, Task, TaskId, TaskState, Tween};
pub use crate::core::config::{Act, CustomizerConfig, SplashConfig};
pub use scene::{SceneWarning, SplashScene};
pub use sequence::{FrameInput, LoadingFlag, SplashSequence, Stage};
pub use ui::{SplashCustomizer, SplashEvents, SplashHost};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, SplashError>;

/// Errors from the library's fallible outer surface. The animation core
/// itself never fails; missing scene objects only skip their effect.
#[derive(Debug, thiserror::Error)]
pub enum SplashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = SplashError;

/// Route `log` output to stderr, filtered by `RUST_LOG`.
///
/// Safe to call more than once.
#[cfg(feature = "debug")]
pub fn init_debug_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .is_test(cfg!(test))
        .try_init();
}
