//! Prelude module for common splash-timeline types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use splash_timeline::prelude::*;`

pub use crate::animation::{
    interpolation::{smooth_step_overdrive, Easing, Interpolation},
    scheduler::{Scheduler, Task, TaskId},
    tweening::{PropertyChannel, Setter, TaskState, Tween},
};

pub use crate::core::config::{Act, CustomizerConfig, SplashConfig};

pub use crate::scene::{
    handles::{
        shared, ActPanel, ActPanels, ActVisual, AudioSource, LensFlare, Light, LightSlot,
        Material, MaterialSlot, Shared, SplashScene,
    },
    validation::{validate_scene, SceneWarning},
};

pub use crate::sequence::{
    choreography::{Cue, CueChannel, CueLevel, REVEAL_CUES},
    interrupt::{FrameInput, LoadingFlag},
    timeline::{SplashSequence, Stage},
};

pub use crate::ui::{
    customizer::{SplashCustomizer, SplashEvents, SplashHost},
    elements::{ElementKind, ElementTree, ImageAsset, UiElement},
};

pub use crate::runtime::{run_blocking, FrameClock};

#[cfg(feature = "tokio-runtime")]
pub use crate::runtime::run_realtime;

pub use crate::{Error as SplashError, Result};
