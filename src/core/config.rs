//! Author-time configuration for the splash sequence
//!
//! Everything here is plain data that can be loaded from JSON. Values outside
//! their supported range are clamped by [`SplashConfig::validated`] with a
//! warning rather than rejected.

use crate::animation::interpolation::Easing;
use crate::core::constants::{
    MAX_SMOOTH_STRENGTH, MAX_SPEED_MULTIPLIER, MIN_SMOOTH_STRENGTH, MIN_SPEED_MULTIPLIER,
};
use crate::ui::elements::ImageAsset;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The three timed acts shown after the logo reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Act {
    Act1,
    Act2,
    Act3,
}

impl Act {
    pub const ALL: [Act; 3] = [Act::Act1, Act::Act2, Act::Act3];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    /// Act durations in whole seconds, before speed scaling
    pub act1_duration: u32,
    pub act2_duration: u32,
    pub act3_duration: u32,
    /// Multiplies every duration and delay; larger values slow the timeline down
    pub speed_multiplier: f32,
    /// Blend between linear (0) and smoothstep (1); above 1 overdrives
    pub smooth_strength: f32,
    /// Peak intensity of the white point light during the reveal
    pub white_light_intensity: f32,
    /// Peak intensity of the green point light during the reveal
    pub green_light_intensity: f32,
    pub customizer: CustomizerConfig,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            act1_duration: 3,
            act2_duration: 4,
            act3_duration: 4,
            speed_multiplier: 1.0,
            smooth_strength: 1.0,
            white_light_intensity: 3.0,
            green_light_intensity: 2.0,
            customizer: CustomizerConfig::default(),
        }
    }
}

impl SplashConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Clamp out-of-range values, logging a warning for each one
    pub fn validated(mut self) -> Self {
        self.speed_multiplier = clamp_setting(
            "speed_multiplier",
            self.speed_multiplier,
            MIN_SPEED_MULTIPLIER,
            MAX_SPEED_MULTIPLIER,
        );
        self.smooth_strength = clamp_setting(
            "smooth_strength",
            self.smooth_strength,
            MIN_SMOOTH_STRENGTH,
            MAX_SMOOTH_STRENGTH,
        );
        self.white_light_intensity =
            clamp_setting("white_light_intensity", self.white_light_intensity, 0.0, f32::MAX);
        self.green_light_intensity =
            clamp_setting("green_light_intensity", self.green_light_intensity, 0.0, f32::MAX);
        self
    }

    pub fn easing(&self) -> Easing {
        Easing::new(self.smooth_strength)
    }

    /// Configured duration of an act in whole seconds
    pub fn act_duration(&self, act: Act) -> u32 {
        match act {
            Act::Act1 => self.act1_duration,
            Act::Act2 => self.act2_duration,
            Act::Act3 => self.act3_duration,
        }
    }

    /// How long an act stays visible: its duration scaled by the speed
    /// multiplier and rounded up to whole seconds
    pub fn scaled_act_duration(&self, act: Act) -> f32 {
        (self.act_duration(act) as f32 * self.speed_multiplier).ceil()
    }
}

fn clamp_setting(name: &str, value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        log::warn!("{} is NaN, using {}", name, min);
        return min;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::warn!("{} = {} is outside [{}, {}], using {}", name, value, min, max, clamped);
    }
    clamped
}

/// Text and images the customizer applies to the act 2 and act 3 panels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizerConfig {
    /// Act 3 paragraph text
    pub paragraph: String,
    pub top_left_logo: Option<ImageAsset>,
    pub left_logo: Option<ImageAsset>,
    pub right_logo: Option<ImageAsset>,
    /// `Logo1` through `Logo4` on the act 3 panel
    pub small_logos: [Option<ImageAsset>; 4],
}
