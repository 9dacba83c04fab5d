//! The logo reveal as data
//!
//! Every cue launches from the same origin; its delay is its offset on the
//! timeline. Durations and delays are in seconds before speed scaling.

use crate::animation::scheduler::Scheduler;
use crate::animation::tweening::PropertyChannel;
use crate::core::config::SplashConfig;
use crate::core::constants::{
    EXPOSURE_MAP_STRENGTH_PROPERTY, EXPOSURE_MASK_FALLOFF_STRENGTH_PROPERTY,
};
use crate::scene::channels::{self, LensFlarePositionX, LensFlareScale, MaterialFloat};
use crate::scene::handles::{LightSlot, MaterialSlot, SplashScene};

/// The property a cue animates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CueChannel {
    Exposure(MaterialSlot),
    ExposureFalloff(MaterialSlot),
    LightIntensity(LightSlot),
    LogoFlareScale,
    LogoFlarePositionX,
}

/// Where a cue ends up
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CueLevel {
    Fixed(f32),
    /// The configured peak intensity of a light
    LightPeak(LightSlot),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub channel: CueChannel,
    pub target: CueLevel,
    pub duration: f32,
    pub delay: f32,
}

const fn cue(channel: CueChannel, target: CueLevel, duration: f32, delay: f32) -> Cue {
    Cue {
        channel,
        target,
        duration,
        delay,
    }
}

use CueChannel::*;
use CueLevel::*;

pub const REVEAL_CUES: &[Cue] = &[
    // Outline appears, then fades.
    cue(ExposureFalloff(MaterialSlot::Outline), Fixed(1.5), 0.0, 0.0),
    cue(Exposure(MaterialSlot::Outline), Fixed(1.0), 1.5, 0.0),
    cue(ExposureFalloff(MaterialSlot::Outline), Fixed(5.0), 0.0, 2.25),
    cue(Exposure(MaterialSlot::Outline), Fixed(0.0), 1.0, 2.25),
    // Logo and label fade in.
    cue(Exposure(MaterialSlot::Logo), Fixed(1.0), 2.0, 2.5),
    cue(Exposure(MaterialSlot::Label), Fixed(1.0), 3.0, 2.5),
    // White light in and out.
    cue(LightIntensity(LightSlot::White), LightPeak(LightSlot::White), 1.0, 2.25),
    cue(LightIntensity(LightSlot::White), Fixed(0.0), 2.0, 4.75),
    // Glow triangle and green light in and out.
    cue(Exposure(MaterialSlot::GlowTriangle), Fixed(1.0), 2.0, 2.5),
    cue(LightIntensity(LightSlot::Green), LightPeak(LightSlot::Green), 2.0, 2.5),
    cue(Exposure(MaterialSlot::GlowTriangle), Fixed(0.0), 1.75, 4.5),
    cue(LightIntensity(LightSlot::Green), Fixed(0.0), 1.75, 4.5),
    // Big lens flare grows, shrinks and drifts.
    cue(LogoFlareScale, Fixed(2.0), 2.0, 2.5),
    cue(LogoFlareScale, Fixed(1.0), 1.75, 4.5),
    cue(LogoFlarePositionX, Fixed(-1.0), 4.0, 2.5),
];

impl Cue {
    pub fn target_value(&self, config: &SplashConfig) -> f32 {
        match self.target {
            CueLevel::Fixed(value) => value,
            CueLevel::LightPeak(LightSlot::White) => config.white_light_intensity,
            CueLevel::LightPeak(LightSlot::Green) => config.green_light_intensity,
        }
    }

    /// Channel for this cue, or `None` when its object is missing from the scene
    pub fn bind(&self, scene: &SplashScene) -> Option<Box<dyn PropertyChannel>> {
        let channel: Box<dyn PropertyChannel> = match self.channel {
            CueChannel::Exposure(slot) => Box::new(MaterialFloat::new(
                scene.material(slot),
                EXPOSURE_MAP_STRENGTH_PROPERTY,
            )?),
            CueChannel::ExposureFalloff(slot) => Box::new(MaterialFloat::new(
                scene.material(slot),
                EXPOSURE_MASK_FALLOFF_STRENGTH_PROPERTY,
            )?),
            CueChannel::LightIntensity(slot) => {
                Box::new(channels::LightIntensity::new(scene.light(slot))?)
            }
            CueChannel::LogoFlareScale => {
                Box::new(LensFlareScale::new(scene.logo_lens_flare.as_ref())?)
            }
            CueChannel::LogoFlarePositionX => {
                Box::new(LensFlarePositionX::new(scene.logo_lens_flare.as_ref())?)
            }
        };
        Some(channel)
    }
}

/// Schedule every cue whose target exists. Returns how many were scheduled.
pub fn launch_cues(
    cues: &[Cue],
    scheduler: &mut Scheduler,
    scene: &SplashScene,
    config: &SplashConfig,
) -> usize {
    let mut launched = 0;
    for cue in cues {
        if let Some(channel) = cue.bind(scene) {
            scheduler.tween(None, cue.target_value(config), cue.duration, cue.delay, channel);
            launched += 1;
        }
    }
    log::debug!("launched {} of {} reveal cues", launched, cues.len());
    launched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::headless::HeadlessRig;

    #[test]
    fn test_reveal_ends_by_six_and_three_quarter_seconds() {
        let end = REVEAL_CUES
            .iter()
            .map(|cue| cue.delay + cue.duration)
            .fold(0.0_f32, f32::max);
        assert_eq!(end, 6.75);
    }

    #[test]
    fn test_light_peaks_come_from_config() {
        let config = SplashConfig {
            white_light_intensity: 4.0,
            green_light_intensity: 2.5,
            ..Default::default()
        };
        let peaks: Vec<f32> = REVEAL_CUES
            .iter()
            .filter(|cue| matches!(cue.target, CueLevel::LightPeak(_)))
            .map(|cue| cue.target_value(&config))
            .collect();
        assert_eq!(peaks, vec![4.0, 2.5]);
    }

    #[test]
    fn test_missing_objects_are_never_scheduled() {
        let rig = HeadlessRig::new();
        let mut scene = rig.scene();
        scene.logo_lens_flare = None;
        scene.white_light = None;

        let mut scheduler = Scheduler::new();
        let launched = launch_cues(REVEAL_CUES, &mut scheduler, &scene, &SplashConfig::default());

        // Three flare cues and two white light cues are skipped.
        assert_eq!(launched, REVEAL_CUES.len() - 5);
        assert_eq!(scheduler.active_count(), launched);
    }
}
