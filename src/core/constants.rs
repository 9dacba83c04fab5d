//! Core constants for the splash timeline.
//! Keeping them in a single place makes it easier to tweak sequence-wide magic numbers.

/// Shader property driven by the exposure tweens.
pub const EXPOSURE_MAP_STRENGTH_PROPERTY: &str = "_Exposure_Map_Strength";

/// Shader property for the exposure mask falloff.
pub const EXPOSURE_MASK_FALLOFF_STRENGTH_PROPERTY: &str = "_Exposure_Mask_Falloff_Strength";

/// Slowest allowed timeline speed (values multiply durations, so larger is slower).
pub const MIN_SPEED_MULTIPLIER: f32 = 0.1;

/// Fastest end of the speed multiplier range.
pub const MAX_SPEED_MULTIPLIER: f32 = 5.0;

/// Easing strength range: 0 is linear, 1 is smoothstep, 2 is full overdrive.
pub const MIN_SMOOTH_STRENGTH: f32 = 0.0;
pub const MAX_SMOOTH_STRENGTH: f32 = 2.0;

/// Logo lens flare scale before the reveal.
pub const LENS_FLARE_BASELINE_SCALE: f32 = 1.0;

/// Logo lens flare local X before it drifts across the logo.
pub const LENS_FLARE_BASELINE_X: f32 = -0.5;

/// The logo flare follows the green light at a tenth of its strength.
pub const LOGO_FLARE_INTENSITY_FACTOR: f32 = 0.1;

/// Frames yielded after resetting the scene, before the reveal cues launch.
pub const FRAMES_BEFORE_REVEAL: u32 = 1;

/// Frames yielded after the reveal cues launch, before act 1 starts.
pub const FRAMES_BEFORE_ACT1: u32 = 2;

/// Names of the act 2/3 elements the customizer binds.
pub const TOP_LEFT_LOGO_ELEMENT: &str = "TopLeftLogo";
pub const LEFT_LOGO_ELEMENT: &str = "LeftLogo";
pub const RIGHT_LOGO_ELEMENT: &str = "RightLogo";
pub const SMALL_LOGO_ELEMENTS: [&str; 4] = ["Logo1", "Logo2", "Logo3", "Logo4"];
pub const PARAGRAPH_ELEMENT: &str = "Paragraph";
