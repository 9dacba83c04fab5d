pub mod channels;
pub mod handles;
pub mod headless;
pub mod validation;

pub use handles::{
    shared, ActPanel, ActPanels, ActVisual, AudioSource, LensFlare, Light, LightSlot, Material,
    MaterialSlot, Shared, SplashScene,
};
pub use validation::{validate_scene, SceneWarning};
