pub mod customizer;
pub mod elements;

pub use customizer::{SplashCustomizer, SplashEvents, SplashHost};
pub use elements::{ElementKind, ElementTree, ImageAsset, UiElement};
