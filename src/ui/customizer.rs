//! Splash customizer
//!
//! Binds configured images and text onto the act panels and forwards the
//! per-act and finalize notifications to user callbacks.

use crate::core::config::CustomizerConfig;
use crate::core::constants::{
    LEFT_LOGO_ELEMENT, PARAGRAPH_ELEMENT, RIGHT_LOGO_ELEMENT, SMALL_LOGO_ELEMENTS,
    TOP_LEFT_LOGO_ELEMENT,
};
use crate::ui::elements::{ElementTree, ImageAsset};

/// External collaborator notified as the sequence moves through its acts
pub trait SplashHost {
    fn on_act1_enabled(&mut self) {}

    /// Act 2 became visible; `root` is its panel if one was built
    fn on_act2_enabled(&mut self, _root: Option<&mut ElementTree>) {}

    /// Act 3 became visible; `root` is its panel if one was built
    fn on_act3_enabled(&mut self, _root: Option<&mut ElementTree>) {}

    /// The splash has ended, naturally or by skipping
    fn on_finalization(&mut self);
}

type Callback = Box<dyn FnMut()>;

/// Optional user callbacks fired by the customizer
#[derive(Default)]
pub struct SplashEvents {
    pub act1: Option<Callback>,
    pub act2: Option<Callback>,
    pub act3: Option<Callback>,
    pub finalized: Option<Callback>,
}

impl SplashEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_act1<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.act1 = Some(Box::new(callback));
        self
    }

    pub fn on_act2<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.act2 = Some(Box::new(callback));
        self
    }

    pub fn on_act3<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.act3 = Some(Box::new(callback));
        self
    }

    pub fn on_finalized<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.finalized = Some(Box::new(callback));
        self
    }
}

fn fire(callback: &mut Option<Callback>) {
    if let Some(callback) = callback.as_mut() {
        callback();
    }
}

/// Applies `image` to the named element when both exist
fn bind_image(root: &mut ElementTree, name: &str, image: Option<&ImageAsset>) {
    if let (Some(element), Some(image)) = (root.query(name), image) {
        log::debug!("{} <- {}", name, image.path());
        element.set_background_image(image);
    }
}

/// Default [`SplashHost`] driven by a [`CustomizerConfig`]
pub struct SplashCustomizer {
    config: CustomizerConfig,
    events: SplashEvents,
}

impl SplashCustomizer {
    pub fn new(config: CustomizerConfig) -> Self {
        Self {
            config,
            events: SplashEvents::default(),
        }
    }

    pub fn with_events(mut self, events: SplashEvents) -> Self {
        self.events = events;
        self
    }

    pub fn config(&self) -> &CustomizerConfig {
        &self.config
    }

    /// Bind the act 2 panel: top-left, left and right logos
    pub fn bind_act2(&self, root: &mut ElementTree) {
        let config = &self.config;
        bind_image(root, TOP_LEFT_LOGO_ELEMENT, config.top_left_logo.as_ref());
        bind_image(root, LEFT_LOGO_ELEMENT, config.left_logo.as_ref());
        bind_image(root, RIGHT_LOGO_ELEMENT, config.right_logo.as_ref());
    }

    /// Bind the act 3 panel: top-left logo, four small logos and the paragraph
    pub fn bind_act3(&self, root: &mut ElementTree) {
        let config = &self.config;
        bind_image(root, TOP_LEFT_LOGO_ELEMENT, config.top_left_logo.as_ref());

        for (name, image) in SMALL_LOGO_ELEMENTS.iter().zip(config.small_logos.iter()) {
            bind_image(root, name, image.as_ref());
        }

        if let Some(paragraph) = root.query_label(PARAGRAPH_ELEMENT) {
            paragraph.text = Some(config.paragraph.clone());
        }
    }
}

impl SplashHost for SplashCustomizer {
    fn on_act1_enabled(&mut self) {
        fire(&mut self.events.act1);
    }

    fn on_act2_enabled(&mut self, root: Option<&mut ElementTree>) {
        let Some(root) = root else {
            return;
        };
        self.bind_act2(root);
        fire(&mut self.events.act2);
    }

    fn on_act3_enabled(&mut self, root: Option<&mut ElementTree>) {
        let Some(root) = root else {
            return;
        };
        self.bind_act3(root);
        fire(&mut self.events.act3);
    }

    fn on_finalization(&mut self) {
        fire(&mut self.events.finalized);
    }
}
