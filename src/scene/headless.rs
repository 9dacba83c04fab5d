//! In-memory scene objects
//!
//! Stand-ins for engine objects so the sequence can run without an engine,
//! e.g. in tests or the headless runner.

use crate::core::constants::{
    EXPOSURE_MAP_STRENGTH_PROPERTY, EXPOSURE_MASK_FALLOFF_STRENGTH_PROPERTY, LEFT_LOGO_ELEMENT,
    PARAGRAPH_ELEMENT, RIGHT_LOGO_ELEMENT, SMALL_LOGO_ELEMENTS, TOP_LEFT_LOGO_ELEMENT,
};
use crate::scene::handles::{
    shared, ActPanel, ActPanels, ActVisual, AudioSource, LensFlare, Light, Material, Shared,
    SplashScene,
};
use crate::ui::elements::{ElementTree, UiElement};
use fxhash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryMaterial {
    name: String,
    properties: FxHashMap<String, f32>,
}

impl MemoryMaterial {
    /// A material with no shader properties
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: FxHashMap::default(),
        }
    }

    /// A material exposing the exposure and falloff properties
    pub fn exposure(name: impl Into<String>) -> Self {
        Self::new(name)
            .with_property(EXPOSURE_MAP_STRENGTH_PROPERTY, 0.0)
            .with_property(EXPOSURE_MASK_FALLOFF_STRENGTH_PROPERTY, 0.0)
    }

    pub fn with_property(mut self, property: impl Into<String>, value: f32) -> Self {
        self.properties.insert(property.into(), value);
        self
    }
}

impl Material for MemoryMaterial {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_property(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    fn float(&self, property: &str) -> f32 {
        self.properties.get(property).copied().unwrap_or(0.0)
    }

    fn set_float(&mut self, property: &str, value: f32) {
        self.properties.insert(property.to_string(), value);
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryLight {
    intensity: f32,
}

impl MemoryLight {
    pub fn new(intensity: f32) -> Self {
        Self { intensity }
    }
}

impl Light for MemoryLight {
    fn intensity(&self) -> f32 {
        self.intensity
    }

    fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }
}

#[derive(Debug, Clone)]
pub struct MemoryLensFlare {
    scale: f32,
    intensity: f32,
    position_x: f32,
}

impl Default for MemoryLensFlare {
    fn default() -> Self {
        Self {
            scale: 1.0,
            intensity: 1.0,
            position_x: 0.0,
        }
    }
}

impl LensFlare for MemoryLensFlare {
    fn scale(&self) -> f32 {
        self.scale
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    fn intensity(&self) -> f32 {
        self.intensity
    }

    fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    fn local_position_x(&self) -> f32 {
        self.position_x
    }

    fn set_local_position_x(&mut self, x: f32) {
        self.position_x = x;
    }
}

#[derive(Debug, Clone)]
pub struct MemoryAudio {
    pitch: f32,
    playing: bool,
    /// Number of times `play` was called
    pub plays: u32,
    /// Number of times `stop` was called
    pub stops: u32,
}

impl Default for MemoryAudio {
    fn default() -> Self {
        Self {
            pitch: 1.0,
            playing: false,
            plays: 0,
            stops: 0,
        }
    }
}

impl AudioSource for MemoryAudio {
    fn pitch(&self) -> f32 {
        self.pitch
    }

    fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
    }

    fn play(&mut self) {
        self.playing = true;
        self.plays += 1;
    }

    fn stop(&mut self) {
        self.playing = false;
        self.stops += 1;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

#[derive(Debug, Clone)]
pub struct MemoryAct {
    active: bool,
    /// Number of times the act was switched on
    pub activations: u32,
}

impl Default for MemoryAct {
    fn default() -> Self {
        // Authored scenes usually leave the act containers enabled in the editor.
        Self {
            active: true,
            activations: 0,
        }
    }
}

impl ActVisual for MemoryAct {
    fn set_active(&mut self, active: bool) {
        if active && !self.active {
            self.activations += 1;
        }
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// A complete in-memory splash scene with typed handles for inspection
pub struct HeadlessRig {
    pub label_material: Shared<MemoryMaterial>,
    pub logo_material: Shared<MemoryMaterial>,
    pub outline_material: Shared<MemoryMaterial>,
    pub glow_triangle_material: Shared<MemoryMaterial>,
    pub white_light: Shared<MemoryLight>,
    pub green_light: Shared<MemoryLight>,
    pub logo_lens_flare: Shared<MemoryLensFlare>,
    pub green_light_lens_flare: Shared<MemoryLensFlare>,
    pub audio: Shared<MemoryAudio>,
    pub acts: [Shared<MemoryAct>; 3],
}

impl HeadlessRig {
    pub fn new() -> Self {
        Self {
            label_material: shared(MemoryMaterial::exposure("Label")),
            logo_material: shared(MemoryMaterial::exposure("Logo")),
            outline_material: shared(MemoryMaterial::exposure("LogoOutline")),
            glow_triangle_material: shared(MemoryMaterial::exposure("GlowTriangle")),
            white_light: shared(MemoryLight::new(1.0)),
            green_light: shared(MemoryLight::new(1.0)),
            logo_lens_flare: shared(MemoryLensFlare::default()),
            green_light_lens_flare: shared(MemoryLensFlare::default()),
            audio: shared(MemoryAudio::default()),
            acts: [
                shared(MemoryAct::default()),
                shared(MemoryAct::default()),
                shared(MemoryAct::default()),
            ],
        }
    }

    /// Scene handles over the rig's objects
    pub fn scene(&self) -> SplashScene {
        SplashScene {
            label_material: Some(self.label_material.clone()),
            logo_material: Some(self.logo_material.clone()),
            outline_material: Some(self.outline_material.clone()),
            glow_triangle_material: Some(self.glow_triangle_material.clone()),
            white_light: Some(self.white_light.clone()),
            green_light: Some(self.green_light.clone()),
            logo_lens_flare: Some(self.logo_lens_flare.clone()),
            green_light_lens_flare: Some(self.green_light_lens_flare.clone()),
            audio: Some(self.audio.clone()),
        }
    }

    /// Act containers plus the standard act 2 and act 3 panels
    pub fn panels(&self) -> ActPanels {
        let [act1, act2, act3] = &self.acts;
        ActPanels {
            act1: ActPanel {
                visual: Some(act1.clone()),
                document: None,
            },
            act2: ActPanel {
                visual: Some(act2.clone()),
                document: Some(act2_panel()),
            },
            act3: ActPanel {
                visual: Some(act3.clone()),
                document: Some(act3_panel()),
            },
        }
    }

    pub fn exposure(&self, material: &Shared<MemoryMaterial>) -> f32 {
        material.borrow().float(EXPOSURE_MAP_STRENGTH_PROPERTY)
    }

    pub fn falloff(&self, material: &Shared<MemoryMaterial>) -> f32 {
        material
            .borrow()
            .float(EXPOSURE_MASK_FALLOFF_STRENGTH_PROPERTY)
    }
}

impl Default for HeadlessRig {
    fn default() -> Self {
        Self::new()
    }
}

/// Act 2 panel with the elements the customizer binds
pub fn act2_panel() -> ElementTree {
    ElementTree::new()
        .with(TOP_LEFT_LOGO_ELEMENT, UiElement::visual())
        .with(LEFT_LOGO_ELEMENT, UiElement::visual())
        .with(RIGHT_LOGO_ELEMENT, UiElement::visual())
}

/// Act 3 panel with the elements the customizer binds
pub fn act3_panel() -> ElementTree {
    let mut tree = ElementTree::new()
        .with(TOP_LEFT_LOGO_ELEMENT, UiElement::visual())
        .with(PARAGRAPH_ELEMENT, UiElement::label());
    for name in SMALL_LOGO_ELEMENTS {
        tree.insert(name, UiElement::visual());
    }
    tree
}
