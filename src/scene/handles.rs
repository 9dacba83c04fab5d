//! Engine-owned objects the splash sequence drives
//!
//! The sequence never owns these; it holds shared handles and only touches
//! them through the narrow traits below.

use crate::core::config::Act;
use crate::ui::elements::ElementTree;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to an engine object; everything runs on one cooperative context
pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// A material with named float shader properties
pub trait Material {
    fn name(&self) -> &str;
    fn has_property(&self, property: &str) -> bool;
    fn float(&self, property: &str) -> f32;
    fn set_float(&mut self, property: &str, value: f32);
}

pub trait Light {
    fn intensity(&self) -> f32;
    fn set_intensity(&mut self, intensity: f32);
}

/// A lens flare and the transform it is attached to
pub trait LensFlare {
    fn scale(&self) -> f32;
    fn set_scale(&mut self, scale: f32);
    fn intensity(&self) -> f32;
    fn set_intensity(&mut self, intensity: f32);
    fn local_position_x(&self) -> f32;
    fn set_local_position_x(&mut self, x: f32);
}

pub trait AudioSource {
    fn pitch(&self) -> f32;
    fn set_pitch(&mut self, pitch: f32);
    fn play(&mut self);
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

/// Container that shows or hides an act's visuals
pub trait ActVisual {
    fn set_active(&mut self, active: bool);
    fn is_active(&self) -> bool;
}

/// The four materials animated by the reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialSlot {
    Label,
    Logo,
    Outline,
    GlowTriangle,
}

impl MaterialSlot {
    pub const ALL: [MaterialSlot; 4] = [
        MaterialSlot::Label,
        MaterialSlot::Logo,
        MaterialSlot::Outline,
        MaterialSlot::GlowTriangle,
    ];
}

impl fmt::Display for MaterialSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MaterialSlot::Label => "label",
            MaterialSlot::Logo => "logo",
            MaterialSlot::Outline => "logo outline",
            MaterialSlot::GlowTriangle => "glow triangle",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightSlot {
    White,
    Green,
}

impl fmt::Display for LightSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightSlot::White => f.write_str("White Point Light"),
            LightSlot::Green => f.write_str("Green Point Light"),
        }
    }
}

/// Every engine object the reveal animates. Any of them may be absent.
#[derive(Default, Clone)]
pub struct SplashScene {
    pub label_material: Option<Shared<dyn Material>>,
    pub logo_material: Option<Shared<dyn Material>>,
    pub outline_material: Option<Shared<dyn Material>>,
    pub glow_triangle_material: Option<Shared<dyn Material>>,
    pub white_light: Option<Shared<dyn Light>>,
    pub green_light: Option<Shared<dyn Light>>,
    pub logo_lens_flare: Option<Shared<dyn LensFlare>>,
    pub green_light_lens_flare: Option<Shared<dyn LensFlare>>,
    pub audio: Option<Shared<dyn AudioSource>>,
}

impl SplashScene {
    pub fn material(&self, slot: MaterialSlot) -> Option<&Shared<dyn Material>> {
        match slot {
            MaterialSlot::Label => self.label_material.as_ref(),
            MaterialSlot::Logo => self.logo_material.as_ref(),
            MaterialSlot::Outline => self.outline_material.as_ref(),
            MaterialSlot::GlowTriangle => self.glow_triangle_material.as_ref(),
        }
    }

    pub fn light(&self, slot: LightSlot) -> Option<&Shared<dyn Light>> {
        match slot {
            LightSlot::White => self.white_light.as_ref(),
            LightSlot::Green => self.green_light.as_ref(),
        }
    }
}

/// One act: its visual container and, for acts 2 and 3, its UI panel
#[derive(Default)]
pub struct ActPanel {
    pub visual: Option<Shared<dyn ActVisual>>,
    pub document: Option<ElementTree>,
}

impl ActPanel {
    pub fn set_active(&self, active: bool) {
        if let Some(visual) = &self.visual {
            visual.borrow_mut().set_active(active);
        }
    }
}

#[derive(Default)]
pub struct ActPanels {
    pub act1: ActPanel,
    pub act2: ActPanel,
    pub act3: ActPanel,
}

impl ActPanels {
    pub fn get(&self, act: Act) -> &ActPanel {
        match act {
            Act::Act1 => &self.act1,
            Act::Act2 => &self.act2,
            Act::Act3 => &self.act3,
        }
    }

    pub fn get_mut(&mut self, act: Act) -> &mut ActPanel {
        match act {
            Act::Act1 => &mut self.act1,
            Act::Act2 => &mut self.act2,
            Act::Act3 => &mut self.act3,
        }
    }

    pub fn deactivate_all(&self) {
        for act in Act::ALL {
            self.get(act).set_active(false);
        }
    }
}
