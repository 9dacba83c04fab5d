//! Property channels binding tweens to scene objects
//!
//! The constructors double as the capability check: an absent object (or a
//! material without the exposure property) yields `None` and the tween is
//! never scheduled.

use crate::animation::tweening::PropertyChannel;
use crate::core::constants::EXPOSURE_MAP_STRENGTH_PROPERTY;
use crate::scene::handles::{LensFlare, Light, Material, Shared};

/// Whether a material can be driven by the reveal
pub fn is_valid_material(material: &Shared<dyn Material>) -> bool {
    material
        .borrow()
        .has_property(EXPOSURE_MAP_STRENGTH_PROPERTY)
}

/// A float shader property on a material
pub struct MaterialFloat {
    material: Shared<dyn Material>,
    property: &'static str,
}

impl MaterialFloat {
    pub fn new(material: Option<&Shared<dyn Material>>, property: &'static str) -> Option<Self> {
        let material = material.filter(|m| is_valid_material(m))?;
        Some(Self {
            material: material.clone(),
            property,
        })
    }
}

impl PropertyChannel for MaterialFloat {
    fn read(&self) -> f32 {
        self.material.borrow().float(self.property)
    }

    fn write(&mut self, value: f32) {
        self.material.borrow_mut().set_float(self.property, value);
    }
}

/// Light intensity, never written below zero
pub struct LightIntensity {
    light: Shared<dyn Light>,
}

impl LightIntensity {
    pub fn new(light: Option<&Shared<dyn Light>>) -> Option<Self> {
        light.map(|light| Self {
            light: light.clone(),
        })
    }
}

impl PropertyChannel for LightIntensity {
    fn read(&self) -> f32 {
        self.light.borrow().intensity()
    }

    fn write(&mut self, value: f32) {
        self.light.borrow_mut().set_intensity(value.max(0.0));
    }
}

pub struct LensFlareScale {
    flare: Shared<dyn LensFlare>,
}

impl LensFlareScale {
    pub fn new(flare: Option<&Shared<dyn LensFlare>>) -> Option<Self> {
        flare.map(|flare| Self {
            flare: flare.clone(),
        })
    }
}

impl PropertyChannel for LensFlareScale {
    fn read(&self) -> f32 {
        self.flare.borrow().scale()
    }

    fn write(&mut self, value: f32) {
        self.flare.borrow_mut().set_scale(value);
    }
}

/// Local X of the transform carrying a lens flare
pub struct LensFlarePositionX {
    flare: Shared<dyn LensFlare>,
}

impl LensFlarePositionX {
    pub fn new(flare: Option<&Shared<dyn LensFlare>>) -> Option<Self> {
        flare.map(|flare| Self {
            flare: flare.clone(),
        })
    }
}

impl PropertyChannel for LensFlarePositionX {
    fn read(&self) -> f32 {
        self.flare.borrow().local_position_x()
    }

    fn write(&mut self, value: f32) {
        self.flare.borrow_mut().set_local_position_x(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::handles::shared;
    use crate::scene::headless::{MemoryLight, MemoryMaterial};

    #[test]
    fn test_material_channel_requires_exposure_property() {
        let plain: Shared<dyn Material> = shared(MemoryMaterial::new("plain"));
        assert!(MaterialFloat::new(Some(&plain), EXPOSURE_MAP_STRENGTH_PROPERTY).is_none());
        assert!(MaterialFloat::new(None, EXPOSURE_MAP_STRENGTH_PROPERTY).is_none());

        let exposed: Shared<dyn Material> = shared(MemoryMaterial::exposure("logo"));
        let mut channel = MaterialFloat::new(Some(&exposed), EXPOSURE_MAP_STRENGTH_PROPERTY)
            .expect("material exposes the property");
        channel.write(0.75);
        assert_eq!(channel.read(), 0.75);
    }

    #[test]
    fn test_light_channel_clamps_negative() {
        let light: Shared<dyn Light> = shared(MemoryLight::new(1.0));
        let mut channel = LightIntensity::new(Some(&light)).unwrap();
        channel.write(-0.3);
        assert_eq!(light.borrow().intensity(), 0.0);
    }
}
