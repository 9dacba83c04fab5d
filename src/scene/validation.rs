use crate::core::constants::EXPOSURE_MAP_STRENGTH_PROPERTY;
use crate::scene::handles::{LightSlot, MaterialSlot, SplashScene};

/// Problems found in an authored scene. None of them stop the sequence;
/// the affected effect is simply skipped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneWarning {
    #[error("A Material is missing ({0}).")]
    MissingMaterial(MaterialSlot),

    #[error("Material '{material}' does not have property '{property}'.")]
    MissingProperty {
        material: String,
        property: &'static str,
    },

    #[error("{0} is not assigned.")]
    MissingLight(LightSlot),
}

/// Check the scene once at startup and log a warning for each problem
pub fn validate_scene(scene: &SplashScene) -> Vec<SceneWarning> {
    let mut warnings = Vec::new();

    for slot in MaterialSlot::ALL {
        match scene.material(slot) {
            None => warnings.push(SceneWarning::MissingMaterial(slot)),
            Some(material) => {
                let material = material.borrow();
                if !material.has_property(EXPOSURE_MAP_STRENGTH_PROPERTY) {
                    warnings.push(SceneWarning::MissingProperty {
                        material: material.name().to_string(),
                        property: EXPOSURE_MAP_STRENGTH_PROPERTY,
                    });
                }
            }
        }
    }

    for slot in [LightSlot::White, LightSlot::Green] {
        if scene.light(slot).is_none() {
            warnings.push(SceneWarning::MissingLight(slot));
        }
    }

    for warning in &warnings {
        log::warn!("{}", warning);
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::handles::shared;
    use crate::scene::headless::{HeadlessRig, MemoryMaterial};

    #[test]
    fn test_complete_scene_has_no_warnings() {
        let rig = HeadlessRig::new();
        assert!(validate_scene(&rig.scene()).is_empty());
    }

    #[test]
    fn test_reports_missing_objects_and_properties() {
        let rig = HeadlessRig::new();
        let mut scene = rig.scene();
        scene.logo_material = None;
        scene.label_material = Some(shared(MemoryMaterial::new("Unlit")));
        scene.green_light = None;

        let warnings = validate_scene(&scene);
        assert_eq!(
            warnings,
            vec![
                SceneWarning::MissingProperty {
                    material: "Unlit".to_string(),
                    property: EXPOSURE_MAP_STRENGTH_PROPERTY,
                },
                SceneWarning::MissingMaterial(MaterialSlot::Logo),
                SceneWarning::MissingLight(LightSlot::Green),
            ]
        );
        assert_eq!(
            warnings[2].to_string(),
            "Green Point Light is not assigned."
        );
    }
}
