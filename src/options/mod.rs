//! Centralized scene/controller options with TOML preset support.
//!
//! All tweakable settings (camera motion, particles, scene content,
//! lighting, section bindings) are consolidated here. Options serialize
//! to/from TOML so a page can ship its scene as a preset file.

mod camera;
mod lighting;
mod particles;
mod scene;
mod sections;

use std::collections::BTreeSet;
use std::path::Path;
use std::time::Duration;

pub use camera::CameraOptions;
pub use lighting::LightingOptions;
pub use particles::ParticleOptions;
pub use scene::{GroundOptions, MeshOptions, SceneOptions};
pub use sections::{BindingOptions, SectionOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ParallaxError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and scroll-driven motion.
    pub camera: CameraOptions,
    /// Particle shell parameters.
    pub particles: ParticleOptions,
    /// Meshes, ground and per-frame mesh motion.
    pub scene: SceneOptions,
    /// Static lights.
    pub lighting: LightingOptions,
    /// Section bindings.
    pub sections: SectionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ParallaxError> {
        toml::from_str(content)
            .map_err(|e| ParallaxError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ParallaxError> {
        let content =
            std::fs::read_to_string(path).map_err(ParallaxError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ParallaxError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ParallaxError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ParallaxError::Io)?;
        }
        std::fs::write(path, content).map_err(ParallaxError::Io)
    }

    /// Reject option sets that cannot describe a working scene.
    pub fn validate(&self) -> Result<(), ParallaxError> {
        let invalid = |msg: String| Err(ParallaxError::InvalidOptions(msg));

        let cam = &self.camera;
        let smoothing_ok = cam.smoothing > 0.0 && cam.smoothing <= 1.0;
        if !smoothing_ok {
            return invalid(format!(
                "camera.smoothing must be in (0, 1], got {}",
                cam.smoothing
            ));
        }
        let fovy_ok = cam.fovy > 0.0 && cam.fovy < 180.0;
        if !fovy_ok {
            return invalid(format!("camera.fovy out of range: {}", cam.fovy));
        }
        let clip_ok = cam.znear > 0.0 && cam.zfar > cam.znear;
        if !clip_ok {
            return invalid(format!(
                "camera clip planes must satisfy 0 < znear < zfar, got {} / {}",
                cam.znear, cam.zfar
            ));
        }
        let finite = [
            cam.base_depth,
            cam.scroll_to_depth,
            cam.bob_amplitude,
            cam.bob_frequency,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return invalid("camera motion parameters must be finite".into());
        }

        let p = &self.particles;
        let band_ok = p.min_radius >= 0.0
            && p.min_radius < p.max_radius
            && p.max_radius.is_finite();
        if !band_ok {
            return invalid(format!(
                "particles need 0 <= min_radius < max_radius, got {} / {}",
                p.min_radius, p.max_radius
            ));
        }

        let scene = &self.scene;
        if !(scene.spin_rate.is_finite() && scene.bob_amplitude.is_finite()) {
            return invalid("scene spin and bob must be finite".into());
        }

        let ratio_ok = scene.max_pixel_ratio >= 1.0;
        if !ratio_ok {
            return invalid(format!(
                "scene.max_pixel_ratio must be >= 1, got {}",
                scene.max_pixel_ratio
            ));
        }

        self.validate_bindings()
    }

    fn validate_bindings(&self) -> Result<(), ParallaxError> {
        let mesh_count = self.scene.meshes.len();
        let mut seen = BTreeSet::new();
        for binding in &self.sections.bindings {
            if binding.mesh >= mesh_count {
                return Err(ParallaxError::InvalidOptions(format!(
                    "section {} binds mesh {} but the scene has {mesh_count}",
                    binding.section, binding.mesh
                )));
            }
            let duration_ok =
                Duration::try_from_secs_f64(binding.duration_secs).is_ok();
            if !duration_ok {
                return Err(ParallaxError::InvalidOptions(format!(
                    "section {} has invalid duration {}",
                    binding.section, binding.duration_secs
                )));
            }
            if !binding.delta.is_finite() {
                return Err(ParallaxError::InvalidOptions(format!(
                    "section {} has non-finite delta",
                    binding.section
                )));
            }
            if !seen.insert(binding.section) {
                return Err(ParallaxError::InvalidOptions(format!(
                    "section {} is bound more than once",
                    binding.section
                )));
            }
        }
        Ok(())
    }

    /// List preset names (TOML file stems) in `dir`, sorted.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
