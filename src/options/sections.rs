use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::{OverlapPolicy, SkipPolicy};
use crate::scene::Axis;
use crate::util::easing::EasingFunction;

/// A one-shot rotation fired when scrolling into `section`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct BindingOptions {
    /// Section index that triggers the rotation.
    pub section: usize,
    /// Index into `scene.meshes`.
    pub mesh: usize,
    /// Rotation axis.
    #[serde(default = "default_axis")]
    pub axis: Axis,
    /// Relative rotation in radians.
    pub delta: f64,
    /// Tween duration in seconds.
    pub duration_secs: f64,
    /// Tween curve.
    #[serde(default)]
    pub easing: EasingFunction,
}

fn default_axis() -> Axis {
    Axis::Y
}

/// Section bindings and the policies that govern how they fire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Sections", inline)]
#[serde(default)]
pub struct SectionOptions {
    /// What happens to sections jumped over by a single scroll event.
    #[schemars(title = "Skipped Sections")]
    pub skip_policy: SkipPolicy,
    /// What happens when a binding re-fires before its tween finished.
    #[schemars(title = "Overlapping Tweens")]
    pub overlap_policy: OverlapPolicy,
    /// Configured bindings; at most one per section.
    #[schemars(skip)]
    pub bindings: Vec<BindingOptions>,
}

impl Default for SectionOptions {
    fn default() -> Self {
        let spin = |section, mesh| BindingOptions {
            section,
            mesh,
            axis: Axis::Y,
            delta: 6.0,
            duration_secs: 1.5,
            easing: EasingFunction::DEFAULT,
        };
        Self {
            skip_policy: SkipPolicy::default(),
            overlap_policy: OverlapPolicy::default(),
            bindings: vec![spin(1, 1), spin(2, 2)],
        }
    }
}
