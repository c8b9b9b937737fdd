//! Section-triggered rotation animations.

pub mod sections;
pub mod tween;

pub use sections::{
    OverlapPolicy, SectionAnimator, SectionBinding, SectionBindings,
    SkipPolicy,
};
pub use tween::{RotationRequest, TweenEngine, TweenId, Tweener};
