//! Section transition animator.
//!
//! Maps section indices to one-shot rotation tweens. Entering a bound
//! section requests its tween exactly once; entering an unbound section
//! (including section 0, the implicit start) does nothing.

use std::collections::BTreeMap;
use std::time::Duration;

use rustc_hash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::tween::{RotationRequest, TweenId, Tweener};
use crate::options::SectionOptions;
use crate::scene::{Axis, MeshId};
use crate::scroll::SectionChange;
use crate::util::easing::EasingFunction;

/// What happens to sections jumped over by a single scroll event.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SkipPolicy {
    /// Only the section landed on fires; crossed bindings are lost.
    #[default]
    ArrivalOnly,
    /// Every crossed binding fires in crossing order, then the arrival.
    EnumerateCrossed,
}

/// What happens when a binding fires again before its tween finished.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Both tweens run to completion and their rotations add up.
    #[default]
    Compose,
    /// The earlier tween is cancelled (keeping its partial rotation) before
    /// the new one starts.
    Supersede,
}

/// Rotation fired on entry into one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBinding {
    /// Mesh to rotate.
    pub target: MeshId,
    /// Rotation axis.
    pub axis: Axis,
    /// Relative rotation in radians.
    pub delta: f64,
    /// Tween length.
    pub duration: Duration,
    /// Tween curve.
    pub easing: EasingFunction,
}

impl SectionBinding {
    fn request(&self) -> RotationRequest {
        RotationRequest {
            target: self.target,
            axis: self.axis,
            delta: self.delta,
            duration: self.duration,
            easing: self.easing,
        }
    }
}

/// Ordered, read-only section → binding table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionBindings {
    by_section: BTreeMap<usize, SectionBinding>,
}

impl SectionBindings {
    /// Build from `(section, binding)` pairs; later duplicates win.
    #[must_use]
    pub fn new(
        bindings: impl IntoIterator<Item = (usize, SectionBinding)>,
    ) -> Self {
        Self {
            by_section: bindings.into_iter().collect(),
        }
    }

    /// Build from options. Assumes they passed validation; a duration that
    /// does not fit a [`Duration`] becomes an instant tween.
    #[must_use]
    pub fn from_options(options: &SectionOptions) -> Self {
        Self::new(options.bindings.iter().map(|b| {
            (
                b.section,
                SectionBinding {
                    target: MeshId(b.mesh),
                    axis: b.axis,
                    delta: b.delta,
                    duration: Duration::try_from_secs_f64(b.duration_secs)
                        .unwrap_or_default(),
                    easing: b.easing,
                },
            )
        }))
    }

    /// Binding for `section`, if any.
    #[must_use]
    pub fn get(&self, section: usize) -> Option<&SectionBinding> {
        self.by_section.get(&section)
    }

    /// Bound sections in ascending order.
    pub fn sections(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_section.keys().copied()
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_section.len()
    }

    /// Whether no section is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_section.is_empty()
    }
}

/// Fires section bindings on [`SectionChange`] notifications.
#[derive(Debug, Clone)]
pub struct SectionAnimator {
    bindings: SectionBindings,
    skip_policy: SkipPolicy,
    overlap_policy: OverlapPolicy,
    /// Latest handle per section; only tracked under `Supersede`.
    in_flight: FxHashMap<usize, TweenId>,
}

impl SectionAnimator {
    /// Animator over `bindings` with the given policies.
    #[must_use]
    pub fn new(
        bindings: SectionBindings,
        skip_policy: SkipPolicy,
        overlap_policy: OverlapPolicy,
    ) -> Self {
        Self {
            bindings,
            skip_policy,
            overlap_policy,
            in_flight: FxHashMap::default(),
        }
    }

    /// Animator configured from options.
    #[must_use]
    pub fn from_options(options: &SectionOptions) -> Self {
        Self::new(
            SectionBindings::from_options(options),
            options.skip_policy,
            options.overlap_policy,
        )
    }

    /// The binding table.
    #[must_use]
    pub fn bindings(&self) -> &SectionBindings {
        &self.bindings
    }

    /// React to a section change. Returns how many tweens were requested.
    pub fn on_section_change<T: Tweener + ?Sized>(
        &mut self,
        change: SectionChange,
        tweener: &mut T,
    ) -> usize {
        let mut fired = 0;
        if self.skip_policy == SkipPolicy::EnumerateCrossed {
            for section in change.crossed() {
                fired += usize::from(self.fire(section, tweener));
            }
        }
        fired += usize::from(self.fire(change.to, tweener));
        fired
    }

    fn fire<T: Tweener + ?Sized>(
        &mut self,
        section: usize,
        tweener: &mut T,
    ) -> bool {
        let Some(binding) = self.bindings.get(section) else {
            return false;
        };
        let request = binding.request();

        if self.overlap_policy == OverlapPolicy::Supersede {
            if let Some(previous) = self.in_flight.remove(&section) {
                if tweener.cancel(previous) {
                    log::debug!("section {section}: superseded {previous:?}");
                }
            }
        }

        let id = tweener.animate_rotation(request);
        log::info!(
            "section {section}: mesh {} += {} rad about {:?} over {:?}",
            request.target.0,
            request.delta,
            request.axis,
            request.duration
        );

        if self.overlap_policy == OverlapPolicy::Supersede {
            let _ = self.in_flight.insert(section, id);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::tween::TweenEngine;
    use crate::options::Options;

    /// Records requests instead of animating them.
    #[derive(Default)]
    struct RecordingTweener {
        requests: Vec<RotationRequest>,
        cancelled: Vec<TweenId>,
        inner: TweenEngine,
    }

    impl Tweener for RecordingTweener {
        fn animate_rotation(&mut self, request: RotationRequest) -> TweenId {
            self.requests.push(request);
            self.inner.animate_rotation(request)
        }

        fn cancel(&mut self, id: TweenId) -> bool {
            self.cancelled.push(id);
            self.inner.cancel(id)
        }
    }

    fn default_animator() -> SectionAnimator {
        SectionAnimator::from_options(&Options::default().sections)
    }

    #[test]
    fn section_one_fires_configured_binding_once() {
        let mut animator = default_animator();
        let mut tweener = RecordingTweener::default();
        let fired = animator
            .on_section_change(SectionChange { from: 0, to: 1 }, &mut tweener);
        assert_eq!(fired, 1);
        assert_eq!(
            tweener.requests,
            vec![RotationRequest {
                target: MeshId(1),
                axis: Axis::Y,
                delta: 6.0,
                duration: Duration::from_millis(1500),
                easing: EasingFunction::QuadraticOut,
            }]
        );
    }

    #[test]
    fn unbound_section_is_a_no_op() {
        let mut animator = default_animator();
        let mut tweener = RecordingTweener::default();
        for change in [
            SectionChange { from: 1, to: 0 },
            SectionChange { from: 2, to: 7 },
        ] {
            assert_eq!(animator.on_section_change(change, &mut tweener), 0);
        }
        assert!(tweener.requests.is_empty());
    }

    #[test]
    fn skipped_section_never_fires_by_default() {
        let mut animator = default_animator();
        let mut tweener = RecordingTweener::default();
        let fired = animator
            .on_section_change(SectionChange { from: 0, to: 2 }, &mut tweener);
        assert_eq!(fired, 1);
        assert_eq!(tweener.requests.len(), 1);
        assert_eq!(tweener.requests[0].target, MeshId(2));
    }

    #[test]
    fn enumerate_crossed_fires_in_crossing_order() {
        let mut options = Options::default().sections;
        options.skip_policy = SkipPolicy::EnumerateCrossed;
        let mut animator = SectionAnimator::from_options(&options);
        let mut tweener = RecordingTweener::default();

        let fired = animator
            .on_section_change(SectionChange { from: 0, to: 3 }, &mut tweener);
        assert_eq!(fired, 2);
        let targets: Vec<_> =
            tweener.requests.iter().map(|r| r.target).collect();
        assert_eq!(targets, vec![MeshId(1), MeshId(2)]);

        tweener.requests.clear();
        let _ = animator
            .on_section_change(SectionChange { from: 3, to: 0 }, &mut tweener);
        let targets: Vec<_> =
            tweener.requests.iter().map(|r| r.target).collect();
        assert_eq!(targets, vec![MeshId(2), MeshId(1)]);
    }

    #[test]
    fn compose_never_cancels() {
        let mut animator = default_animator();
        let mut tweener = RecordingTweener::default();
        for change in [
            SectionChange { from: 0, to: 1 },
            SectionChange { from: 1, to: 0 },
            SectionChange { from: 0, to: 1 },
        ] {
            let _ = animator.on_section_change(change, &mut tweener);
        }
        assert_eq!(tweener.requests.len(), 2);
        assert!(tweener.cancelled.is_empty());
        assert_eq!(tweener.inner.active_count(), 2);
    }

    #[test]
    fn supersede_cancels_previous_handle_for_same_section() {
        let mut options = Options::default().sections;
        options.overlap_policy = OverlapPolicy::Supersede;
        let mut animator = SectionAnimator::from_options(&options);
        let mut tweener = RecordingTweener::default();

        let _ = animator
            .on_section_change(SectionChange { from: 0, to: 1 }, &mut tweener);
        let _ = animator
            .on_section_change(SectionChange { from: 1, to: 2 }, &mut tweener);
        let _ = animator
            .on_section_change(SectionChange { from: 2, to: 1 }, &mut tweener);

        // Only section 1's earlier tween was cancelled; section 2's runs on.
        assert_eq!(tweener.cancelled.len(), 1);
        assert_eq!(tweener.inner.active_count(), 2);
    }

    #[test]
    fn unrepresentable_duration_becomes_instant() {
        let mut options = Options::default().sections;
        options.bindings[0].duration_secs = 1e20;
        let bindings = SectionBindings::from_options(&options);
        assert_eq!(bindings.get(1).map(|b| b.duration), Some(Duration::ZERO));
    }

    #[test]
    fn bindings_are_ordered() {
        let animator = default_animator();
        assert_eq!(animator.bindings().sections().collect::<Vec<_>>(), [1, 2]);
        assert_eq!(animator.bindings().len(), 2);
        assert!(animator.bindings().get(0).is_none());
    }
}
