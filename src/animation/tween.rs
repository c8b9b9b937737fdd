//! Relative rotation tweens: the fire-and-forget animation service.
//!
//! A tween adds `delta * easing(t)` to one rotation component over its
//! duration. Tweens never read the property they write, they only add the
//! difference since their previous step, so any number of tweens on the same
//! mesh compose additively and each lands its full delta.

use std::time::Duration;

use serde::Serialize;

use crate::scene::{Axis, MeshId, Mesh};
use crate::util::easing::EasingFunction;

/// Opaque handle to one in-flight tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TweenId(u64);

/// "Rotate `target` about `axis` by `delta` radians over `duration`."
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationRequest {
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

/// Boundary to the tweening service.
///
/// Requests are fire-and-forget: the caller gets a handle but no progress
/// feedback. Cancellation is optional hardening and stops the tween where it
/// is, keeping the rotation applied so far.
pub trait Tweener {
    /// Start a relative rotation tween.
    fn animate_rotation(&mut self, request: RotationRequest) -> TweenId;

    /// Stop a tween. Returns `false` if it already finished or never existed.
    fn cancel(&mut self, id: TweenId) -> bool;
}

#[derive(Debug, Clone)]
struct ActiveTween {
    id: TweenId,
    request: RotationRequest,
    /// Host time of the first step; set on the first `advance`.
    started_at: Option<f64>,
    /// Rotation added to the mesh so far.
    applied: f64,
}

impl ActiveTween {
    /// Rotation this tween should have added by `now`, and whether it is
    /// done.
    fn sample(&mut self, now: f64) -> (f64, bool) {
        let start = *self.started_at.get_or_insert(now);
        let duration = self.request.duration.as_secs_f64();
        let t = if duration > 0.0 {
            ((now - start) / duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let done = t >= 1.0;
        let amount = if done {
            self.request.delta
        } else {
            self.request.delta * self.request.easing.evaluate(t)
        };
        (amount, done)
    }
}

/// Default [`Tweener`]: steps every tween once per rendered frame.
///
/// A tween requested between frames starts on the next
/// [`advance`](Self::advance), so its first step is always at progress zero.
#[derive(Debug, Default)]
pub struct TweenEngine {
    active: Vec<ActiveTween>,
    next_id: u64,
}

impl TweenEngine {
    /// Engine with nothing in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tweens still running.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Whether `id` is still running.
    #[must_use]
    pub fn is_active(&self, id: TweenId) -> bool {
        self.active.iter().any(|t| t.id == id)
    }

    /// Step every tween to host time `now` (seconds), writing into `meshes`.
    ///
    /// Returns the number of tweens that finished during this step.
    pub fn advance(&mut self, now: f64, meshes: &mut [Mesh]) -> usize {
        let before = self.active.len();
        self.active.retain_mut(|tween| {
            let Some(mesh) = meshes.get_mut(tween.request.target.0) else {
                log::warn!(
                    "tween {:?} targets missing mesh {}, dropping",
                    tween.id,
                    tween.request.target.0
                );
                return false;
            };
            let (amount, done) = tween.sample(now);
            *mesh.rotation_mut(tween.request.axis) += amount - tween.applied;
            tween.applied = amount;
            !done
        });
        before - self.active.len()
    }
}

impl Tweener for TweenEngine {
    fn animate_rotation(&mut self, request: RotationRequest) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.active.push(ActiveTween {
            id,
            request,
            started_at: None,
            applied: 0.0,
        });
        id
    }

    fn cancel(&mut self, id: TweenId) -> bool {
        let before = self.active.len();
        self.active.retain(|t| t.id != id);
        before != self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;

    fn meshes(n: usize) -> Vec<Mesh> {
        (0..n)
            .map(|_| Mesh {
                size: 1.0,
                color: [1.0; 3],
                base_position: DVec3::ZERO,
                position: DVec3::ZERO,
                rotation: DVec3::ZERO,
            })
            .collect()
    }

    fn spin(target: usize, easing: EasingFunction) -> RotationRequest {
        RotationRequest {
            target: MeshId(target),
            axis: Axis::Y,
            delta: 6.0,
            duration: Duration::from_millis(1500),
            easing,
        }
    }

    #[test]
    fn tween_starts_on_first_advance_and_lands_exactly() {
        let mut engine = TweenEngine::new();
        let mut scene = meshes(2);
        let id = engine.animate_rotation(spin(1, EasingFunction::Linear));

        // Requested at some arbitrary point; the first step is progress 0.
        assert_eq!(engine.advance(10.0, &mut scene), 0);
        assert_eq!(scene[1].rotation.y, 0.0);

        let _ = engine.advance(10.75, &mut scene);
        assert!((scene[1].rotation.y - 3.0).abs() < 1e-9);

        assert_eq!(engine.advance(11.5, &mut scene), 1);
        assert!((scene[1].rotation.y - 6.0).abs() < 1e-9);
        assert!(!engine.is_active(id));
        assert_eq!(scene[0].rotation, DVec3::ZERO);
    }

    #[test]
    fn eased_progress_is_applied() {
        let mut engine = TweenEngine::new();
        let mut scene = meshes(1);
        let _ = engine.animate_rotation(spin(0, EasingFunction::QuadraticOut));
        let _ = engine.advance(0.0, &mut scene);
        let _ = engine.advance(0.75, &mut scene);
        // quadratic ease-out at t = 0.5 is 0.75
        assert!((scene[0].rotation.y - 4.5).abs() < 1e-9);
    }

    #[test]
    fn overlapping_tweens_compose_additively() {
        let mut engine = TweenEngine::new();
        let mut scene = meshes(1);
        let _ = engine.animate_rotation(spin(0, EasingFunction::DEFAULT));
        let _ = engine.advance(0.0, &mut scene);
        let _ = engine.advance(0.5, &mut scene);

        // Re-fired mid-flight; both keep running.
        let _ = engine.animate_rotation(spin(0, EasingFunction::DEFAULT));
        assert_eq!(engine.active_count(), 2);

        let mut t = 0.5;
        while engine.active_count() > 0 {
            t += 1.0 / 60.0;
            let _ = engine.advance(t, &mut scene);
        }
        assert!((scene[0].rotation.y - 12.0).abs() < 1e-9);
    }

    #[test]
    fn outer_writes_between_steps_are_preserved() {
        let mut engine = TweenEngine::new();
        let mut scene = meshes(1);
        let _ = engine.animate_rotation(spin(0, EasingFunction::Linear));
        let mut frames = 0_u32;
        while engine.active_count() > 0 {
            // the render loop's continuous spin
            scene[0].rotation.y += 0.01;
            let _ = engine.advance(f64::from(frames) / 10.0, &mut scene);
            frames += 1;
        }
        // t = 0.0 ..= 1.5
        assert_eq!(frames, 16);
        let expected = 6.0 + 0.01 * f64::from(frames);
        assert!((scene[0].rotation.y - expected).abs() < 1e-9);
    }

    #[test]
    fn cancel_keeps_partial_rotation() {
        let mut engine = TweenEngine::new();
        let mut scene = meshes(1);
        let id = engine.animate_rotation(spin(0, EasingFunction::Linear));
        let _ = engine.advance(0.0, &mut scene);
        let _ = engine.advance(0.75, &mut scene);
        assert!(engine.cancel(id));
        assert!(!engine.cancel(id));
        let _ = engine.advance(5.0, &mut scene);
        assert!((scene[0].rotation.y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_completes_on_first_step() {
        let mut engine = TweenEngine::new();
        let mut scene = meshes(1);
        let mut request = spin(0, EasingFunction::Linear);
        request.duration = Duration::ZERO;
        let _ = engine.animate_rotation(request);
        assert_eq!(engine.advance(1.0, &mut scene), 1);
        assert_eq!(scene[0].rotation.y, 6.0);
    }

    #[test]
    fn missing_target_is_dropped() {
        let mut engine = TweenEngine::new();
        let mut scene = meshes(1);
        let _ = engine.animate_rotation(spin(5, EasingFunction::Linear));
        let _ = engine.advance(0.0, &mut scene);
        assert_eq!(engine.active_count(), 0);
    }
}
