//! Banded spherical shell of background particles.

use std::f64::consts::TAU;

use glam::Vec3;
use rand::Rng;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Fixed-size point cloud, immutable once generated.
///
/// Serializes as `{ count, size, color }`; positions travel separately
/// through [`as_flat`](Self::as_flat).
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    /// Point sprite size.
    pub size: f32,
    /// Point color (linear RGB).
    pub color: [f32; 3],
}

impl ParticleField {
    /// Wrap generated positions with their material.
    #[must_use]
    pub fn new(positions: Vec<Vec3>, size: f32, color: [f32; 3]) -> Self {
        Self {
            positions,
            size,
            color,
        }
    }

    /// Point positions in generation order.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Positions flattened to `x, y, z, x, y, z, ...` for a vertex buffer.
    #[must_use]
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the field holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Serialize for ParticleField {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParticleField", 3)?;
        state.serialize_field("count", &self.len())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("color", &self.color)?;
        state.end()
    }
}

/// Sample `count` points on a shell between `min_radius` and `max_radius`.
///
/// Directions are uniform on the sphere (`phi = acos(2u - 1)`, uniform in
/// `cos phi`, so the poles do not cluster). The radius is drawn uniformly
/// and independently, which packs more points per unit volume near the inner
/// radius. Each draw consumes three values from `rng` in the order theta,
/// phi, radius.
pub fn generate_particle_field<R: Rng + ?Sized>(
    count: usize,
    min_radius: f64,
    max_radius: f64,
    rng: &mut R,
) -> Vec<Vec3> {
    let span = max_radius - min_radius;
    (0..count)
        .map(|_| {
            let theta = rng.random::<f64>() * TAU;
            let phi = (2.0 * rng.random::<f64>() - 1.0).acos();
            let radius = min_radius + rng.random::<f64>() * span;

            let (sin_phi, cos_phi) = phi.sin_cos();
            let (sin_theta, cos_theta) = theta.sin_cos();
            Vec3::new(
                (radius * sin_phi * cos_theta) as f32,
                (radius * sin_phi * sin_theta) as f32,
                (radius * cos_phi) as f32,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn shell_has_requested_count_and_radii() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = generate_particle_field(1500, 30.0, 40.0, &mut rng);
        assert_eq!(points.len(), 1500);
        for p in &points {
            let r = p.length();
            assert!(
                (30.0 - 1e-3..=40.0 + 1e-3).contains(&r),
                "radius {r} outside shell"
            );
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = generate_particle_field(
            256,
            30.0,
            40.0,
            &mut StdRng::seed_from_u64(9),
        );
        let b = generate_particle_field(
            256,
            30.0,
            40.0,
            &mut StdRng::seed_from_u64(9),
        );
        assert_eq!(a, b);

        let c = generate_particle_field(
            256,
            30.0,
            40.0,
            &mut StdRng::seed_from_u64(10),
        );
        assert_ne!(a, c);
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_particle_field(0, 30.0, 40.0, &mut rng).is_empty());
    }

    #[test]
    fn directions_are_uniform_in_cos_phi() {
        // Uniform direction sampling puts about half the points in each
        // hemisphere and about half within |z/r| < 0.5.
        let mut rng = StdRng::seed_from_u64(1234);
        let points = generate_particle_field(20_000, 1.0, 2.0, &mut rng);
        let n = points.len() as f32;

        let upper = points.iter().filter(|p| p.z > 0.0).count() as f32 / n;
        assert!((upper - 0.5).abs() < 0.02, "upper fraction {upper}");

        let band = points
            .iter()
            .filter(|p| (p.z / p.length()).abs() < 0.5)
            .count() as f32
            / n;
        assert!((band - 0.5).abs() < 0.02, "equatorial fraction {band}");
    }

    #[test]
    fn radius_is_uniform_not_volumetric() {
        // Uniform radius: the lower half of the band holds half the points.
        // Volume-uniform sampling would put noticeably fewer there.
        let mut rng = StdRng::seed_from_u64(77);
        let points = generate_particle_field(20_000, 30.0, 40.0, &mut rng);
        let inner = points.iter().filter(|p| p.length() < 35.0).count()
            as f32
            / points.len() as f32;
        assert!((inner - 0.5).abs() < 0.02, "inner fraction {inner}");
    }

    #[test]
    fn flat_view_interleaves_components() {
        let field = ParticleField::new(
            vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)],
            0.02,
            [1.0; 3],
        );
        assert_eq!(field.as_flat(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(field.len(), 2);
        assert!(!field.is_empty());
    }

    #[test]
    fn json_reports_count_from_positions() {
        let field = ParticleField::new(vec![Vec3::ONE; 3], 0.5, [0.0; 3]);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["count"], 3);
        assert_eq!(json["size"], 0.5);
        assert!(json.get("positions").is_none());
    }
}
