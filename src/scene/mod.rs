//! Static scene graph: camera, animated meshes, ground, lights and the
//! particle shell.
//!
//! The scene is assembled once from [`Options`] and owned by the engine for
//! the whole session. Only the camera position and the mesh transforms
//! change after assembly.

mod mesh;
pub mod particles;
pub mod snapshot;

use std::f64::consts::FRAC_PI_2;

use glam::DVec3;
pub use mesh::{Axis, Mesh, MeshId};
use rand::Rng;
use serde::Serialize;

use self::particles::{generate_particle_field, ParticleField};
pub use self::snapshot::{FrameInfo, FrameSnapshot, MeshTransform};
use crate::camera::Camera;
use crate::options::{GroundOptions, LightingOptions, Options};

// ---------------------------------------------------------------------------
// Static content
// ---------------------------------------------------------------------------

/// Textured ground plane, static after assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ground {
    /// Plane edge length.
    pub size: f64,
    /// Subdivisions per edge.
    pub segments: u32,
    /// Plane center.
    pub position: DVec3,
    /// Euler rotation laying the plane flat.
    pub rotation: DVec3,
    /// Albedo texture path.
    pub color_map: Option<String>,
    /// Bump texture path.
    pub bump_map: Option<String>,
    /// Bump strength.
    pub bump_scale: f32,
    /// Roughness texture path.
    pub roughness_map: Option<String>,
    /// Roughness multiplier.
    pub roughness: f32,
}

impl Ground {
    fn from_options(options: &GroundOptions) -> Self {
        Self {
            size: options.size,
            segments: options.segments,
            position: DVec3::new(0.0, options.height, 0.0),
            rotation: DVec3::new(-FRAC_PI_2, 0.0, 0.0),
            color_map: options.color_map.clone(),
            bump_map: options.bump_map.clone(),
            bump_scale: options.bump_scale,
            roughness_map: options.roughness_map.clone(),
            roughness: options.roughness,
        }
    }
}

/// Uniform ambient fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmbientLight {
    /// Light color.
    pub color: [f32; 3],
    /// Light intensity.
    pub intensity: f32,
}

/// Directional light shining from `position` toward the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionalLight {
    /// Light color.
    pub color: [f32; 3],
    /// Light intensity.
    pub intensity: f32,
    /// Light position.
    pub position: DVec3,
}

/// The scene's fixed lights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lights {
    /// Ambient fill.
    pub ambient: AmbientLight,
    /// Sun.
    pub sun: DirectionalLight,
}

impl Lights {
    fn from_options(options: &LightingOptions) -> Self {
        Self {
            ambient: AmbientLight {
                color: options.ambient_color,
                intensity: options.ambient_intensity,
            },
            sun: DirectionalLight {
                color: options.sun_color,
                intensity: options.sun_intensity,
                position: DVec3::from_array(options.sun_position),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// The scene graph. Owns every object; the engine mutates it per frame.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    /// The viewing camera.
    pub camera: Camera,
    meshes: Vec<Mesh>,
    ground: Ground,
    lights: Lights,
    particles: ParticleField,
    clear_color: [f32; 3],
}

impl Scene {
    /// Build the scene described by `options`.
    ///
    /// `aspect` seeds the camera projection; `rng` draws the particle shell.
    pub fn assemble<R: Rng + ?Sized>(
        options: &Options,
        aspect: f32,
        rng: &mut R,
    ) -> Self {
        let meshes: Vec<Mesh> =
            options.scene.meshes.iter().map(Mesh::from_options).collect();

        let p = &options.particles;
        let positions =
            generate_particle_field(p.count, p.min_radius, p.max_radius, rng);
        let particles = ParticleField::new(positions, p.size, p.color);

        log::debug!(
            "scene assembled: {} meshes, {} particles in [{}, {}]",
            meshes.len(),
            particles.len(),
            p.min_radius,
            p.max_radius
        );

        Self {
            camera: Camera::new(&options.camera, aspect),
            meshes,
            ground: Ground::from_options(&options.scene.ground),
            lights: Lights::from_options(&options.lighting),
            particles,
            clear_color: options.scene.clear_color,
        }
    }

    /// All meshes in index order.
    #[must_use]
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Mutable access to all meshes.
    pub fn meshes_mut(&mut self) -> &mut [Mesh] {
        &mut self.meshes
    }

    /// A single mesh by handle.
    #[must_use]
    pub fn mesh(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id.0)
    }

    /// A single mesh by handle, mutably.
    pub fn mesh_mut(&mut self, id: MeshId) -> Option<&mut Mesh> {
        self.meshes.get_mut(id.0)
    }

    /// The ground plane.
    #[must_use]
    pub fn ground(&self) -> &Ground {
        &self.ground
    }

    /// The static lights.
    #[must_use]
    pub fn lights(&self) -> &Lights {
        &self.lights
    }

    /// The particle shell.
    #[must_use]
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// Background color.
    #[must_use]
    pub fn clear_color(&self) -> [f32; 3] {
        self.clear_color
    }
}
