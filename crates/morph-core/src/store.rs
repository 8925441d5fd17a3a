//! Structure-of-arrays storage for every particle attribute.
//!
//! The store owns positions, velocities, colors and the morph target buffer.
//! Slices are exposed as flat `f32` views so they can be handed to the GPU
//! without repacking.

use crate::constants::*;
use crate::shape::{scatter_point, Shape};
use glam::{Vec3, Vec4};
use rand::Rng;

pub struct ParticleStore {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    colors: Vec<Vec4>,
    targets: Vec<Vec3>,
}

impl ParticleStore {
    /// Allocate `count` particles and randomize them.
    pub fn new<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let mut store = Self {
            positions: vec![Vec3::ZERO; count],
            velocities: vec![Vec3::ZERO; count],
            colors: vec![Vec4::ZERO; count],
            targets: vec![Vec3::ZERO; count],
        };
        store.randomize(rng);
        store
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn colors(&self) -> &[Vec4] {
        &self.colors
    }

    pub fn targets(&self) -> &[Vec3] {
        &self.targets
    }

    pub fn position_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn velocity_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.velocities)
    }

    pub fn color_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Scatter positions through the cube and draw fresh velocities and
    /// cyan-blue colors. Targets are cleared.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for p in &mut self.positions {
            *p = scatter_point(rng);
        }
        for v in &mut self.velocities {
            *v = Vec3::new(
                VELOCITY_MIN + rng.gen::<f32>() * VELOCITY_SPAN,
                VELOCITY_MIN + rng.gen::<f32>() * VELOCITY_SPAN,
                VELOCITY_MIN + rng.gen::<f32>() * VELOCITY_SPAN,
            );
        }
        for c in &mut self.colors {
            *c = Vec4::new(
                COLOR_RED,
                COLOR_GREEN_MIN + rng.gen::<f32>() * COLOR_GREEN_SPAN,
                COLOR_BLUE_MIN + rng.gen::<f32>() * COLOR_BLUE_SPAN,
                COLOR_ALPHA_MIN + rng.gen::<f32>() * COLOR_ALPHA_SPAN,
            );
        }
        self.targets.fill(Vec3::ZERO);
    }

    /// Regenerate the whole target buffer for `shape`.
    pub fn generate_targets<R: Rng + ?Sized>(&mut self, shape: Shape, rng: &mut R) {
        shape.fill(&mut self.targets, rng);
    }

    /// Move every position a fraction `s` of the way to its target, starting
    /// from where it is now.
    pub fn ease_towards_targets(&mut self, s: f32) {
        for (p, t) in self.positions.iter_mut().zip(&self.targets) {
            *p += (*t - *p) * s;
        }
    }

    pub fn snap_to_targets(&mut self) {
        self.positions.copy_from_slice(&self.targets);
    }
}
