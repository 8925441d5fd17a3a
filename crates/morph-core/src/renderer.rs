use crate::error::RenderError;
use glam::Mat4;

/// Per-particle attribute streams uploaded to the GPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleBuffer {
    Positions,
    Velocities,
    Colors,
}

impl ParticleBuffer {
    pub const ALL: [ParticleBuffer; 3] = [
        ParticleBuffer::Positions,
        ParticleBuffer::Velocities,
        ParticleBuffer::Colors,
    ];

    /// Floats per particle.
    pub fn components(self) -> usize {
        match self {
            ParticleBuffer::Positions | ParticleBuffer::Velocities => 3,
            ParticleBuffer::Colors => 4,
        }
    }

    /// Vertex slot the stream is bound to.
    pub fn slot(self) -> u32 {
        match self {
            ParticleBuffer::Positions => 0,
            ParticleBuffer::Velocities => 1,
            ParticleBuffer::Colors => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ParticleBuffer::Positions => "particle_positions",
            ParticleBuffer::Velocities => "particle_velocities",
            ParticleBuffer::Colors => "particle_colors",
        }
    }
}

/// Uniform block shared with `points.wgsl`. Layout must match the WGSL
/// `Uniforms` struct (160 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointUniforms {
    pub projection: [[f32; 4]; 4],
    pub model_view: [[f32; 4]; 4],
    pub resolution: [f32; 2],
    pub point_size: f32,
    pub time: f32,
    pub wobble: f32,
    pub _pad: [f32; 3],
}

impl PointUniforms {
    pub fn new(
        projection: Mat4,
        model_view: Mat4,
        resolution: [f32; 2],
        point_size: f32,
        time: f32,
        wobble: f32,
    ) -> Self {
        Self {
            projection: projection.to_cols_array_2d(),
            model_view: model_view.to_cols_array_2d(),
            resolution,
            point_size,
            time,
            wobble,
            _pad: [0.0; 3],
        }
    }
}

/// GPU point-sprite renderer the frame driver draws through.
///
/// Implementations compile and link their point program when constructed and
/// report failure from the constructor.
pub trait PointRenderer {
    /// Allocate or fully rewrite one attribute stream.
    fn write_buffer(&mut self, buffer: ParticleBuffer, data: &[f32]);

    fn set_uniforms(&mut self, uniforms: &PointUniforms);

    /// Reconfigure the output surface. Zero sizes are ignored.
    fn resize(&mut self, width: u32, height: u32);

    /// Bind the attribute streams and draw `count` point sprites.
    fn draw_points(&mut self, count: u32) -> Result<(), RenderError>;
}
