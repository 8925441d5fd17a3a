//! Projection and view transforms for the rotating particle field.
//!
//! Matrices follow wgpu conventions: right-handed, clip-space depth in
//! \[0, 1\]. The view pulls the camera back along Z and spins the field about
//! Y, then X, at fixed rates of wall-clock time.

use crate::config::FieldConfig;
use crate::constants::AXIS_EPSILON;
use glam::{Mat4, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct FieldCamera {
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub distance: f32,
    pub spin_y: f32,
    pub spin_x: f32,
}

impl FieldCamera {
    pub fn from_config(config: &FieldConfig) -> Self {
        Self {
            fovy_radians: config.fovy_radians,
            znear: config.znear,
            zfar: config.zfar,
            distance: config.camera_distance,
            spin_y: config.spin_y_rad_per_sec,
            spin_x: config.spin_x_rad_per_sec,
        }
    }

    /// Compute the clip-space projection matrix for a `width`×`height` surface.
    pub fn projection_matrix(&self, width: u32, height: u32) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy_radians,
            aspect_ratio(width, height),
            self.znear,
            self.zfar,
        )
    }

    /// Compute the model-view matrix `time_sec` seconds after the animation
    /// started.
    pub fn view_matrix(&self, time_sec: f32) -> Mat4 {
        let m = Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance));
        let m = rotate_about(m, time_sec * self.spin_y, Vec3::Y).unwrap_or(m);
        rotate_about(m, time_sec * self.spin_x, Vec3::X).unwrap_or(m)
    }
}

#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// Post-multiply `m` by a rotation of `angle` radians about `axis`.
///
/// Returns `None` when `axis` is too short to normalize; callers keep `m`.
pub fn rotate_about(m: Mat4, angle: f32, axis: Vec3) -> Option<Mat4> {
    let len = axis.length();
    if len.is_nan() || len < AXIS_EPSILON {
        return None;
    }
    Some(m * Mat4::from_axis_angle(axis / len, angle))
}
