// Host-side tests for projection and view construction.

use glam::{Mat4, Vec3, Vec4};
use morph_core::*;

fn camera() -> FieldCamera {
    FieldCamera::from_config(&FieldConfig::default())
}

fn approx_eq(a: Mat4, b: Mat4) -> bool {
    a.abs_diff_eq(b, 1e-5)
}

#[test]
fn view_at_start_only_pulls_camera_back() {
    let view = camera().view_matrix(0.0);
    assert!(approx_eq(view, Mat4::from_translation(Vec3::new(0.0, 0.0, -6.0))));
}

#[test]
fn view_spins_about_y_then_x() {
    let t = 12.5;
    let expected = Mat4::from_translation(Vec3::new(0.0, 0.0, -6.0))
        * Mat4::from_rotation_y(t * 0.1)
        * Mat4::from_rotation_x(t * 0.05);
    assert!(approx_eq(camera().view_matrix(t), expected));
}

#[test]
fn field_center_stays_in_front_of_camera() {
    let view = camera().view_matrix(37.0);
    let center = view * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((center.z + 6.0).abs() < 1e-5);
}

#[test]
fn rotate_about_rejects_degenerate_axes() {
    let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    assert!(rotate_about(m, 1.0, Vec3::ZERO).is_none());
    assert!(rotate_about(m, 1.0, Vec3::splat(1e-9)).is_none());
    assert!(rotate_about(m, 1.0, Vec3::new(f32::NAN, 0.0, 0.0)).is_none());
}

#[test]
fn rotate_about_normalizes_axis() {
    let m = Mat4::IDENTITY;
    let a = rotate_about(m, 0.7, Vec3::new(0.0, 5.0, 0.0)).expect("valid axis");
    assert!(approx_eq(a, Mat4::from_rotation_y(0.7)));
}

#[test]
fn rotate_about_post_multiplies() {
    let m = Mat4::from_translation(Vec3::new(0.0, 0.0, -6.0));
    let r = rotate_about(m, 0.3, Vec3::X).expect("valid axis");
    assert!(approx_eq(r, m * Mat4::from_rotation_x(0.3)));
}

#[test]
fn projection_uses_surface_aspect() {
    let proj = camera().projection_matrix(1600, 900);
    let aspect = 1600.0 / 900.0;
    let cols = proj.to_cols_array_2d();
    assert!((cols[0][0] * aspect - cols[1][1]).abs() < 1e-5);
    let f = 1.0 / (std::f32::consts::FRAC_PI_4 / 2.0).tan();
    assert!((cols[1][1] - f).abs() < 1e-5);
}

#[test]
fn projection_maps_near_and_far_to_unit_depth() {
    let proj = camera().projection_matrix(800, 600);
    let near = proj * Vec4::new(0.0, 0.0, -0.1, 1.0);
    let far = proj * Vec4::new(0.0, 0.0, -100.0, 1.0);
    assert!((near.z / near.w).abs() < 1e-4);
    assert!((far.z / far.w - 1.0).abs() < 1e-4);
}

#[test]
fn aspect_ratio_survives_zero_height() {
    assert_eq!(aspect_ratio(640, 0), 640.0);
    assert_eq!(aspect_ratio(0, 0), 1.0);
    assert_eq!(aspect_ratio(1920, 1080), 1920.0 / 1080.0);
}
