// Host-side tests for target shape generation.

use glam::Vec3;
use morph_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SAMPLES: usize = 4000;

fn sample(shape: Shape) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut out = vec![Vec3::ZERO; SAMPLES];
    shape.fill(&mut out, &mut rng);
    out
}

#[test]
fn all_shapes_produce_finite_points() {
    for shape in Shape::ALL {
        for (i, p) in sample(shape).iter().enumerate() {
            assert!(p.is_finite(), "{} point {i} not finite: {p:?}", shape.name());
        }
    }
}

#[test]
fn scatter_stays_inside_cube() {
    for p in sample(Shape::Scatter) {
        assert!(p.abs().max_element() <= SCATTER_EXTENT, "{p:?} outside cube");
    }
}

#[test]
fn sphere_points_lie_on_surface() {
    for p in sample(Shape::Sphere) {
        assert!(
            (p.length() - SPHERE_RADIUS).abs() < 1e-4,
            "norm {} off sphere",
            p.length()
        );
    }
}

#[test]
fn sphere_covers_both_hemispheres_evenly() {
    let pts = sample(Shape::Sphere);
    let upper = pts.iter().filter(|p| p.z > 0.0).count() as f32 / SAMPLES as f32;
    assert!((upper - 0.5).abs() < 0.05, "upper fraction {upper}");
    let mean_z = pts.iter().map(|p| p.z).sum::<f32>() / SAMPLES as f32;
    assert!(mean_z.abs() < 0.08, "mean z {mean_z}");
}

#[test]
fn torus_points_lie_on_tube() {
    for p in sample(Shape::Torus) {
        let ring = (p.x * p.x + p.y * p.y).sqrt() - TORUS_MAJOR_RADIUS;
        let tube = (ring * ring + p.z * p.z).sqrt();
        assert!((tube - TORUS_MINOR_RADIUS).abs() < 1e-4, "tube radius {tube}");
        assert!(p.z.abs() <= TORUS_MINOR_RADIUS + 1e-6);
    }
}

#[test]
fn grid_points_stay_inside_cube() {
    for p in sample(Shape::Grid) {
        assert!(p.abs().max_element() <= GRID_EXTENT / 2.0 + 1e-6, "{p:?}");
    }
}

#[test]
fn grid_of_eight_fills_cube_corners_in_index_order() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut out = vec![Vec3::ZERO; 8];
    Shape::Grid.fill(&mut out, &mut rng);
    let expected = [
        Vec3::new(-1.5, -1.5, -1.5),
        Vec3::new(1.5, -1.5, -1.5),
        Vec3::new(-1.5, 1.5, -1.5),
        Vec3::new(1.5, 1.5, -1.5),
        Vec3::new(-1.5, -1.5, 1.5),
        Vec3::new(1.5, -1.5, 1.5),
        Vec3::new(-1.5, 1.5, 1.5),
        Vec3::new(1.5, 1.5, 1.5),
    ];
    assert_eq!(out, expected);
}

#[test]
fn grid_of_four_uses_side_two_and_first_corners() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut out = vec![Vec3::ZERO; 4];
    Shape::Grid.fill(&mut out, &mut rng);
    assert_eq!(grid_side(4), 2);
    assert_eq!(
        out,
        vec![
            Vec3::new(-1.5, -1.5, -1.5),
            Vec3::new(1.5, -1.5, -1.5),
            Vec3::new(-1.5, 1.5, -1.5),
            Vec3::new(1.5, 1.5, -1.5),
        ]
    );
}

#[test]
fn grid_is_independent_of_rng() {
    let mut a = StdRng::seed_from_u64(1);
    let mut b = StdRng::seed_from_u64(2);
    for i in 0..64 {
        assert_eq!(Shape::Grid.point(i, 64, &mut a), Shape::Grid.point(i, 64, &mut b));
    }
}

#[test]
fn shape_cycle_wraps_after_grid() {
    assert_eq!(Shape::Scatter.next(), Shape::Sphere);
    assert_eq!(Shape::Sphere.next(), Shape::Torus);
    assert_eq!(Shape::Torus.next(), Shape::Grid);
    assert_eq!(Shape::Grid.next(), Shape::Scatter);
    for shape in Shape::ALL {
        assert_eq!(Shape::from_index(shape.index()), shape);
        assert_eq!(Shape::from_index(shape.index() + 4), shape);
    }
}
