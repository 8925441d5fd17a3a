use crate::constants::{
    GRID_EXTENT, SCATTER_EXTENT, SPHERE_RADIUS, TORUS_MAJOR_RADIUS, TORUS_MINOR_RADIUS,
};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Target formations the field cycles through, in morph order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shape {
    #[default]
    Scatter,
    Sphere,
    Torus,
    Grid,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Scatter, Shape::Sphere, Shape::Torus, Shape::Grid];

    pub fn index(self) -> usize {
        match self {
            Shape::Scatter => 0,
            Shape::Sphere => 1,
            Shape::Torus => 2,
            Shape::Grid => 3,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape::Scatter => "scatter",
            Shape::Sphere => "sphere",
            Shape::Torus => "torus",
            Shape::Grid => "grid",
        }
    }

    /// Target position for particle `index` out of `count`.
    ///
    /// Scatter, sphere and torus draw from `rng`; the grid is a pure function of
    /// the index and ignores it.
    pub fn point<R: Rng + ?Sized>(self, index: usize, count: usize, rng: &mut R) -> Vec3 {
        match self {
            Shape::Scatter => scatter_point(rng),
            Shape::Sphere => {
                let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
                let theta = rng.gen::<f32>() * TAU;
                Vec3::new(
                    SPHERE_RADIUS * phi.sin() * theta.cos(),
                    SPHERE_RADIUS * phi.sin() * theta.sin(),
                    SPHERE_RADIUS * phi.cos(),
                )
            }
            Shape::Torus => {
                let u = rng.gen_range(0.0..TAU);
                let v = rng.gen_range(0.0..TAU);
                let ring = TORUS_MAJOR_RADIUS + TORUS_MINOR_RADIUS * v.cos();
                Vec3::new(ring * u.cos(), ring * u.sin(), TORUS_MINOR_RADIUS * v.sin())
            }
            Shape::Grid => grid_point(index, grid_side(count)),
        }
    }

    /// Overwrite `out` with one target per index.
    pub fn fill<R: Rng + ?Sized>(self, out: &mut [Vec3], rng: &mut R) {
        let count = out.len();
        for (i, p) in out.iter_mut().enumerate() {
            *p = self.point(i, count, rng);
        }
    }
}

/// Uniform point in the `[-SCATTER_EXTENT, SCATTER_EXTENT]` cube.
pub fn scatter_point<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.gen_range(-SCATTER_EXTENT..=SCATTER_EXTENT),
        rng.gen_range(-SCATTER_EXTENT..=SCATTER_EXTENT),
        rng.gen_range(-SCATTER_EXTENT..=SCATTER_EXTENT),
    )
}

/// Smallest cube side `g` with `g³ >= count` (at least 1).
pub fn grid_side(count: usize) -> usize {
    let mut g = (count as f64).cbrt().round().max(1.0) as usize;
    while g.saturating_pow(3) < count {
        g += 1;
    }
    while g > 1 && (g - 1).pow(3) >= count {
        g -= 1;
    }
    g
}

// Spaced over `side - 1` so the outermost cells sit on the cube faces.
fn grid_point(index: usize, side: usize) -> Vec3 {
    let cell = |c: usize| {
        if side > 1 {
            (c as f32 / (side - 1) as f32 - 0.5) * GRID_EXTENT
        } else {
            0.0
        }
    };
    Vec3::new(
        cell(index % side),
        cell((index / side) % side),
        cell(index / (side * side)),
    )
}
