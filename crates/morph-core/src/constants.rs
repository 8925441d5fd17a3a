// Shared tuning constants for the particle field.

// Field size and timing
pub const DEFAULT_PARTICLE_COUNT: usize = 15_000;
pub const MAX_PARTICLE_COUNT: usize = 1_000_000;
pub const DEFAULT_MORPH_DURATION_SEC: f32 = 4.0;
pub const FIXED_STEP_SEC: f32 = 1.0 / 60.0; // nominal frame, no delta-time correction

// Shape extents (world units)
pub const SCATTER_EXTENT: f32 = 1.5; // half-width of the scatter cube
pub const SPHERE_RADIUS: f32 = 1.5;
pub const TORUS_MAJOR_RADIUS: f32 = 1.0;
pub const TORUS_MINOR_RADIUS: f32 = 0.5;
pub const GRID_EXTENT: f32 = 3.0; // full side of the grid cube

// Reset attribute ranges
pub const VELOCITY_MIN: f32 = 0.5;
pub const VELOCITY_SPAN: f32 = 2.0;
pub const COLOR_RED: f32 = 0.0;
pub const COLOR_GREEN_MIN: f32 = 0.5;
pub const COLOR_GREEN_SPAN: f32 = 0.5;
pub const COLOR_BLUE_MIN: f32 = 0.7;
pub const COLOR_BLUE_SPAN: f32 = 0.3;
pub const COLOR_ALPHA_MIN: f32 = 0.1;
pub const COLOR_ALPHA_SPAN: f32 = 0.3;

// Sprites
pub const DEFAULT_POINT_SIZE_PX: f32 = 3.0;
pub const WOBBLE_AMPLITUDE: f32 = 0.03; // sin(time * velocity) offset in the vertex stage

// Camera
pub const FOVY_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
pub const CAMERA_DISTANCE: f32 = 6.0;
pub const SPIN_Y_RAD_PER_SEC: f32 = 0.1;
pub const SPIN_X_RAD_PER_SEC: f32 = 0.05;

// Rotation axes shorter than this are treated as degenerate
pub const AXIS_EPSILON: f32 = 1e-6;
