pub mod camera;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod morph;
pub mod renderer;
pub mod shape;
pub mod store;

pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use driver::*;
pub use error::*;
pub use morph::*;
pub use renderer::*;
pub use shape::*;
pub use store::*;
