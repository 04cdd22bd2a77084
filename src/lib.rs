//! Stochastic path tracer for scenes of spheres, written out as plain PPM.

pub mod camera;
pub mod config;
pub mod engine;
pub mod error;
pub mod frame;
pub mod hit;
pub mod material;
pub mod ppm;
pub mod random;
pub mod ray;
pub mod render;
pub mod sphere;
pub mod trace;

use nalgebra::Vector3;

pub use camera::Camera;
pub use config::{Partition, RenderConfig};
pub use engine::Renderer;
pub use error::{Error, Result};
pub use frame::FrameBuffer;
pub use hit::{Hit, Record, Scene};
pub use material::{Lambertian, Metal, Scatter};
pub use ray::Ray;
pub use sphere::Sphere;
pub use trace::ray_color;

pub type Color = Vector3<f64>;
