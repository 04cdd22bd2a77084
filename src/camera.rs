use nalgebra::Vector3;

use crate::Ray;

const ASPECT_RATIO: f64 = 16.0 / 9.0;
const VIEWPORT_HEIGHT: f64 = 2.0;
const FOCAL_LENGTH: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    origin: Vector3<f64>,
    lower_left_corner: Vector3<f64>,
    horizontal: Vector3<f64>,
    vertical: Vector3<f64>,
}

impl Camera {
    pub fn new(
        origin: Vector3<f64>,
        aspect_ratio: f64,
        viewport_height: f64,
        focal_length: f64,
    ) -> Self {
        let viewport_width = aspect_ratio * viewport_height;
        let horizontal = Vector3::new(viewport_width, 0.0, 0.0);
        let vertical = Vector3::new(0.0, viewport_height, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vector3::new(0.0, 0.0, focal_length);
        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    pub fn lower_left_corner(&self) -> Vector3<f64> {
        self.lower_left_corner
    }

    pub fn horizontal(&self) -> Vector3<f64> {
        self.horizontal
    }

    pub fn vertical(&self) -> Vector3<f64> {
        self.vertical
    }

    /// Ray through the viewport at normalized `(u, v)`. Values outside `[0, 1]`
    /// extrapolate past the viewport edges.
    pub fn get_ray(&self, u: f64, v: f64) -> Ray {
        let target = self.lower_left_corner + u * self.horizontal + v * self.vertical;
        Ray {
            origin: self.origin,
            direction: target - self.origin,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vector3::zeros(), ASPECT_RATIO, VIEWPORT_HEIGHT, FOCAL_LENGTH)
    }
}
