use nalgebra::Vector3;
use rand::RngCore;

use crate::{Color, Hit, Ray};

/// Smallest accepted hit distance, keeps bounced rays off their own surface.
pub const T_MIN: f64 = 0.001;

/// Radiance carried back along `ray`, following at most `depth` bounces.
pub fn ray_color(ray: Ray, scene: &dyn Hit, depth: u32, rng: &mut dyn RngCore) -> Color {
    if depth == 0 {
        return Color::zeros();
    }

    let Some(record) = scene.hit(ray, T_MIN..=f64::INFINITY) else {
        return background(ray);
    };

    match record.material.scatter(ray, &record, rng) {
        Some((attenuation, scattered)) => {
            attenuation.component_mul(&ray_color(scattered, scene, depth - 1, rng))
        }
        None => Color::zeros(),
    }
}

/// Sky gradient, white at the bottom blending to blue at the top.
pub fn background(ray: Ray) -> Color {
    let white = Vector3::new(1.0, 1.0, 1.0);
    let blue = Vector3::new(0.5, 0.7, 1.0);
    let a = 0.5 * (ray.direction.normalize().y + 1.0);
    (1.0 - a) * white + a * blue
}
