use nalgebra::Vector3;
use rand::{Rng, RngCore};

const NEAR_ZERO: f64 = 1e-8;

/// Rejection-sample a point strictly inside the unit sphere.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vector3<f64> {
    loop {
        let p = Vector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let len = p.norm_squared();
        if len < 1.0 && len > 0.0 {
            return p;
        }
    }
}

pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vector3<f64> {
    random_in_unit_sphere(rng).normalize()
}

/// True when every component is within a tiny epsilon of zero.
pub fn near_zero(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.abs() < NEAR_ZERO)
}
