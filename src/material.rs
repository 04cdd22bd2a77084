use crate::{
    hit::Record,
    random::{near_zero, random_in_unit_sphere, random_unit_vector},
    Color, Ray,
};
use nalgebra::Vector3;
use rand::RngCore;

/// Surface response to an incoming ray.
///
/// `None` means the ray was absorbed.
pub trait Scatter: Send + Sync {
    fn scatter(&self, ray: Ray, record: &Record, rng: &mut dyn RngCore) -> Option<(Color, Ray)>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lambertian {
    pub albedo: Color,
}

impl Lambertian {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Scatter for Lambertian {
    fn scatter(&self, _ray: Ray, record: &Record, rng: &mut dyn RngCore) -> Option<(Color, Ray)> {
        let direction = diffuse_direction(&record.normal, &random_unit_vector(rng));
        Some((self.albedo, Ray::new(record.point, direction)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metal {
    pub albedo: Color,
    pub fuzz: f64,
}

impl Metal {
    pub fn new(albedo: Color) -> Self {
        Self { albedo, fuzz: 0.0 }
    }

    pub fn fuzzy(albedo: Color, fuzz: f64) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Scatter for Metal {
    fn scatter(&self, ray: Ray, record: &Record, rng: &mut dyn RngCore) -> Option<(Color, Ray)> {
        let mut direction = reflect(&ray.direction, &record.normal);
        if self.fuzz > 0.0 {
            direction += self.fuzz * random_in_unit_sphere(rng);
        }
        if direction.dot(&record.normal) > 0.0 {
            Some((self.albedo, Ray::new(record.point, direction)))
        } else {
            None
        }
    }
}

/// Offsets the normal by a unit sample, falling back to the bare normal when the
/// two cancel out.
fn diffuse_direction(normal: &Vector3<f64>, sample: &Vector3<f64>) -> Vector3<f64> {
    let direction = normal + sample;
    if near_zero(&direction) {
        *normal
    } else {
        direction
    }
}

pub fn reflect(v: &Vector3<f64>, n: &Vector3<f64>) -> Vector3<f64> {
    v - n * (2.0 * v.dot(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn record_at_origin<'a>(material: &'a dyn Scatter, normal: Vector3<f64>) -> Record<'a> {
        Record {
            point: Vector3::zeros(),
            normal,
            t: 1.0,
            front: true,
            material,
        }
    }

    #[test]
    fn lambertian_scatters_into_normal_hemisphere_side() {
        let material = Lambertian::new(Vector3::new(0.2, 0.4, 0.6));
        let normal = Vector3::new(0.0, 1.0, 0.0);
        let record = record_at_origin(&material, normal);
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..500 {
            let (attenuation, scattered) = material
                .scatter(Ray::new(Vector3::new(0.0, 1.0, 0.0), -normal), &record, &mut rng)
                .unwrap();
            assert_eq!(attenuation, material.albedo);
            assert_eq!(scattered.origin, record.point);
            assert!(scattered.direction.dot(&normal) >= 0.0);
        }
    }

    #[test]
    fn metal_without_fuzz_is_exact_reflection() {
        let material = Metal::new(Vector3::new(0.8, 0.8, 0.8));
        let normal = Vector3::new(0.0, 1.0, 0.0);
        let record = record_at_origin(&material, normal);
        let incoming = Ray::new(Vector3::new(-1.0, 1.0, 0.0), Vector3::new(1.0, -1.0, 0.0));
        let mut rng = SmallRng::seed_from_u64(5);

        let (attenuation, scattered) = material.scatter(incoming, &record, &mut rng).unwrap();
        assert_eq!(attenuation, material.albedo);
        assert_eq!(scattered.direction, Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(
            scattered.direction.dot(&normal).signum(),
            (-incoming.direction).dot(&normal).signum()
        );
    }

    #[test]
    fn metal_absorbs_grazing_reflection() {
        let material = Metal::new(Vector3::new(0.8, 0.8, 0.8));
        let normal = Vector3::new(0.0, 1.0, 0.0);
        let record = record_at_origin(&material, normal);
        let grazing = Ray::new(Vector3::new(-1.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let mut rng = SmallRng::seed_from_u64(5);
        assert!(material.scatter(grazing, &record, &mut rng).is_none());
    }

    #[test]
    fn fuzz_is_clamped() {
        assert_eq!(Metal::fuzzy(Vector3::zeros(), 3.0).fuzz, 1.0);
        assert_eq!(Metal::fuzzy(Vector3::zeros(), 0.3).fuzz, 0.3);
    }

    #[test]
    fn fuzzy_metal_stays_above_surface_when_it_scatters() {
        let material = Metal::fuzzy(Vector3::new(0.8, 0.6, 0.2), 0.9);
        let normal = Vector3::new(0.0, 0.0, 1.0);
        let record = record_at_origin(&material, normal);
        let incoming = Ray::new(Vector3::new(0.0, -1.0, 1.0), Vector3::new(0.0, 1.0, -1.0));
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..500 {
            if let Some((_, scattered)) = material.scatter(incoming, &record, &mut rng) {
                assert!(scattered.direction.dot(&normal) > 0.0);
            }
        }
    }

    #[test]
    fn diffuse_direction_falls_back_to_normal_when_degenerate() {
        let normal = Vector3::new(0.0, 0.0, 1.0);
        assert_eq!(diffuse_direction(&normal, &-normal), normal);
        assert_eq!(
            diffuse_direction(&normal, &Vector3::new(1.0, 0.0, 0.0)),
            Vector3::new(1.0, 0.0, 1.0)
        );
    }
}
