use core::ops::RangeInclusive;
use std::sync::Arc;

use crate::{
    hit::{Hit, Record},
    material::Scatter,
    Ray,
};
use nalgebra::Vector3;

#[derive(Clone)]
pub struct Sphere {
    pub center: Vector3<f64>,
    pub radius: f64,
    pub material: Arc<dyn Scatter>,
}

impl Sphere {
    pub fn new(center: Vector3<f64>, radius: f64, material: Arc<dyn Scatter>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hit for Sphere {
    fn hit(&self, ray: Ray, interval: RangeInclusive<f64>) -> Option<Record<'_>> {
        let oc = ray.origin - self.center;
        let a = ray.direction.norm_squared();
        let half_b = ray.direction.dot(&oc);
        let c = oc.norm_squared() - self.radius * self.radius;
        let d = (half_b * half_b) - (a * c);

        if d < 0.0 {
            return None;
        }
        let sqrtd = d.sqrt();

        let mut root = (-half_b - sqrtd) / a;

        if !interval.contains(&root) {
            root = (-half_b + sqrtd) / a;
            if !interval.contains(&root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(Record::new(ray, root, outward_normal, self.material.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;

    fn unit_sphere() -> Sphere {
        Sphere::new(
            Vector3::new(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Lambertian::new(Vector3::new(0.5, 0.5, 0.5))),
        )
    }

    #[test]
    fn head_on_hit() {
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, -1.0));
        let sphere = unit_sphere();
        let record = sphere.hit(ray, 0.0..=f64::INFINITY).unwrap();
        assert!((record.t - 0.5).abs() < 1e-12);
        assert_eq!(record.normal, Vector3::new(0.0, 0.0, 1.0));
        assert!(record.front);
    }

    #[test]
    fn miss_on_negative_discriminant() {
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 1.0, 0.0));
        assert!(unit_sphere().hit(ray, 0.0..=f64::INFINITY).is_none());
    }

    #[test]
    fn inside_hit_uses_far_root_and_flips_normal() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, -1.0), Vector3::new(0.0, 0.0, -1.0));
        let sphere = unit_sphere();
        let record = sphere.hit(ray, 0.001..=f64::INFINITY).unwrap();
        assert!((record.t - 0.5).abs() < 1e-12);
        assert!(!record.front);
        assert_eq!(record.normal, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn both_roots_out_of_range() {
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, -1.0));
        assert!(unit_sphere().hit(ray, 0.0..=0.25).is_none());
        assert!(unit_sphere().hit(ray, 2.0..=10.0).is_none());
    }

    #[test]
    fn unnormalized_direction_scales_t() {
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, -2.0));
        let sphere = unit_sphere();
        let record = sphere.hit(ray, 0.0..=f64::INFINITY).unwrap();
        assert!((record.t - 0.25).abs() < 1e-12);
        assert!((record.point.z + 0.5).abs() < 1e-12);
    }
}
