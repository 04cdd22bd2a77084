use core::ops::RangeInclusive;
use std::sync::Arc;

use crate::{material::Scatter, Ray};
use nalgebra::Vector3;

pub trait Hit: Send + Sync {
    fn hit(&self, ray: Ray, interval: RangeInclusive<f64>) -> Option<Record<'_>>;
}

pub struct Record<'a> {
    pub point: Vector3<f64>,
    /// Always faces against the incoming ray.
    pub normal: Vector3<f64>,
    pub t: f64,
    pub front: bool,
    pub material: &'a dyn Scatter,
}

impl<'a> Record<'a> {
    /// Builds a record from the geometric outward normal, flipping it when the
    /// ray arrives from inside the surface.
    pub fn new(
        ray: Ray,
        t: f64,
        outward_normal: Vector3<f64>,
        material: &'a dyn Scatter,
    ) -> Self {
        let front = ray.direction.dot(&outward_normal) < 0.0;
        Self {
            point: ray.at(t),
            normal: if front {
                outward_normal
            } else {
                -outward_normal
            },
            t,
            front,
            material,
        }
    }
}

/// Ordered set of shapes searched linearly for the nearest hit.
#[derive(Clone, Default)]
pub struct Scene {
    objects: Vec<Arc<dyn Hit>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: Arc<dyn Hit>) {
        self.objects.push(object);
    }

    pub fn with(mut self, object: impl Hit + 'static) -> Self {
        self.add(Arc::new(object));
        self
    }
}

impl Hit for Scene {
    fn hit(&self, ray: Ray, interval: RangeInclusive<f64>) -> Option<Record<'_>> {
        let t_min = *interval.start();
        let mut closest = *interval.end();
        let mut nearest = None;
        for object in &self.objects {
            if let Some(record) = object.hit(ray, t_min..=closest) {
                closest = record.t;
                nearest = Some(record);
            }
        }
        nearest
    }
}
