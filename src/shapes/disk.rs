// Copyright @yucwang 2026

use crate::core::interaction::SurfaceInteraction;
use crate::core::shape::Shape;
use crate::materials::bsdf::BSDF;
use crate::math::constants::{Float, Vector2f, Vector3f, EPSILON, PI};
use crate::math::ray::Ray3f;
use crate::math::transform::Transform;

/// Annulus at z = 0 in object space, between inner_radius and radius,
/// facing +z. The Cornell ceiling light uses one of these.
pub struct Disk {
    radius: Float,
    inner_radius: Float,
    to_world: Transform,
    bsdf: BSDF,
}

impl Disk {
    pub fn new(radius: Float, inner_radius: Float, to_world: Transform, bsdf: BSDF) -> Self {
        Self { radius, inner_radius, to_world, bsdf }
    }
}

impl Shape for Disk {
    fn intersect(&self, ray: &Ray3f) -> Option<(Float, SurfaceInteraction)> {
        let r = self.to_world.inv_apply_ray(ray);
        if r.dir().z == 0.0 {
            return None;
        }

        let t_hit = -r.origin().z / r.dir().z;
        if t_hit <= EPSILON {
            return None;
        }

        let mut p_hit = r.at(t_hit);
        let dist2 = p_hit.x * p_hit.x + p_hit.y * p_hit.y;
        if dist2 > self.radius * self.radius || dist2 < self.inner_radius * self.inner_radius {
            return None;
        }

        p_hit.z = 0.0;

        let si = SurfaceInteraction::new(
            p_hit,
            Vector3f::new(0.0, 0.0, 1.0),
            -r.dir(),
            Vector3f::new(1.0, 0.0, 0.0),
        )
        .transform(&self.to_world);
        let t_world = (si.p() - ray.origin()).dot(&ray.dir());
        Some((t_world, si))
    }

    fn sample(&self, u: &Vector2f) -> (SurfaceInteraction, Float) {
        // Uniform over the annulus: radii interpolated in r^2.
        let r2_inner = self.inner_radius * self.inner_radius;
        let r2_outer = self.radius * self.radius;
        let rho = (r2_inner + u.x * (r2_outer - r2_inner)).sqrt();
        let phi = 2.0 * PI * u.y;

        let p_obj = Vector3f::new(rho * phi.cos(), rho * phi.sin(), 0.0);
        let si = SurfaceInteraction::new(
            p_obj,
            Vector3f::new(0.0, 0.0, 1.0),
            Vector3f::zeros(),
            Vector3f::new(1.0, 0.0, 0.0),
        )
        .transform(&self.to_world);
        (si, 1.0 / self.area())
    }

    fn area(&self) -> Float {
        PI * (self.radius * self.radius - self.inner_radius * self.inner_radius)
    }

    fn bsdf(&self) -> &BSDF {
        &self.bsdf
    }
}

/* Tests for Disk */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{LcgRng, Sampler};

    #[test]
    fn test_hit_and_annulus_bounds() {
        let disk = Disk::new(2.0, 0.5, Transform::default(), BSDF::new());
        let down = Vector3f::new(0.0, 0.0, -1.0);

        // Inside the annulus.
        let ray = Ray3f::new(Vector3f::new(1.0, 0.0, 4.0), down);
        let (t, si) = disk.intersect(&ray).expect("expected hit");
        assert!((t - 4.0).abs() < 1e-9);
        assert!((si.p() - Vector3f::new(1.0, 0.0, 0.0)).norm() < 1e-9);

        // Inside the hole.
        let ray = Ray3f::new(Vector3f::new(0.2, 0.0, 4.0), down);
        assert!(disk.intersect(&ray).is_none());

        // Outside the rim.
        let ray = Ray3f::new(Vector3f::new(2.5, 0.0, 4.0), down);
        assert!(disk.intersect(&ray).is_none());
    }

    #[test]
    fn test_sample_within_annulus() {
        let disk = Disk::new(2.0, 0.5, Transform::default(), BSDF::new());
        let mut rng = LcgRng::new(53);
        let inv_area = 1.0 / (PI * (4.0 - 0.25));

        for _ in 0..128 {
            let (si, pdf) = disk.sample(&rng.next_2d());
            let rho = (si.p().x * si.p().x + si.p().y * si.p().y).sqrt();
            assert!(rho >= 0.5 - 1e-9 && rho <= 2.0 + 1e-9);
            assert!((pdf - inv_area).abs() < 1e-12);
        }
    }
}
