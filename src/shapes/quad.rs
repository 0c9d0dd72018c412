// Copyright @yucwang 2026

use crate::core::interaction::SurfaceInteraction;
use crate::core::shape::Shape;
use crate::materials::bsdf::BSDF;
use crate::math::constants::{Float, Vector2f, Vector3f, EPSILON};
use crate::math::ray::Ray3f;
use crate::math::transform::Transform;

/// Rectangle spanning [-w/2, w/2] x [-h/2, h/2] at z = 0 in object space,
/// facing +z.
pub struct Quad {
    width: Float,
    height: Float,
    to_world: Transform,
    bsdf: BSDF,
}

impl Quad {
    pub fn new(width: Float, height: Float, to_world: Transform, bsdf: BSDF) -> Self {
        Self { width, height, to_world, bsdf }
    }
}

impl Shape for Quad {
    fn intersect(&self, ray: &Ray3f) -> Option<(Float, SurfaceInteraction)> {
        let r = self.to_world.inv_apply_ray(ray);

        // Parallel to the plane, coplanar included: no intersection.
        if r.dir().z == 0.0 {
            return None;
        }

        let t_hit = -r.origin().z / r.dir().z;
        if t_hit <= EPSILON {
            return None;
        }

        let mut p_hit = r.at(t_hit);
        if p_hit.x < -self.width / 2.0 || p_hit.x > self.width / 2.0
            || p_hit.y < -self.height / 2.0 || p_hit.y > self.height / 2.0
        {
            return None;
        }

        // Remove numerical drift off the plane.
        p_hit.z = 0.0;

        let si = SurfaceInteraction::new(
            p_hit,
            Vector3f::new(0.0, 0.0, 1.0),
            -r.dir(),
            Vector3f::new(1.0, 0.0, 0.0),
        )
        .transform(&self.to_world);
        // World-space t from the world-space hit point, so object-space ray
        // renormalization cannot skew the distance.
        let t_world = (si.p() - ray.origin()).dot(&ray.dir());
        Some((t_world, si))
    }

    fn sample(&self, u: &Vector2f) -> (SurfaceInteraction, Float) {
        let p_obj = Vector3f::new(
            (u.x - 0.5) * self.width,
            (u.y - 0.5) * self.height,
            0.0,
        );
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
        self.width * self.height
    }

    fn bsdf(&self) -> &BSDF {
        &self.bsdf
    }
}

/* Tests for Quad */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{LcgRng, Sampler};

    fn unit_quad() -> Quad {
        Quad::new(2.0, 4.0, Transform::default(), BSDF::new())
    }

    #[test]
    fn test_hit_inside_bounds() {
        let quad = unit_quad();
        // Aim at (0.5, -1.0, 0) from 5 units away on the +z side.
        let origin = Vector3f::new(0.5, -1.0, 5.0);
        let ray = Ray3f::new(origin, Vector3f::new(0.0, 0.0, -1.0));

        let (t, si) = quad.intersect(&ray).expect("expected hit");
        assert!((t - 5.0).abs() < 1e-9);
        assert!((si.p() - Vector3f::new(0.5, -1.0, 0.0)).norm() < 1e-9);
        assert!((si.normal() - Vector3f::new(0.0, 0.0, 1.0)).norm() < 1e-9);
    }

    #[test]
    fn test_miss_outside_bounds() {
        let quad = unit_quad();
        let ray = Ray3f::new(Vector3f::new(1.5, 0.0, 5.0), Vector3f::new(0.0, 0.0, -1.0));
        assert!(quad.intersect(&ray).is_none());
    }

    #[test]
    fn test_parallel_ray_misses() {
        let quad = unit_quad();
        // Coplanar ray skimming the quad's own plane.
        let ray = Ray3f::new(Vector3f::new(-5.0, 0.0, 0.0), Vector3f::new(1.0, 0.0, 0.0));
        assert!(quad.intersect(&ray).is_none());
    }

    #[test]
    fn test_behind_origin_misses() {
        let quad = unit_quad();
        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, 5.0), Vector3f::new(0.0, 0.0, 1.0));
        assert!(quad.intersect(&ray).is_none());
    }

    #[test]
    fn test_transformed_quad_round_trip() {
        // Floor at y = 0 facing +y, as the Cornell walls are built.
        let to_world = Transform::translate(3.0, 0.0, 3.0).then(&Transform::rotate_x(-90.0));
        let quad = Quad::new(6.0, 6.0, to_world, BSDF::new());

        let ray = Ray3f::new(Vector3f::new(3.0, 4.0, 3.0), Vector3f::new(0.0, -1.0, 0.0));
        let (t, si) = quad.intersect(&ray).expect("expected hit");
        assert!((t - 4.0).abs() < 1e-6);
        assert!((si.normal() - Vector3f::new(0.0, 1.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_sample_on_surface() {
        let quad = unit_quad();
        let mut rng = LcgRng::new(31);
        for _ in 0..64 {
            let (si, pdf) = quad.sample(&rng.next_2d());
            assert!((pdf - 1.0 / 8.0).abs() < 1e-9);
            let p = si.p();
            assert!(p.x >= -1.0 && p.x <= 1.0);
            assert!(p.y >= -2.0 && p.y <= 2.0);
            assert_eq!(p.z, 0.0);
        }
    }
}
