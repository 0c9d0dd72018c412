// Copyright @yucwang 2026

use crate::core::interaction::SurfaceInteraction;
use crate::core::shape::Shape;
use crate::materials::bsdf::BSDF;
use crate::math::constants::{Float, Vector2f, Vector3f, EPSILON, PI};
use crate::math::ray::Ray3f;
use crate::math::transform::Transform;
use crate::math::warp::sample_uniform_sphere;

/// Sphere of the given radius centered at the object-space origin.
pub struct Sphere {
    radius: Float,
    to_world: Transform,
    bsdf: BSDF,
}

impl Sphere {
    pub fn new(radius: Float, to_world: Transform, bsdf: BSDF) -> Self {
        Self { radius, to_world, bsdf }
    }
}

/// Stable quadratic solve for a t^2 + b t + c = 0; roots ordered t0 <= t1.
fn quadratic(a: Float, b: Float, c: Float) -> Option<(Float, Float)> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let q = if b < 0.0 { -0.5 * (b - root) } else { -0.5 * (b + root) };
    let t0 = q / a;
    let t1 = c / q;
    if t0 <= t1 {
        Some((t0, t1))
    } else {
        Some((t1, t0))
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray3f) -> Option<(Float, SurfaceInteraction)> {
        let r = self.to_world.inv_apply_ray(ray);
        let o = r.origin();
        let d = r.dir();

        let a = d.dot(&d);
        let b = 2.0 * d.dot(&o);
        let c = o.dot(&o) - self.radius * self.radius;

        let (t0, t1) = quadratic(a, b, c)?;
        // Sphere entirely behind the ray origin.
        if t0 <= EPSILON && t1 <= EPSILON {
            return None;
        }
        let t_hit = if t0 > EPSILON { t0 } else { t1 };

        let mut p_hit = r.at(t_hit);
        // A hit exactly on the pole axis would zero out the azimuthal
        // tangent; nudge it off the axis.
        if p_hit.x == 0.0 && p_hit.y == 0.0 {
            p_hit.x = 1e-5 * self.radius;
        }

        let normal = p_hit.normalize();
        let dp_du = Vector3f::new(-p_hit.y, p_hit.x, 0.0);
        let si = SurfaceInteraction::new(p_hit, normal, -r.dir(), dp_du)
            .transform(&self.to_world);
        let t_world = (si.p() - ray.origin()).dot(&ray.dir());
        Some((t_world, si))
    }

    fn sample(&self, u: &Vector2f) -> (SurfaceInteraction, Float) {
        // Uniform point on the sphere, positioned through the vector part of
        // the transform before the full interaction transform applies the
        // translation.
        let p_obj = self.to_world.apply_vector(sample_uniform_sphere(u) * self.radius);
        let normal = p_obj.normalize();
        let dp_du = Vector3f::new(-p_obj.y, p_obj.x, 0.0);

        let si = SurfaceInteraction::new(p_obj, normal, Vector3f::zeros(), dp_du)
            .transform(&self.to_world);
        (si, 1.0 / self.area())
    }

    fn area(&self) -> Float {
        4.0 * PI * self.radius * self.radius
    }

    fn bsdf(&self) -> &BSDF {
        &self.bsdf
    }
}

/* Tests for Sphere */
