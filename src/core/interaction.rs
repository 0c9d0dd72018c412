// Copyright @yucwang 2026

use crate::core::primitive::Primitive;
use crate::core::scene::Scene;
use crate::math::constants::Vector3f;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::math::transform::Transform;

/// A point on a surface together with its shading frame. The constructor is
/// the only place the frame is established: normal and dpdu are normalized
/// and dpdv is derived as normal x dpdu, so {dpdu, dpdv, normal} is always a
/// right-handed orthonormal basis.
pub struct SurfaceInteraction {
    p: Vector3f,
    normal: Vector3f,
    dp_du: Vector3f,
    dp_dv: Vector3f,
    wo: Vector3f,
    primitive: Option<usize>,
}

impl SurfaceInteraction {
    pub fn new(p: Vector3f, normal: Vector3f, wo: Vector3f, dp_du: Vector3f) -> Self {
        let normal = normal.normalize();
        let dp_du = dp_du.normalize();
        let dp_dv = normal.cross(&dp_du);
        Self { p, normal, dp_du, dp_dv, wo, primitive: None }
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    pub fn dp_du(&self) -> Vector3f {
        self.dp_du
    }

    pub fn dp_dv(&self) -> Vector3f {
        self.dp_dv
    }

    pub fn wo(&self) -> Vector3f {
        self.wo
    }

    /// Index of the owning primitive in the scene, attached by
    /// `Scene::intersect`. Non-owning: the interaction is transient while
    /// primitives live for the whole render.
    pub fn primitive(&self) -> Option<usize> {
        self.primitive
    }

    pub fn with_primitive(mut self, index: usize) -> Self {
        self.primitive = Some(index);
        self
    }

    /// Emitted radiance toward w. Only light primitives emit.
    pub fn le(&self, scene: &Scene, w: &Vector3f) -> RGBSpectrum {
        match self.primitive.and_then(|idx| scene.primitive(idx)) {
            Some(Primitive::Light(light)) => light.l(self, w),
            _ => RGBSpectrum::zero(),
        }
    }

    pub fn spawn_ray(&self, wi: &Vector3f) -> Ray3f {
        Ray3f::new(self.p, *wi)
    }

    /// Map the interaction to another space, rebuilding the shading frame
    /// from the transformed normal and tangent.
    pub fn transform(&self, t: &Transform) -> Self {
        let si = Self::new(
            t.apply_point(self.p),
            t.apply_normal(self.normal),
            t.apply_vector(self.wo),
            t.apply_vector(self.dp_du),
        );
        match self.primitive {
            Some(idx) => si.with_primitive(idx),
            None => si,
        }
    }
}

/* Tests for SurfaceInteraction */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::Vector3f;

    #[test]
    fn test_frame_is_orthonormal() {
        let si = SurfaceInteraction::new(
            Vector3f::zeros(),
            Vector3f::new(0.0, 0.0, 3.0),
            Vector3f::new(0.0, 0.0, 1.0),
            Vector3f::new(2.0, 0.0, 0.0),
        );

        assert!((si.normal().norm() - 1.0).abs() < 1e-12);
        assert!((si.dp_du().norm() - 1.0).abs() < 1e-12);
        assert!((si.dp_dv().norm() - 1.0).abs() < 1e-12);
        assert!(si.normal().dot(&si.dp_du()).abs() < 1e-12);
        assert!(si.normal().dot(&si.dp_dv()).abs() < 1e-12);
        // Right-handed: dpdu x dpdv = normal.
        assert!((si.dp_du().cross(&si.dp_dv()) - si.normal()).norm() < 1e-12);
    }

    #[test]
    fn test_transform_keeps_frame() {
        let si = SurfaceInteraction::new(
            Vector3f::new(1.0, 0.0, 0.0),
            Vector3f::new(0.0, 0.0, 1.0),
            Vector3f::new(0.0, 0.0, 1.0),
            Vector3f::new(1.0, 0.0, 0.0),
        );
        let t = Transform::rotate_x(-90.0).then(&Transform::translate(0.0, 0.0, 0.0));
        let si2 = si.transform(&t);

        assert!((si2.normal() - Vector3f::new(0.0, 1.0, 0.0)).norm() < 1e-9);
        assert!((si2.dp_du().cross(&si2.dp_dv()) - si2.normal()).norm() < 1e-9);
    }
}
