// Copyright @yucwang 2026

use crate::core::interaction::SurfaceInteraction;
use crate::core::light::{Light, LightLiSample};
use crate::core::rng::Sampler;
use crate::core::shape::Shape;
use crate::math::constants::{Float, Vector3f, EPSILON};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

use std::sync::Arc;

/// One-sided diffuse emitter over an arbitrary shape.
pub struct DiffuseAreaLight {
    shape: Arc<dyn Shape>,
    lemit: RGBSpectrum,
}

impl DiffuseAreaLight {
    pub fn new(shape: Arc<dyn Shape>, radiance: RGBSpectrum, intensity: Float) -> Self {
        Self { shape, lemit: radiance * intensity }
    }
}

impl Light for DiffuseAreaLight {
    fn intersect(&self, ray: &Ray3f) -> Option<(Float, SurfaceInteraction)> {
        self.shape.intersect(ray)
    }

    fn sample_li(&self, source: &SurfaceInteraction, sampler: &mut dyn Sampler) -> LightLiSample {
        let (p_shape, pdf) = self.shape.sample_toward(&source.p(), &sampler.next_2d());

        let to_light = p_shape.p() - source.p();
        if pdf == 0.0 || to_light.dot(&to_light) < EPSILON {
            return LightLiSample::zero();
        }

        let wi = to_light.normalize();
        let li = self.l(&p_shape, &-wi);
        LightLiSample { li, wi, pdf, p_light: p_shape.p() }
    }

    fn l(&self, si: &SurfaceInteraction, w: &Vector3f) -> RGBSpectrum {
        if si.normal().dot(w) > 0.0 {
            self.lemit
        } else {
            RGBSpectrum::zero()
        }
    }

    fn pdf_li(&self, si: &SurfaceInteraction, wi: &Vector3f) -> Float {
        self.shape.pdf(&si.p(), wi)
    }
}

/* Tests for DiffuseAreaLight */
