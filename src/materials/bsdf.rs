// Copyright @yucwang 2026

use crate::core::bxdf::BxDF;
use crate::core::interaction::SurfaceInteraction;
use crate::core::rng::Sampler;
use crate::math::constants::{Float, Vector3f, EPSILON};
use crate::math::spectrum::RGBSpectrum;

/// Result of sampling a BSDF in world space. A pdf of 0 signals that no
/// valid direction could be drawn; the path must terminate rather than
/// divide by it.
pub struct BSDFSample {
    pub f: RGBSpectrum,
    pub wi: Vector3f,
    pub pdf: Float,
    pub is_specular: bool,
}

impl BSDFSample {
    fn failed() -> Self {
        Self {
            f: RGBSpectrum::zero(),
            wi: Vector3f::zeros(),
            pdf: 0.0,
            is_specular: false,
        }
    }
}

/// An ordered collection of BxDFs attached to a surface point. Evaluation
/// sums every component; sampling draws one component uniformly and folds
/// the others into a one-sample estimate over the mixture.
pub struct BSDF {
    bxdfs: Vec<Box<dyn BxDF>>,
}

impl BSDF {
    pub fn new() -> Self {
        Self { bxdfs: Vec::new() }
    }

    pub fn add(mut self, bxdf: Box<dyn BxDF>) -> Self {
        self.bxdfs.push(bxdf);
        self
    }

    pub fn len(&self) -> usize {
        self.bxdfs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bxdfs.is_empty()
    }

    /// True only if every component is specular.
    pub fn is_specular(&self) -> bool {
        !self.bxdfs.is_empty() && self.bxdfs.iter().all(|b| b.is_specular())
    }

    pub fn f(
        &self,
        wo_world: &Vector3f,
        wi_world: &Vector3f,
        si: &SurfaceInteraction,
    ) -> RGBSpectrum {
        let wo = world_to_local(wo_world, si);
        let wi = world_to_local(wi_world, si);
        if wo.z.abs() < EPSILON {
            return RGBSpectrum::zero();
        }

        let mut f = RGBSpectrum::zero();
        for bxdf in &self.bxdfs {
            f += bxdf.f(&wo, &wi);
        }
        f
    }

    /// Sample an incident direction in world space. One component is chosen
    /// uniformly regardless of its relative energy; the summed pdf is
    /// averaged over the component count. The specular flag reported is the
    /// sampled component's, not the aggregate's.
    pub fn sample_f(
        &self,
        wo_world: &Vector3f,
        si: &SurfaceInteraction,
        sampler: &mut dyn Sampler,
    ) -> BSDFSample {
        let wo = world_to_local(wo_world, si);
        if self.bxdfs.is_empty() || wo.z.abs() < EPSILON {
            return BSDFSample::failed();
        }

        let count = self.bxdfs.len();
        let comp = ((sampler.next_1d() * count as Float) as usize).min(count - 1);
        let chosen = &self.bxdfs[comp];

        let (mut f, wi, mut pdf) = chosen.sample_f(&wo, &sampler.next_2d());
        if pdf < EPSILON {
            return BSDFSample::failed();
        }

        for (i, bxdf) in self.bxdfs.iter().enumerate() {
            if i != comp {
                pdf += bxdf.pdf(&wo, &wi);
                f += bxdf.f(&wo, &wi);
            }
        }
        pdf /= count as Float;

        BSDFSample {
            f,
            wi: local_to_world(&wi, si),
            pdf,
            is_specular: chosen.is_specular(),
        }
    }

    /// Arithmetic mean of the component pdfs.
    pub fn pdf(
        &self,
        wo_world: &Vector3f,
        wi_world: &Vector3f,
        si: &SurfaceInteraction,
    ) -> Float {
        if self.bxdfs.is_empty() {
            return 0.0;
        }
        let wo = world_to_local(wo_world, si);
        let wi = world_to_local(wi_world, si);
        if wo.z == 0.0 {
            return 0.0;
        }

        let sum: Float = self.bxdfs.iter().map(|b| b.pdf(&wo, &wi)).sum();
        sum / self.bxdfs.len() as Float
    }
}

impl Default for BSDF {
    fn default() -> Self {
        Self::new()
    }
}

fn world_to_local(v: &Vector3f, si: &SurfaceInteraction) -> Vector3f {
    Vector3f::new(
        v.dot(&si.dp_du()),
        v.dot(&si.dp_dv()),
        v.dot(&si.normal()),
    )
}

fn local_to_world(v: &Vector3f, si: &SurfaceInteraction) -> Vector3f {
    si.dp_du() * v.x + si.dp_dv() * v.y + si.normal() * v.z
}

/* Tests for BSDF */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{LcgRng, Sampler};
    use crate::materials::lambertian::Lambertian;

    fn flat_interaction() -> SurfaceInteraction {
        SurfaceInteraction::new(
            Vector3f::zeros(),
            Vector3f::new(0.0, 0.0, 1.0),
            Vector3f::new(0.0, 0.0, 1.0),
            Vector3f::new(1.0, 0.0, 0.0),
        )
    }

    #[test]
    fn test_identical_components_sum_and_average() {
        // N identical BxDFs: f sums to N times a single component while the
        // pdf stays the single-component value (mean of N equal pdfs).
        let single = BSDF::new().add(Box::new(Lambertian::new(RGBSpectrum::splat(0.5))));
        let triple = BSDF::new()
            .add(Box::new(Lambertian::new(RGBSpectrum::splat(0.5))))
            .add(Box::new(Lambertian::new(RGBSpectrum::splat(0.5))))
            .add(Box::new(Lambertian::new(RGBSpectrum::splat(0.5))));

        let si = flat_interaction();
        let wo = Vector3f::new(0.2, 0.1, 0.9).normalize();
        let wi = Vector3f::new(-0.3, 0.2, 0.8).normalize();

        let f1 = single.f(&wo, &wi, &si);
        let f3 = triple.f(&wo, &wi, &si);
        assert!((f3.r() - 3.0 * f1.r()).abs() < 1e-9);

        let p1 = single.pdf(&wo, &wi, &si);
        let p3 = triple.pdf(&wo, &wi, &si);
        assert!((p3 - p1).abs() < 1e-9);
    }

    #[test]
    fn test_grazing_wo_yields_zero() {
        let bsdf = BSDF::new().add(Box::new(Lambertian::new(RGBSpectrum::splat(0.5))));
        let si = flat_interaction();
        let wo = Vector3f::new(1.0, 0.0, 0.0);
        let wi = Vector3f::new(0.0, 0.0, 1.0);

        assert!(bsdf.f(&wo, &wi, &si).is_black());

        let mut rng = LcgRng::new(1);
        let sample = bsdf.sample_f(&wo, &si, &mut rng);
        assert_eq!(sample.pdf, 0.0);
        assert!(sample.f.is_black());
        assert!(!sample.is_specular);
    }

    #[test]
    fn test_empty_bsdf_never_samples() {
        let bsdf = BSDF::new();
        let si = flat_interaction();
        let wo = Vector3f::new(0.0, 0.0, 1.0);

        let mut rng = LcgRng::new(1);
        let sample = bsdf.sample_f(&wo, &si, &mut rng);
        assert_eq!(sample.pdf, 0.0);
        assert!(!bsdf.is_specular());
        assert_eq!(bsdf.pdf(&wo, &Vector3f::new(0.0, 0.0, 1.0), &si), 0.0);
    }

    #[test]
    fn test_sample_f_consistent_with_f_and_pdf() {
        let bsdf = BSDF::new()
            .add(Box::new(Lambertian::new(RGBSpectrum::splat(0.3))))
            .add(Box::new(Lambertian::new(RGBSpectrum::splat(0.6))));
        let si = flat_interaction();
        let wo = Vector3f::new(0.1, 0.4, 0.9).normalize();

        let mut rng = LcgRng::new(9);
        for _ in 0..64 {
            let sample = bsdf.sample_f(&wo, &si, &mut rng);
            assert!(sample.pdf > 0.0);

            let f_direct = bsdf.f(&wo, &sample.wi, &si);
            let pdf_direct = bsdf.pdf(&wo, &sample.wi, &si);
            assert!((sample.f.r() - f_direct.r()).abs() < 1e-9);
            assert!((sample.pdf - pdf_direct).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sampled_wi_is_world_space_unit() {
        // Tilted frame: sampled directions must come back in world space.
        let si = SurfaceInteraction::new(
            Vector3f::zeros(),
            Vector3f::new(0.0, 1.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
            Vector3f::new(1.0, 0.0, 0.0),
        );
        let bsdf = BSDF::new().add(Box::new(Lambertian::new(RGBSpectrum::splat(0.5))));
        let wo = Vector3f::new(0.0, 1.0, 0.0);

        let mut rng = LcgRng::new(77);
        for _ in 0..32 {
            let sample = bsdf.sample_f(&wo, &si, &mut rng);
            assert!((sample.wi.norm() - 1.0).abs() < 1e-9);
            // Reflected side of the surface.
            assert!(sample.wi.dot(&si.normal()) > 0.0);
        }
    }
}
