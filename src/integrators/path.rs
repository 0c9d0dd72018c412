// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::interaction::SurfaceInteraction;
use crate::core::primitive::Primitive;
use crate::core::rng::Sampler;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::materials::bsdf::BSDF;
use crate::math::constants::{Float, Vector2f, EPSILON};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

/// Unidirectional path tracer: alternates BSDF sampling with single-light
/// direct sampling, terminated by Russian roulette past `rr_min_bounces`
/// and a hard depth cap.
pub struct PathTracer {
    max_depth: u32,
    rr_min_bounces: u32,
    samples_per_pixel: u32,
}

impl PathTracer {
    pub fn new(max_depth: u32, samples_per_pixel: u32) -> Self {
        Self { max_depth, rr_min_bounces: 3, samples_per_pixel }
    }

    /// Estimated radiance arriving along `ray`. Pure in (ray, scene) up to
    /// the sampler draws; safe to call from any worker thread.
    pub fn li(&self, scene: &Scene, mut ray: Ray3f, sampler: &mut dyn Sampler) -> RGBSpectrum {
        let mut l = RGBSpectrum::zero();
        let mut beta = RGBSpectrum::splat(1.0);
        let mut nbounces = 0u32;

        while nbounces < self.max_depth {
            let (_, si) = match scene.intersect(&ray) {
                Some(hit) => hit,
                None => break,
            };

            let wo = -ray.dir();

            let shape = match si.primitive().and_then(|idx| scene.primitive(idx)) {
                // A directly visible light contributes its emission; on
                // later bounces the previous direct-lighting estimate
                // already accounted for it.
                Some(Primitive::Light(_)) => {
                    if nbounces == 0 {
                        l = beta * si.le(scene, &wo);
                    }
                    break;
                }
                Some(Primitive::Shape(shape)) => shape.clone(),
                None => break,
            };

            let l_direct = uniform_sample_one_light(&si, shape.bsdf(), scene, sampler);
            l += beta * l_direct;

            let sample = shape.bsdf().sample_f(&wo, &si, sampler);
            // The estimator is undefined at pdf 0; stopping here is the
            // correct behavior, not an error.
            if sample.pdf <= EPSILON {
                break;
            }
            let cos_theta = sample.wi.dot(&si.normal()).abs();
            beta = beta * sample.f * (cos_theta / sample.pdf);

            ray = si.spawn_ray(&sample.wi);

            if nbounces > self.rr_min_bounces {
                beta = match roulette(beta, sampler.next_1d()) {
                    Some(beta) => beta,
                    None => break,
                };
            }

            nbounces += 1;
        }

        l
    }
}

/// Russian roulette step: terminate with probability q = 1 - max-channel of
/// the throughput, compensating survivors by 1 / (1 - q) so the expected
/// throughput is unchanged.
fn roulette(beta: RGBSpectrum, u: Float) -> Option<RGBSpectrum> {
    let q = (1.0 - beta.max_channel()).max(0.0).min(1.0);
    if u < q {
        return None;
    }
    Some(beta * (1.0 / (1.0 - q)))
}

/// Single-sample direct lighting: one light chosen uniformly, its sample
/// weighted by the light count to stay unbiased.
fn uniform_sample_one_light(
    si: &SurfaceInteraction,
    bsdf: &BSDF,
    scene: &Scene,
    sampler: &mut dyn Sampler,
) -> RGBSpectrum {
    let n_lights = scene.light_count();
    if n_lights == 0 {
        return RGBSpectrum::zero();
    }

    let index = ((sampler.next_1d() * n_lights as Float) as usize).min(n_lights - 1);
    let light = match scene.light(index) {
        Some(light) => light,
        None => return RGBSpectrum::zero(),
    };

    let ls = light.sample_li(si, sampler);
    if ls.pdf <= EPSILON || ls.li.is_black() {
        return RGBSpectrum::zero();
    }

    let f = bsdf.f(&si.wo(), &ls.wi, si);
    if f.is_black() {
        return RGBSpectrum::zero();
    }

    if !scene.unoccluded(&si.p(), &ls.p_light) {
        return RGBSpectrum::zero();
    }

    let cos_theta = ls.wi.dot(&si.normal()).abs();
    f * ls.li * (cos_theta / ls.pdf) * n_lights as Float
}

impl Integrator for PathTracer {
    fn trace_ray_forward(
        &self,
        scene: &Scene,
        sensor: &dyn Sensor,
        pixel: Vector2f,
        sampler: &mut dyn Sampler,
    ) -> RGBSpectrum {
        let bmp = sensor.bitmap();
        let u = Vector2f::new(
            (pixel.x + sampler.next_1d()) / bmp.width() as Float,
            (pixel.y + sampler.next_1d()) / bmp.height() as Float,
        );
        let ray = sensor.sample_ray(&u);
        self.li(scene, ray, sampler)
    }

    fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }
}

/* Tests for PathTracer */
