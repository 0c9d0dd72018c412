// Copyright @yucwang 2026

use crate::core::scene::Scene;
use crate::emitters::area::DiffuseAreaLight;
use crate::materials::bsdf::BSDF;
use crate::materials::lambertian::Lambertian;
use crate::materials::oren_nayar::OrenNayar;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use crate::math::transform::Transform;
use crate::sensors::perspective::PerspectiveCamera;
use crate::shapes::disk::Disk;
use crate::shapes::quad::Quad;
use crate::shapes::sphere::Sphere;

use std::sync::Arc;

const BOX_WIDTH: Float = 556.0;
const BOX_HEIGHT: Float = 548.8;
const BOX_DEPTH: Float = 559.2;

fn lambertian(r: Float, g: Float, b: Float) -> BSDF {
    BSDF::new().add(Box::new(Lambertian::new(RGBSpectrum::new(r, g, b))))
}

/// The Cornell box: five diffuse walls, a disk light in the ceiling, a blue
/// Lambertian sphere and a yellow Oren-Nayar sphere.
pub fn cornell_box() -> Scene {
    let mut scene = Scene::new();

    // Floor.
    scene.add_shape(Arc::new(Quad::new(
        BOX_WIDTH,
        BOX_DEPTH,
        Transform::translate(BOX_WIDTH / 2.0, 0.0, BOX_DEPTH / 2.0)
            .then(&Transform::rotate_x(-90.0)),
        lambertian(1.0, 1.0, 1.0),
    )));

    // Ceiling.
    scene.add_shape(Arc::new(Quad::new(
        BOX_WIDTH,
        BOX_DEPTH,
        Transform::translate(BOX_WIDTH / 2.0, BOX_HEIGHT, BOX_DEPTH / 2.0)
            .then(&Transform::rotate_x(90.0)),
        lambertian(1.0, 1.0, 1.0),
    )));

    // Back wall.
    scene.add_shape(Arc::new(Quad::new(
        BOX_WIDTH,
        BOX_HEIGHT,
        Transform::translate(BOX_WIDTH / 2.0, BOX_HEIGHT / 2.0, BOX_DEPTH)
            .then(&Transform::rotate_x(180.0)),
        lambertian(1.0, 1.0, 1.0),
    )));

    // Right wall, green.
    scene.add_shape(Arc::new(Quad::new(
        BOX_DEPTH,
        BOX_HEIGHT,
        Transform::translate(BOX_WIDTH, BOX_HEIGHT / 2.0, BOX_DEPTH / 2.0)
            .then(&Transform::rotate_y(-90.0)),
        lambertian(0.0, 0.5, 0.0),
    )));

    // Left wall, red.
    scene.add_shape(Arc::new(Quad::new(
        BOX_DEPTH,
        BOX_HEIGHT,
        Transform::translate(0.0, BOX_HEIGHT / 2.0, BOX_DEPTH / 2.0)
            .then(&Transform::rotate_y(90.0)),
        lambertian(1.0, 0.0, 0.0),
    )));

    // Disk light just below the ceiling, facing down.
    scene.add_light(Arc::new(DiffuseAreaLight::new(
        Arc::new(Disk::new(
            80.0,
            0.1,
            Transform::translate(278.0, 548.0, 280.0).then(&Transform::rotate_x(90.0)),
            BSDF::new(),
        )),
        RGBSpectrum::splat(1.0),
        20.0,
    )));

    // Blue Lambertian sphere.
    scene.add_shape(Arc::new(Sphere::new(
        100.0,
        Transform::translate(150.0, 100.0, 420.0),
        lambertian(0.0, 0.0, 1.0),
    )));

    // Yellow rough-diffuse sphere.
    scene.add_shape(Arc::new(Sphere::new(
        100.0,
        Transform::translate(400.0, 100.0, 230.0),
        BSDF::new().add(Box::new(OrenNayar::new(RGBSpectrum::new(1.0, 1.0, 0.0), 1.0))),
    )));

    scene
}

/// Camera matching the box: at the open front face, looking down +z through
/// an image plane of width 5.5 at distance 8.
pub fn cornell_camera(width: usize, height: usize) -> PerspectiveCamera {
    let origin = Vector3f::new(278.0, 274.4, -800.0);
    let target = Vector3f::new(278.0, 274.4, 0.0);
    let fov_y: Float = 2.0 * (((5.5 / 2.0) / 8.0) as Float).atan();
    PerspectiveCamera::new(origin, target, Vector3f::new(0.0, 1.0, 0.0), fov_y, width, height)
}

/* Tests for the Cornell scene */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sensor::Sensor;
    use crate::math::ray::Ray3f;

    #[test]
    fn test_box_is_closed_along_main_axes() {
        let scene = cornell_box();
        let center = Vector3f::new(278.0, 274.4, 280.0);

        for dir in [
            Vector3f::new(1.0, 0.0, 0.0),
            Vector3f::new(-1.0, 0.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
            Vector3f::new(0.0, -1.0, 0.0),
            Vector3f::new(0.0, 0.0, 1.0),
        ] {
            let ray = Ray3f::new(center, dir);
            assert!(scene.intersect(&ray).is_some(), "open box along {:?}", dir);
        }
    }

    #[test]
    fn test_walls_face_inward() {
        let scene = cornell_box();
        let center = Vector3f::new(278.0, 274.4, 280.0);

        let ray = Ray3f::new(center, Vector3f::new(0.0, -1.0, 0.0));
        let (_, si) = scene.intersect(&ray).expect("floor hit");
        assert!((si.normal() - Vector3f::new(0.0, 1.0, 0.0)).norm() < 1e-6);

        let ray = Ray3f::new(center, Vector3f::new(1.0, 0.0, 0.0));
        let (_, si) = scene.intersect(&ray).expect("right wall hit");
        assert!((si.normal() - Vector3f::new(-1.0, 0.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_ceiling_ray_reaches_light_first() {
        let scene = cornell_box();
        // Straight up under the light disk.
        let ray = Ray3f::new(Vector3f::new(278.0, 274.4, 280.0), Vector3f::new(0.0, 1.0, 0.0));
        let (t, si) = scene.intersect(&ray).expect("light hit");
        assert!(t < 548.8 - 274.4);

        let wo = Vector3f::new(0.0, -1.0, 0.0);
        let le = si.le(&scene, &wo);
        assert!((le.r() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_camera_center_ray_enters_the_box() {
        let scene = cornell_box();
        let camera = cornell_camera(16, 16);
        let ray = camera.sample_ray(&crate::math::constants::Vector2f::new(0.5, 0.5));

        // Center ray flies through the open front and lands on the back.
        let (_, si) = scene.intersect(&ray).expect("back wall hit");
        assert!((si.p().z - 559.2).abs() < 1.0);
    }
}
