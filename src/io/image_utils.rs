/* Copyright @yucwang 2026 */

use crate::math::bitmap::Bitmap;
use crate::math::constants::Float;

use exr::prelude::*;

// Write a linear-light EXR image to file.
pub fn write_exr_to_file(image: &Bitmap, file_path: &str) {
    log::info!("Starting writing openexr image: {}.", file_path);

    let raw = image.raw_copy();
    let width = image.width();
    let height = image.height();
    let write_result = write_rgb_file(file_path, width, height, |x, y| {
        let px = raw[y * width + x];
        (px.0 as f32, px.1 as f32, px.2 as f32)
    });
    match write_result {
        Ok(()) => log::info!("EXR written to: {}.", file_path),
        Err(e) => log::error!("EXR write error: {}.", e.to_string()),
    }
}

// Write a gamma-encoded 8-bit PNG to file.
pub fn write_png_to_file(image: &Bitmap, file_path: &str) {
    log::info!("Starting writing png image: {}.", file_path);

    let width = image.width();
    let height = image.height();
    let mut buffer = image::RgbImage::new(width as u32, height as u32);
    for y in 0..height {
        for x in 0..width {
            let px = image[(x, y)];
            buffer.put_pixel(
                x as u32,
                y as u32,
                image::Rgb([
                    encode_srgb(px.r()),
                    encode_srgb(px.g()),
                    encode_srgb(px.b()),
                ]),
            );
        }
    }
    match buffer.save(file_path) {
        Ok(()) => log::info!("PNG written to: {}.", file_path),
        Err(e) => log::error!("PNG write error: {}.", e.to_string()),
    }
}

fn encode_srgb(v: Float) -> u8 {
    let v = v.max(0.0).min(1.0);
    let encoded = if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    };
    (encoded * 255.0 + 0.5) as u8
}
