// Copyright @yucwang 2026

use macaron::integrators::path::PathTracer;
use macaron::io::image_utils;
use macaron::renderers::block::{BlockRenderer, Renderer};
use macaron::scenes::cornell;

use std::env;

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <output.exr|output.png> [--spp N] [--max-depth N] [--seed N] [--width N] [--height N]",
            args[0]
        );
        std::process::exit(1);
    }

    let output_path = &args[1];
    let mut spp: u32 = 64;
    let mut max_depth: u32 = 20;
    let mut seed: u64 = 0;
    let mut width: usize = 512;
    let mut height: usize = 512;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--spp" => {
                i += 1;
                spp = args.get(i).and_then(|v| v.parse::<u32>().ok()).unwrap_or(spp);
            }
            "--max-depth" => {
                i += 1;
                max_depth = args.get(i).and_then(|v| v.parse::<u32>().ok()).unwrap_or(max_depth);
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(seed);
            }
            "--width" => {
                i += 1;
                width = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(width);
            }
            "--height" => {
                i += 1;
                height = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(height);
            }
            _ => {}
        }
        i += 1;
    }

    let scene = cornell::cornell_box();
    let mut camera = cornell::cornell_camera(width, height);
    let integrator = Box::new(PathTracer::new(max_depth, spp));
    let renderer = BlockRenderer::new(integrator, seed);

    let image = renderer.render(&scene, &mut camera);

    if output_path.ends_with(".png") {
        image_utils::write_png_to_file(&image, output_path);
    } else {
        image_utils::write_exr_to_file(&image, output_path);
    }
}
