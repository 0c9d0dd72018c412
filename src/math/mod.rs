// Copyright @yucwang 2026

pub mod bitmap;
pub mod constants;
pub mod frame;
pub mod ray;
pub mod transform;
pub mod spectrum;
pub mod warp;
