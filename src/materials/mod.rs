// Copyright @yucwang 2026

pub mod bsdf;
pub mod lambertian;
pub mod oren_nayar;
