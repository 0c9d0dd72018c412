// Copyright @yucwang 2026

pub mod disk;
pub mod quad;
pub mod sphere;
