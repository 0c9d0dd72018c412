// Copyright @yucwang 2026

pub mod bxdf;
pub mod integrator;
pub mod interaction;
pub mod light;
pub mod primitive;
pub mod rng;
pub mod scene;
pub mod sensor;
pub mod shape;
