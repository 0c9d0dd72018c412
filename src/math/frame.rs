// Copyright @yucwang 2026

// Spherical trigonometry helpers for directions expressed in the local
// shading frame, where the z axis is the shading normal.

use super::constants::{Float, Vector3f};

pub fn cos_theta(w: &Vector3f) -> Float {
    w.z
}

pub fn abs_cos_theta(w: &Vector3f) -> Float {
    w.z.abs()
}

pub fn sin2_theta(w: &Vector3f) -> Float {
    (1.0 - w.z * w.z).max(0.0)
}

pub fn sin_theta(w: &Vector3f) -> Float {
    sin2_theta(w).sqrt()
}

pub fn cos_phi(w: &Vector3f) -> Float {
    let s = sin_theta(w);
    if s == 0.0 {
        1.0
    } else {
        (w.x / s).max(-1.0).min(1.0)
    }
}

pub fn sin_phi(w: &Vector3f) -> Float {
    let s = sin_theta(w);
    if s == 0.0 {
        0.0
    } else {
        (w.y / s).max(-1.0).min(1.0)
    }
}

pub fn same_hemisphere(wo: &Vector3f, wi: &Vector3f) -> bool {
    wo.z * wi.z > 0.0
}
