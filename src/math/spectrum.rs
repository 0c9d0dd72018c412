// Copyright @yucwang 2026

use super::constants::{Float, Vector3f};

use std::ops;

/// RGB radiance value. All channel arithmetic is componentwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RGBSpectrum {
    rgb: Vector3f,
}

impl Default for RGBSpectrum {
    fn default() -> Self {
        Self { rgb: Vector3f::zeros() }
    }
}

impl RGBSpectrum {
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self { rgb: Vector3f::new(r, g, b) }
    }

    pub fn splat(v: Float) -> Self {
        Self { rgb: Vector3f::new(v, v, v) }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn r(&self) -> Float {
        self.rgb[0]
    }

    pub fn g(&self) -> Float {
        self.rgb[1]
    }

    pub fn b(&self) -> Float {
        self.rgb[2]
    }

    pub fn is_black(&self) -> bool {
        self.rgb[0] == 0.0 && self.rgb[1] == 0.0 && self.rgb[2] == 0.0
    }

    // The reduction Russian roulette keys on.
    pub fn max_channel(&self) -> Float {
        self.rgb[0].max(self.rgb[1]).max(self.rgb[2])
    }

    pub fn has_nan(&self) -> bool {
        self.rgb[0].is_nan() || self.rgb[1].is_nan() || self.rgb[2].is_nan()
    }
}

impl ops::Index<usize> for RGBSpectrum {
    type Output = Float;

    fn index(&self, index: usize) -> &Float {
        &self.rgb[index]
    }
}

impl ops::Add for RGBSpectrum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { rgb: self.rgb + rhs.rgb }
    }
}

impl ops::AddAssign for RGBSpectrum {
    fn add_assign(&mut self, rhs: Self) {
        self.rgb += rhs.rgb;
    }
}

impl ops::Sub for RGBSpectrum {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { rgb: self.rgb - rhs.rgb }
    }
}

impl ops::Mul for RGBSpectrum {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self { rgb: self.rgb.component_mul(&rhs.rgb) }
    }
}

impl ops::MulAssign for RGBSpectrum {
    fn mul_assign(&mut self, rhs: Self) {
        self.rgb = self.rgb.component_mul(&rhs.rgb);
    }
}

impl ops::Mul<Float> for RGBSpectrum {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self {
        Self { rgb: self.rgb * rhs }
    }
}

impl ops::Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;

    fn mul(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum { rgb: rhs.rgb * self }
    }
}

impl ops::MulAssign<Float> for RGBSpectrum {
    fn mul_assign(&mut self, rhs: Float) {
        self.rgb *= rhs;
    }
}

impl ops::Div<Float> for RGBSpectrum {
    type Output = Self;

    fn div(self, rhs: Float) -> Self {
        Self { rgb: self.rgb / rhs }
    }
}

/* Tests for RGBSpectrum */

#[cfg(test)]
mod tests {
    use super::RGBSpectrum;

    #[test]
    fn test_spectrum_arithmetic() {
        let a = RGBSpectrum::new(0.5, 1.0, 2.0);
        let b = RGBSpectrum::new(2.0, 0.5, 0.25);

        let sum = a + b;
        assert!((sum.r() - 2.5).abs() < 1e-9);
        assert!((sum.g() - 1.5).abs() < 1e-9);
        assert!((sum.b() - 2.25).abs() < 1e-9);

        let prod = a * b;
        assert!((prod.r() - 1.0).abs() < 1e-9);
        assert!((prod.g() - 0.5).abs() < 1e-9);
        assert!((prod.b() - 0.5).abs() < 1e-9);

        let scaled = a * 2.0;
        assert!((scaled.b() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_spectrum_reductions() {
        assert!(RGBSpectrum::zero().is_black());
        assert!(!RGBSpectrum::new(0.0, 1e-9, 0.0).is_black());
        assert!((RGBSpectrum::new(0.1, 0.7, 0.3).max_channel() - 0.7).abs() < 1e-9);
    }
}
