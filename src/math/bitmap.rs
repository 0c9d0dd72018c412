// Copyright @yucwang 2026

use super::constants::Float;
use super::spectrum::RGBSpectrum;

use std::ops;
use std::vec::Vec;

#[derive(Debug, Clone)]
pub struct Bitmap {
    data: Vec<RGBSpectrum>,
    height: usize,
    width: usize,
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = RGBSpectrum;

    fn index(&self, index: (usize, usize)) -> &RGBSpectrum {
        &self.data[index.0 + self.width * index.1]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut RGBSpectrum {
        &mut self.data[index.0 + self.width * index.1]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![RGBSpectrum::zero(); width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn raw_copy(&self) -> Vec<(Float, Float, Float)> {
        self.data.iter().map(|px| (px.r(), px.g(), px.b())).collect()
    }
}

/* Tests for Bitmap */

#[cfg(test)]
mod tests {
    use super::Bitmap;
    use super::RGBSpectrum;

    #[test]
    fn test_bitmap_basic_functions() {
        let mut bitmap = Bitmap::new(16, 8);
        assert_eq!(bitmap.width(), 16);
        assert_eq!(bitmap.height(), 8);

        bitmap[(5, 6)] = RGBSpectrum::new(1.0, 0.5, 0.6);
        assert!((bitmap[(5, 6)].r() - 1.0).abs() < 1e-9);
        assert!(bitmap[(4, 6)].is_black());

        let raw = bitmap.raw_copy();
        assert_eq!(raw.len(), 16 * 8);
        assert!((raw[5 + 16 * 6].1 - 0.5).abs() < 1e-9);
    }
}
