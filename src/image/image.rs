use rand::prelude::*;

use crate::error::ConvolutionError;

/// A numeric pixel sample the engine can read.
///
/// Any `Copy` scalar that widens losslessly to `f64` qualifies (`u8`, `u16`,
/// `i16`, `i32`, `f32`, `f64`, ...). `Send + Sync` lets the parallel scan
/// share the input image across worker threads.
pub trait Sample: Copy + Into<f64> + Send + Sync {}

impl<T: Copy + Into<f64> + Send + Sync> Sample for T {}

/// Single-channel image stored row-major with no row padding.
///
/// `data.len() == height * width` always holds; every constructor checks it.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    pub(super) height: usize,
    pub(super) width: usize,
    pub(super) data: Vec<T>,
}

impl<T: Copy> Image<T> {
    /// Image of the given size with every sample set to `value`.
    pub fn filled(height: usize, width: usize, value: T) -> Image<T> {
        Image {
            height,
            width,
            data: vec![value; height * width],
        }
    }

    /// Wraps a row-major buffer. Fails if its length is not `height * width`.
    pub fn from_raw(height: usize, width: usize, data: Vec<T>) -> Result<Image<T>, ConvolutionError> {
        let expected = height * width;
        if data.len() != expected {
            return Err(ConvolutionError::BufferSize { expected, actual: data.len() });
        }
        Ok(Image { height, width, data })
    }

    /// Builds an image from nested rows. Ragged rows are rejected.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Image<T>, ConvolutionError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if let Some(row) = rows.iter().find(|row| row.len() != width) {
            return Err(ConvolutionError::BufferSize { expected: width, actual: row.len() });
        }
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Image::from_raw(height, width, data)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, y: usize, x: usize) -> T {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, y: usize, x: usize, value: T) {
        self.data[y * self.width + x] = value;
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, and a zero-width image has no samples anyway.
        self.data.chunks(self.width.max(1)).take(self.height)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<T> {
        self.data
    }

    /// Applies `functor` to every sample, keeping the shape.
    pub fn map<U, F>(&self, functor: F) -> Image<U>
    where
        F: Fn(T) -> U,
    {
        Image {
            height: self.height,
            width: self.width,
            data: self.data.iter().map(|&v| functor(v)).collect(),
        }
    }
}

impl Image<u8> {
    /// Uniform random 8-bit noise drawn from `rng`.
    pub fn random<R: Rng + ?Sized>(height: usize, width: usize, rng: &mut R) -> Image<u8> {
        let data = (0..height * width).map(|_| rng.gen::<u8>()).collect();
        Image { height, width, data }
    }

    /// Horizontal ramp from 0 on the left edge to 255 on the right edge.
    pub fn ramp(height: usize, width: usize) -> Image<u8> {
        let span = width.saturating_sub(1).max(1) as f64;
        let row: Vec<u8> = (0..width)
            .map(|x| (x as f64 * 255.0 / span).round() as u8)
            .collect();
        let data = row.iter().copied().cycle().take(height * width).collect();
        Image { height, width, data }
    }
}
