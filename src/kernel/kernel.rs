use serde::{Serialize, Deserialize};

use crate::error::ConvolutionError;

/// Square correlation kernel with an odd side length.
///
/// Construction validates the shape, so every `Kernel` in circulation has a
/// unique center tap and a symmetric padding of `(size - 1) / 2`. Serde goes
/// through the same validation via `try_from`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Kernel {
    size: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Builds a kernel from nested rows of any numeric type.
    ///
    /// Fails with `InvalidKernelShape` when the rows are empty, ragged,
    /// non-square or of even length.
    pub fn from_rows<T: Copy + Into<f64>>(rows: &[Vec<T>]) -> Result<Kernel, ConvolutionError> {
        let size = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(ConvolutionError::InvalidKernelShape { rows: size, cols: row.len() });
        }
        if size % 2 == 0 {
            return Err(ConvolutionError::InvalidKernelShape { rows: size, cols: size });
        }
        let weights = rows.iter().flatten().map(|&w| w.into()).collect();
        Ok(Kernel { size, weights })
    }

    /// Builds a kernel from a fixed-size square array literal.
    pub fn from_array<T: Copy + Into<f64>, const K: usize>(rows: [[T; K]; K]) -> Result<Kernel, ConvolutionError> {
        if K % 2 == 0 {
            return Err(ConvolutionError::InvalidKernelShape { rows: K, cols: K });
        }
        let weights = rows.iter().flatten().map(|&w| w.into()).collect();
        Ok(Kernel { size: K, weights })
    }

    /// `size`×`size` averaging kernel whose weights sum to 1.
    pub fn box_blur(size: usize) -> Result<Kernel, ConvolutionError> {
        Kernel::filled(size, 1.0 / (size * size) as f64)
    }

    /// All zeros except a 1 at the center.
    pub fn identity(size: usize) -> Result<Kernel, ConvolutionError> {
        let mut kernel = Kernel::filled(size, 0.0)?;
        let center = kernel.pad() * size + kernel.pad();
        kernel.weights[center] = 1.0;
        Ok(kernel)
    }

    fn filled(size: usize, weight: f64) -> Result<Kernel, ConvolutionError> {
        if size % 2 == 0 {
            return Err(ConvolutionError::InvalidKernelShape { rows: size, cols: size });
        }
        Ok(Kernel::uniform(size, weight))
    }

    /// Unchecked constructors for the built-in bank, whose sizes are odd literals.
    pub(crate) fn literal<const K: usize>(rows: [[f64; K]; K]) -> Kernel {
        debug_assert!(K % 2 == 1);
        Kernel { size: K, weights: rows.iter().flatten().copied().collect() }
    }

    pub(crate) fn uniform(size: usize, weight: f64) -> Kernel {
        debug_assert!(size % 2 == 1);
        Kernel { size, weights: vec![weight; size * size] }
    }

    /// Side length `k`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Border width needed on each side to keep the output size: `(k - 1) / 2`.
    pub fn pad(&self) -> usize {
        (self.size - 1) / 2
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.size;
        &self.weights[start..start + self.size]
    }

    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.size + j]
    }

    /// Row-major weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

impl TryFrom<Vec<Vec<f64>>> for Kernel {
    type Error = ConvolutionError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Kernel::from_rows(&rows)
    }
}

impl From<Kernel> for Vec<Vec<f64>> {
    fn from(kernel: Kernel) -> Self {
        kernel.weights
            .chunks(kernel.size)
            .map(|row| row.to_vec())
            .collect()
    }
}
