use rayon::prelude::*;

use crate::convolve::convolve::{check_fits, correlate_row};
use crate::convolve::rescale::{rescale_intensity, RescaleMode};
use crate::error::ConvolutionError;
use crate::image::{Image, Sample};
use crate::kernel::Kernel;

/// Row-parallel [`convolve`](crate::convolve::convolve).
///
/// Each output row is written by exactly one rayon task; the input image and
/// kernel are shared read-only. Output is identical to the sequential scan.
pub fn convolve_par<T: Sample>(image: &Image<T>, kernel: &Kernel) -> Result<Image<u8>, ConvolutionError> {
    convolve_par_with(image, kernel, RescaleMode::default())
}

pub fn convolve_par_with<T: Sample>(
    image: &Image<T>,
    kernel: &Kernel,
    mode: RescaleMode,
) -> Result<Image<u8>, ConvolutionError> {
    let raw = convolve_raw_par(image, kernel)?;
    Ok(rescale_intensity(&raw, mode))
}

pub fn convolve_raw_par<T: Sample>(image: &Image<T>, kernel: &Kernel) -> Result<Image<f64>, ConvolutionError> {
    check_fits(image, kernel)?;
    let (h, w) = image.shape();
    let mut out = vec![0.0; h * w];
    out.par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out_row)| correlate_row(image, kernel, y, out_row));
    Image::from_raw(h, w, out)
}
