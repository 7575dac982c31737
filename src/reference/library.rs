use image::{imageops, GrayImage};
use serde::Serialize;

use crate::image::Image;
use crate::kernel::Kernel;

/// Agreement between our output and the library filter on interior pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceDiff {
    /// Number of pixels compared (the 1-pixel border is excluded).
    pub compared_pixels: usize,
    pub mean_abs_diff: f64,
    pub max_abs_diff: u8,
}

/// Runs `image::imageops::filter3x3` with `kernel`, when that is meaningful.
///
/// Returns `None` for kernels that are not 3×3, and for kernels whose weights
/// sum to anything other than 0 or 1: the library divides by a non-zero sum,
/// so only those kernels produce the same raw correlation as ours.
pub fn library_filter3x3(gray: &GrayImage, kernel: &Kernel) -> Option<GrayImage> {
    if kernel.size() != 3 {
        return None;
    }
    let sum = kernel.sum();
    if sum.abs() > 1e-9 && (sum - 1.0).abs() > 1e-9 {
        return None;
    }
    let (width, height) = gray.dimensions();
    if width < 3 || height < 3 {
        return None;
    }
    let weights: Vec<f32> = kernel.weights().iter().map(|&w| w as f32).collect();
    Some(imageops::filter3x3(gray, &weights))
}

/// Compares `ours` against the library filter applied to `gray`.
///
/// The library writes only interior pixels and leaves the border black, so
/// the border is skipped. `None` when no comparable library output exists.
pub fn compare_with_library(gray: &GrayImage, kernel: &Kernel, ours: &Image<u8>) -> Option<ReferenceDiff> {
    let (width, height) = gray.dimensions();
    if (ours.height(), ours.width()) != (height as usize, width as usize) {
        return None;
    }
    let theirs = library_filter3x3(gray, kernel)?;

    let mut total = 0u64;
    let mut max_abs_diff = 0u8;
    let mut compared_pixels = 0usize;
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let a = ours.get(y as usize, x as usize);
            let b = theirs.get_pixel(x, y).0[0];
            let diff = a.abs_diff(b);
            total += diff as u64;
            max_abs_diff = max_abs_diff.max(diff);
            compared_pixels += 1;
        }
    }

    Some(ReferenceDiff {
        compared_pixels,
        mean_abs_diff: total as f64 / compared_pixels as f64,
        max_abs_diff,
    })
}
