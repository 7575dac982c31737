//! Spatial convolution engine.
//!
//! Computes the 2D correlation of a single-channel image with a small square
//! kernel. The output keeps the input size:
//!
//! - borders are replicated (coordinates clamp to the nearest edge),
//! - the kernel is applied as-is, without flipping,
//! - raw sums are rescaled into `[0, 255]` and quantized to `u8`.
//!
//! The scan is the naive O(H·W·k²) nested loop. `convolve_par` runs the same
//! per-row routine across the rayon pool.

pub mod border;
pub mod convolve;
pub mod parallel;
pub mod rescale;

pub use border::{pad_replicate, replicate};
pub use convolve::{convolve, convolve_raw, convolve_with};
pub use parallel::{convolve_par, convolve_par_with, convolve_raw_par};
pub use rescale::{rescale_intensity, RescaleMode, INTENSITY_MAX};
