use serde::{Serialize, Deserialize};

use crate::image::Image;

/// Upper end of the 8-bit intensity range.
pub const INTENSITY_MAX: f64 = 255.0;

/// How raw correlation sums are mapped into `[0, 255]`.
///
/// - `Fixed`: treat `(0, 255)` as the input range: values inside pass
///   through, values outside are clipped. Keeps exact parity with the
///   classic `rescale_intensity(in_range=(0, 255))` behaviour.
/// - `MinMax`: stretch the image's actual min/max onto `[0, 255]`. A flat
///   image (max == min) falls back to `Fixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RescaleMode {
    #[default]
    Fixed,
    MinMax,
}

/// Rescales raw sums into `[0, 255]` and quantizes to `u8`, rounding to nearest.
pub fn rescale_intensity(raw: &Image<f64>, mode: RescaleMode) -> Image<u8> {
    match mode {
        RescaleMode::Fixed => raw.map(quantize),
        RescaleMode::MinMax => match value_range(raw.as_slice()) {
            Some((lo, hi)) if hi > lo => {
                let scale = INTENSITY_MAX / (hi - lo);
                raw.map(|v| quantize((v - lo) * scale))
            }
            _ => raw.map(quantize),
        },
    }
}

/// Smallest and largest finite value, or `None` if there are none.
pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[inline]
fn quantize(v: f64) -> u8 {
    // NaN saturates to 0 under `as`.
    v.clamp(0.0, INTENSITY_MAX).round() as u8
}
