//! Border replication.
//!
//! The engine never builds a padded copy: it maps every padded coordinate back
//! into the image by clamping to the nearest edge. `pad_replicate` still
//! materializes the copy for inspection and cross-checking.
use crate::image::Image;

/// Maps a coordinate in padded space (`0..len + 2 * pad`) to the source
/// coordinate whose value border replication places there.
///
/// `len` must be non-zero.
#[inline]
pub fn replicate(padded: usize, pad: usize, len: usize) -> usize {
    padded.saturating_sub(pad).min(len - 1)
}

/// Returns `image` grown by `pad` on every side, edges replicated outward.
///
/// Corner regions take the corner pixel; an empty image stays empty.
pub fn pad_replicate<T: Copy>(image: &Image<T>, pad: usize) -> Image<T> {
    let (h, w) = image.shape();
    if h == 0 || w == 0 {
        return image.clone();
    }
    let (ph, pw) = (h + 2 * pad, w + 2 * pad);
    let mut data = Vec::with_capacity(ph * pw);
    for py in 0..ph {
        let row = image.row(replicate(py, pad, h));
        data.extend((0..pw).map(|px| row[replicate(px, pad, w)]));
    }
    // Length is ph * pw by construction.
    Image::from_raw(ph, pw, data).unwrap_or_else(|_| image.clone())
}
