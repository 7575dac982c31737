use std::time::Instant;

use log::debug;

use crate::convolve::border::replicate;
use crate::convolve::rescale::{rescale_intensity, RescaleMode};
use crate::error::ConvolutionError;
use crate::image::{Image, Sample};
use crate::kernel::Kernel;

/// Correlates `image` with `kernel` and returns an 8-bit image of the same size.
///
/// Border pixels are handled by replication, the kernel is not flipped, and
/// the raw sums are mapped into `[0, 255]` with [`RescaleMode::Fixed`].
///
/// # Errors
/// `ImageTooSmall` if the image has fewer rows or columns than the kernel
/// side length. Kernel shape is validated when the [`Kernel`] is built.
pub fn convolve<T: Sample>(image: &Image<T>, kernel: &Kernel) -> Result<Image<u8>, ConvolutionError> {
    convolve_with(image, kernel, RescaleMode::default())
}

/// [`convolve`] with an explicit rescale mode.
pub fn convolve_with<T: Sample>(
    image: &Image<T>,
    kernel: &Kernel,
    mode: RescaleMode,
) -> Result<Image<u8>, ConvolutionError> {
    let raw = convolve_raw(image, kernel)?;
    Ok(rescale_intensity(&raw, mode))
}

/// The raw correlation sums, before any rescaling.
///
/// Useful when the sign of the response matters (e.g. Sobel gradients).
pub fn convolve_raw<T: Sample>(image: &Image<T>, kernel: &Kernel) -> Result<Image<f64>, ConvolutionError> {
    check_fits(image, kernel)?;
    let started = Instant::now();
    let (h, w) = image.shape();

    let mut out = vec![0.0; h * w];
    for (y, out_row) in out.chunks_mut(w).enumerate() {
        correlate_row(image, kernel, y, out_row);
    }

    debug!(
        "convolve: {}x{} image, k={} pad={} in {:.3} ms",
        h,
        w,
        kernel.size(),
        kernel.pad(),
        started.elapsed().as_secs_f64() * 1000.0
    );
    Image::from_raw(h, w, out)
}

/// Rejects images with fewer rows or columns than the kernel.
pub(crate) fn check_fits<T: Copy>(image: &Image<T>, kernel: &Kernel) -> Result<(), ConvolutionError> {
    let (height, width) = image.shape();
    let k = kernel.size();
    if height < k || width < k || image.is_empty() {
        return Err(ConvolutionError::ImageTooSmall { height, width, kernel: k });
    }
    Ok(())
}

/// Fills `out` with the correlation sums of output row `y`.
///
/// Row `i` of the kernel reads image row `y + i - pad`, clamped into the
/// image; likewise for columns. Caller guarantees a non-empty image.
pub(crate) fn correlate_row<T: Sample>(image: &Image<T>, kernel: &Kernel, y: usize, out: &mut [f64]) {
    let (h, w) = image.shape();
    let pad = kernel.pad();
    let k = kernel.size();

    for (x, cell) in out.iter_mut().enumerate() {
        let mut sum = 0.0;
        for i in 0..k {
            let src = image.row(replicate(y + i, pad, h));
            for (j, &weight) in kernel.row(i).iter().enumerate() {
                let v: f64 = src[replicate(x + j, pad, w)].into();
                sum += weight * v;
            }
        }
        *cell = sum;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convolve::border::pad_replicate;
    use crate::kernel::KernelName;

    #[test]
    fn output_keeps_input_shape() {
        let img = Image::ramp(9, 13);
        for name in [KernelName::Sharpen, KernelName::SmallBlur, KernelName::Emboss] {
            let out = convolve(&img, &name.kernel()).unwrap();
            assert_eq!(out.shape(), img.shape(), "{name}");
        }
    }

    #[test]
    fn identity_reproduces_u8_input() {
        let img = Image::ramp(6, 8);
        let out = convolve(&img, &Kernel::identity(3).unwrap()).unwrap();
        assert_eq!(out, img);
        let out = convolve(&img, &Kernel::identity(5).unwrap()).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn box_blur_preserves_uniform_image() {
        let img = Image::filled(12, 12, 100u8);
        let out = convolve(&img, &KernelName::SmallBlur.kernel()).unwrap();
        assert!(out.as_slice().iter().all(|&v| v == 100));
    }

    #[test]
    fn sharpen_on_all_ones_patch_sums_to_one() {
        let img = Image::filled(3, 3, 1i32);
        let raw = convolve_raw(&img, &KernelName::Sharpen.kernel()).unwrap();
        assert!(raw.as_slice().iter().all(|&v| v == 1.0));
        let out = convolve(&img, &KernelName::Sharpen.kernel()).unwrap();
        assert_eq!(out.get(1, 1), 1);
    }

    #[test]
    fn interior_cell_is_manual_dot_product() {
        let img = Image::from_rows(vec![
            vec![10u8, 20, 30],
            vec![40, 50, 60],
            vec![70, 80, 90],
        ]).unwrap();
        let kernel = Kernel::from_rows(&[vec![0, -1, 0], vec![-1, 5, -1], vec![0, -1, 0]]).unwrap();
        let raw = convolve_raw(&img, &kernel).unwrap();
        // 5*50 - (20 + 40 + 60 + 80)
        assert_eq!(raw.get(1, 1), 50.0);
        // Top-left: neighbours above/left replicate the corner itself.
        // 5*10 - (10 + 10 + 20 + 40)
        assert_eq!(raw.get(0, 0), -30.0);
        assert_eq!(convolve(&img, &kernel).unwrap().get(0, 0), 0);
    }

    #[test]
    fn no_kernel_flip() {
        // Asymmetric kernel picking the right-hand neighbour.
        let img = Image::from_rows(vec![vec![1u8, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        let kernel = Kernel::from_array([[0, 0, 0], [0, 0, 1], [0, 0, 0]]).unwrap();
        let raw = convolve_raw(&img, &kernel).unwrap();
        assert_eq!(raw.get(1, 1), 6.0);
        assert_eq!(raw.get(1, 2), 6.0);
    }

    #[test]
    fn image_smaller_than_kernel_fails() {
        let img = Image::filled(4, 30, 0u8);
        let err = convolve(&img, &KernelName::SmallBlur.kernel()).unwrap_err();
        assert_eq!(err, ConvolutionError::ImageTooSmall { height: 4, width: 30, kernel: 7 });
    }

    #[test]
    fn empty_image_fails() {
        let img: Image<u8> = Image::filled(0, 0, 0);
        let k = Kernel::from_rows(&[vec![1.0]]).unwrap();
        assert!(matches!(convolve(&img, &k), Err(ConvolutionError::ImageTooSmall { .. })));
    }

    #[test]
    fn one_by_one_kernel_scales() {
        let img = Image::from_rows(vec![vec![10u16, 20], vec![30, 200]]).unwrap();
        let k = Kernel::from_rows(&[vec![2.0]]).unwrap();
        let out = convolve(&img, &k).unwrap();
        assert_eq!(out.as_slice(), &[20, 40, 60, 255]);
    }

    #[test]
    fn float_input_is_accepted() {
        let img = Image::filled(5, 5, 0.25f32);
        let out = convolve_with(&img, &Kernel::box_blur(3).unwrap(), RescaleMode::Fixed).unwrap();
        assert!(out.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn min_max_mode_spans_full_range() {
        let img = Image::ramp(5, 16);
        let out = convolve_with(&img, &KernelName::SobelX.kernel(), RescaleMode::MinMax).unwrap();
        let lo = out.as_slice().iter().min().copied();
        let hi = out.as_slice().iter().max().copied();
        assert_eq!((lo, hi), (Some(0), Some(255)));
    }

    #[test]
    fn clamped_scan_matches_padded_copy() {
        let img = Image::from_rows(vec![
            vec![3u8, 200, 17, 90, 45],
            vec![250, 0, 66, 12, 180],
            vec![9, 140, 77, 33, 5],
            vec![60, 61, 62, 63, 64],
        ]).unwrap();
        let kernel = KernelName::Emboss.kernel();
        let raw = convolve_raw(&img, &kernel).unwrap();

        let pad = kernel.pad();
        let padded = pad_replicate(&img, pad);
        for y in 0..img.height() {
            for x in 0..img.width() {
                let mut expected = 0.0;
                for i in 0..kernel.size() {
                    for j in 0..kernel.size() {
                        expected += kernel.weight(i, j) * padded.get(y + i, x + j) as f64;
                    }
                }
                assert_eq!(raw.get(y, x), expected, "at ({y}, {x})");
            }
        }
    }
}
