mod common;

use common::synthetic_image::{checkerboard_u8, noise_u8};
use ferrite_conv::convolve::{pad_replicate, convolve_raw_par};
use ferrite_conv::{
    convolve, convolve_par, convolve_raw, convolve_with, ConvolutionError, Image, Kernel,
    KernelName, RescaleMode,
};

#[test]
fn every_bank_kernel_keeps_shape() {
    let _ = env_logger::builder().is_test(true).try_init();
    let img = noise_u8(40, 25, 5);
    for &name in KernelName::all() {
        for mode in [RescaleMode::Fixed, RescaleMode::MinMax] {
            let out = convolve_with(&img, &name.kernel(), mode).unwrap();
            assert_eq!(out.shape(), img.shape(), "{name} {mode:?}");
        }
    }
}

#[test]
fn identity_reproduces_checkerboard() {
    let img = checkerboard_u8(17, 11, 4);
    assert_eq!(convolve(&img, &KernelName::Identity.kernel()).unwrap(), img);
}

#[test]
fn blur_of_uniform_image_is_uniform() {
    for value in [0u8, 1, 37, 128, 254, 255] {
        let img = Image::filled(23, 30, value);
        for name in [KernelName::SmallBlur, KernelName::LargeBlur] {
            let out = convolve(&img, &name.kernel()).unwrap();
            assert!(out.as_slice().iter().all(|&v| v == value), "{name} on {value}");
        }
    }
}

#[test]
fn gradients_vanish_on_uniform_image() {
    let img = Image::filled(8, 8, 90u8);
    for name in [KernelName::Laplacian, KernelName::SobelX, KernelName::SobelY] {
        let raw = convolve_raw(&img, &name.kernel()).unwrap();
        assert!(raw.as_slice().iter().all(|&v| v == 0.0), "{name}");
    }
}

#[test]
fn sobel_x_sees_vertical_edge_only() {
    // Left half dark, right half bright.
    let mut img = Image::filled(6, 8, 0u8);
    for y in 0..6 {
        for x in 4..8 {
            img.set(y, x, 100);
        }
    }
    let gx = convolve_raw(&img, &KernelName::SobelX.kernel()).unwrap();
    let gy = convolve_raw(&img, &KernelName::SobelY.kernel()).unwrap();
    assert_eq!(gx.get(2, 3), 400.0);
    assert_eq!(gx.get(2, 4), 400.0);
    assert_eq!(gx.get(2, 0), 0.0);
    assert!(gy.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn signed_integer_and_float_images_agree() {
    let ints = Image::from_rows(vec![
        vec![-5i32, 10, 3, 7],
        vec![0, 12, -8, 1],
        vec![4, 4, 4, 4],
    ])
    .unwrap();
    let floats = ints.map(|v| v as f64);
    let kernel = KernelName::Emboss.kernel();
    assert_eq!(convolve_raw(&ints, &kernel).unwrap(), convolve_raw(&floats, &kernel).unwrap());
}

#[test]
fn padded_copy_has_replicated_border() {
    let img = checkerboard_u8(5, 5, 1);
    let padded = pad_replicate(&img, 3);
    assert_eq!(padded.shape(), (11, 11));
    assert_eq!(padded.get(0, 0), img.get(0, 0));
    assert_eq!(padded.get(10, 10), img.get(4, 4));
    assert_eq!(padded.get(5, 0), img.get(2, 0));
}

#[test]
fn parallel_and_sequential_agree_on_large_image() {
    let img = noise_u8(257, 131, 99);
    let kernel = KernelName::SmallBlur.kernel();
    assert_eq!(convolve(&img, &kernel).unwrap(), convolve_par(&img, &kernel).unwrap());
    assert_eq!(
        convolve_raw(&img, &kernel).unwrap(),
        convolve_raw_par(&img, &kernel).unwrap()
    );
}

#[test]
fn even_kernel_never_reaches_the_scan() {
    let err = Kernel::from_rows(&[vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap_err();
    assert_eq!(err, ConvolutionError::InvalidKernelShape { rows: 2, cols: 2 });
}

#[test]
fn image_smaller_than_kernel_fails_both_paths() {
    let img = noise_u8(20, 50, 1);
    let kernel = KernelName::LargeBlur.kernel();
    let expected = ConvolutionError::ImageTooSmall { height: 50, width: 20, kernel: 21 };
    assert_eq!(convolve(&img, &kernel).unwrap_err(), expected);
    assert_eq!(convolve_par(&img, &kernel).unwrap_err(), expected);
}
