use ferrite_conv::Image;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// High-contrast checkerboard with square cells of `cell` pixels.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Image<u8> {
    assert!(cell > 0, "cell size must be positive");
    let mut img = Image::filled(height, width, 0u8);
    for y in 0..height {
        for x in 0..width {
            let val = if ((x / cell) + (y / cell)) % 2 == 0 { 32 } else { 220 };
            img.set(y, x, val);
        }
    }
    img
}

/// Reproducible uniform noise.
pub fn noise_u8(width: usize, height: usize, seed: u64) -> Image<u8> {
    Image::random(height, width, &mut StdRng::seed_from_u64(seed))
}

/// Fresh scratch directory under the system temp dir.
pub fn scratch_dir(tag: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("ferrite-conv-{tag}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}
