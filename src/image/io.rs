/// Conversions between [`Image<u8>`] and the `image` crate, plus file helpers.
///
/// - `load_grayscale`: read a PNG/JPEG/BMP/GIF from disk as 8-bit luma.
/// - `decode_grayscale`: same, from an in-memory encoded buffer.
/// - `save_grayscale`: write an `Image<u8>` to disk (format from extension).
/// - `write_json_file`: pretty-print a serializable value to disk.
use std::fs;
use std::path::Path;

use image::{GrayImage, Luma};
use serde::Serialize;

use super::Image;

impl Image<u8> {
    /// Copies an `image` crate luma buffer into an owned `Image<u8>`.
    pub fn from_gray(gray: &GrayImage) -> Image<u8> {
        let (width, height) = gray.dimensions();
        Image {
            height: height as usize,
            width: width as usize,
            data: gray.as_raw().clone(),
        }
    }

    /// Copies this image into an `image` crate luma buffer.
    pub fn to_gray(&self) -> GrayImage {
        GrayImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            Luma([self.get(y as usize, x as usize)])
        })
    }
}

/// Load an image from disk and convert it to 8-bit grayscale.
pub fn load_grayscale(path: &Path) -> Result<GrayImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    Ok(img.to_luma8())
}

/// Decode an encoded image held in memory and convert it to 8-bit grayscale.
pub fn decode_grayscale(bytes: &[u8]) -> Result<GrayImage, String> {
    let img = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
    Ok(img.to_luma8())
}

/// Save an 8-bit image, creating parent directories as needed.
pub fn save_grayscale(image: &Image<u8>, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image.to_gray()
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
