//! I/O helpers for frames, masks and JSON reports.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned RGB frame.
//! - `save_rgb_image` / `save_gray_image`: write frames and masks to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::error::{LaneError, Result};
use image::{GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|source| LaneError::ImageRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.into_rgb8())
}

/// Save an RGB frame; the format follows the file extension.
pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image.save(path).map_err(|source| LaneError::ImageWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a single-channel mask.
pub fn save_gray_image(image: &GrayImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image.save(path).map_err(|source| LaneError::ImageWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| LaneError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| LaneError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| LaneError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
