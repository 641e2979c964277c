use std::path::Path;

use image::{GrayImage, ImageFormat};

use crate::error::{DepthError, Result};
use crate::frame::FrameDescription;

/// Save a row-major 8-bit grayscale buffer as PNG.
pub fn save_grayscale_png(pixels: &[u8], desc: &FrameDescription, path: &Path) -> Result<()> {
    let expected = desc.pixel_count();
    if pixels.len() != expected {
        return Err(DepthError::GeometryMismatch {
            got: pixels.len(),
            expected,
        });
    }

    let img = GrayImage::from_raw(desc.width, desc.height, pixels.to_vec()).ok_or(
        DepthError::InvalidDimensions {
            width: desc.width,
            height: desc.height,
        },
    )?;
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
