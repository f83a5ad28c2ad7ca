//! Page layout: fitting one image onto a fixed page
//!
//! The image is scaled uniformly so it fits the page on both axes and is
//! centered. There is no upper clamp on the scale: an image smaller than the
//! page is scaled up to fill it.

use crate::types::{ConvertError, PageSize, Result};

/// Where an image lands on a page, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub scale: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Compute the fit-and-center placement for an image on the given page.
///
/// `scale = min(page_width / image_width, page_height / image_height)`, so
/// the scaled image never exceeds the page on either axis. The placement
/// origin is the lower-left corner of the image in PDF page coordinates.
pub fn compute_placement(
    page_size: PageSize,
    image_width: u32,
    image_height: u32,
) -> Result<Placement> {
    if image_width == 0 || image_height == 0 {
        return Err(ConvertError::InvalidImageDimensions {
            width: image_width,
            height: image_height,
        });
    }

    let (page_width, page_height) = page_size.dimensions_pt();
    let scale_w = page_width / image_width as f32;
    let scale_h = page_height / image_height as f32;
    let scale = scale_w.min(scale_h);

    let width = image_width as f32 * scale;
    let height = image_height as f32 * scale;

    Ok(Placement {
        scale,
        x: (page_width - width) / 2.0,
        y: (page_height - height) / 2.0,
        width,
        height,
    })
}
