//! PNG preview of the outline mask and placed footprints, cropped to content

use crate::algorithm::selection::Selection;
use crate::io::error::{CollageError, Result, WithPath};
use crate::spatial::footprint::Footprint;
use crate::spatial::mask::OccupancyMask;
use image::{Rgba, RgbaImage, imageops};
use std::path::Path;

/// Canvas background
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Pixels inside the outline
pub const MASK_COLOR: Rgba<u8> = Rgba([250, 214, 222, 255]);
/// Outline of footprints that respect the overlap bound
pub const CONSTRAINED_COLOR: Rgba<u8> = Rgba([200, 30, 60, 255]);
/// Outline of footprints added without an overlap check
pub const FALLBACK_COLOR: Rgba<u8> = Rgba([40, 80, 200, 255]);

/// Inclusive pixel bounds of drawn content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    /// Leftmost column
    pub min_x: u32,
    /// Topmost row
    pub min_y: u32,
    /// Rightmost column
    pub max_x: u32,
    /// Bottom row
    pub max_y: u32,
}

/// Draw the mask and every footprint outline onto a canvas-sized image
///
/// Footprints are clipped to the canvas.
pub fn render_preview(mask: &OccupancyMask, selection: &Selection, footprint_size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(mask.width() as u32, mask.height() as u32, BACKGROUND);

    for ((row, col), &inside) in mask.cells().indexed_iter() {
        if inside {
            img.put_pixel(col as u32, row as u32, MASK_COLOR);
        }
    }

    for (index, point) in selection.points.iter().enumerate() {
        let color = if index < selection.constrained {
            CONSTRAINED_COLOR
        } else {
            FALLBACK_COLOR
        };
        draw_outline(&mut img, &Footprint::centered(*point, footprint_size), color);
    }

    img
}

fn draw_outline(img: &mut RgbaImage, footprint: &Footprint, color: Rgba<u8>) {
    let (width, height) = (i64::from(img.width()), i64::from(img.height()));
    let (right, bottom) = (footprint.right - 1, footprint.bottom - 1);

    let mut plot = |x: i64, y: i64| {
        if (0..width).contains(&x) && (0..height).contains(&y) {
            img.put_pixel(x as u32, y as u32, color);
        }
    };

    for x in footprint.left..=right {
        plot(x, footprint.top);
        plot(x, bottom);
    }
    for y in footprint.top..=bottom {
        plot(footprint.left, y);
        plot(right, y);
    }
}

/// Find the smallest rectangle containing every non-background pixel
pub fn content_bounds(img: &RgbaImage, background: Rgba<u8>) -> Option<ContentBounds> {
    let mut bounds: Option<ContentBounds> = None;

    for (x, y, pixel) in img.enumerate_pixels() {
        if *pixel == background {
            continue;
        }
        bounds = Some(match bounds {
            None => ContentBounds {
                min_x: x,
                min_y: y,
                max_x: x,
                max_y: y,
            },
            Some(b) => ContentBounds {
                min_x: b.min_x.min(x),
                min_y: b.min_y.min(y),
                max_x: b.max_x.max(x),
                max_y: b.max_y.max(y),
            },
        });
    }

    bounds
}

/// Crop to the drawn content plus `margin`, clamped to the image
///
/// An image with no content is returned unchanged.
pub fn crop_to_content(img: &RgbaImage, background: Rgba<u8>, margin: u32) -> RgbaImage {
    let Some(bounds) = content_bounds(img, background) else {
        return img.clone();
    };

    let left = bounds.min_x.saturating_sub(margin);
    let top = bounds.min_y.saturating_sub(margin);
    let right = bounds.max_x.saturating_add(margin + 1).min(img.width());
    let bottom = bounds.max_y.saturating_add(margin + 1).min(img.height());

    imageops::crop_imm(img, left, top, right - left, bottom - top).to_image()
}

/// Render, crop and save the layout preview as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_preview(
    mask: &OccupancyMask,
    selection: &Selection,
    footprint_size: u32,
    margin: u32,
    output_path: &Path,
) -> Result<()> {
    let img = crop_to_content(
        &render_preview(mask, selection, footprint_size),
        BACKGROUND,
        margin,
    );

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(output_path)
        .map_err(|source| CollageError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}
