//! Wallpaper composition: a solid portrait canvas with an image pasted in the middle.

use image::{DynamicImage, Rgba, RgbaImage};
use tracing::debug;

/// Wallpaper width in pixels.
pub const CANVAS_WIDTH: u32 = 1170;
/// Wallpaper height in pixels.
pub const CANVAS_HEIGHT: u32 = 2532;
/// Side of the square code image placed on the wallpaper.
pub const CODE_SIZE: u32 = 800;

/// Top-left position that centers an `inner` box inside an `outer` box.
///
/// Odd remainders round toward the top-left. An axis where the inner box is
/// larger than the outer one gets offset 0.
pub fn centered_offset(outer_w: u32, outer_h: u32, inner_w: u32, inner_h: u32) -> (u32, u32) {
    (
        outer_w.saturating_sub(inner_w) / 2,
        outer_h.saturating_sub(inner_h) / 2,
    )
}

/// Paste `top` onto `base` at the given position.
///
/// Pixels are copied as-is, alpha included. Anything falling outside `base`
/// is clipped.
pub fn paste(base: &mut RgbaImage, top: &DynamicImage, x: u32, y: u32) {
    let top_rgba = top.to_rgba8();
    for (dx, dy, pixel) in top_rgba.enumerate_pixels() {
        let target_x = x + dx;
        let target_y = y + dy;
        if target_x < base.width() && target_y < base.height() {
            base.put_pixel(target_x, target_y, *pixel);
        }
    }
}

/// Fixed-size canvas the code image is centered on.
#[derive(Debug, Clone, Copy)]
pub struct WallpaperLayout {
    pub width: u32,
    pub height: u32,
    pub background: Rgba<u8>,
}

impl Default for WallpaperLayout {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            background: Rgba([255, 255, 255, 255]),
        }
    }
}

impl WallpaperLayout {
    /// Allocate a canvas filled with the background colour.
    pub fn blank(&self) -> RgbaImage {
        RgbaImage::from_pixel(self.width, self.height, self.background)
    }

    /// Build the wallpaper with `code` centered on it.
    ///
    /// The result always has the layout's dimensions.
    pub fn compose(&self, code: &DynamicImage) -> RgbaImage {
        let mut canvas = self.blank();
        let (x, y) = centered_offset(self.width, self.height, code.width(), code.height());

        debug!(
            canvas_w = self.width,
            canvas_h = self.height,
            code_w = code.width(),
            code_h = code.height(),
            x,
            y,
            "Compositing code onto wallpaper"
        );

        paste(&mut canvas, code, x, y);
        canvas
    }
}
