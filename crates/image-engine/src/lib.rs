//! Image generation for contact wallpapers.
//!
//! Renders text into a QR code and composites it onto a fixed-size
//! portrait canvas.

pub mod compose;
pub mod qr;

// Re-exports for convenience
pub use compose::{CANVAS_HEIGHT, CANVAS_WIDTH, CODE_SIZE, WallpaperLayout, centered_offset, paste};
pub use qr::{CodeEncoder, EncodingError, ErrorCorrection, QrEncoder};
