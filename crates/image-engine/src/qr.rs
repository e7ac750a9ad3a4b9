//! QR code rendering behind a narrow encoder interface.

use image::{DynamicImage, Rgba, RgbaImage};
use qrcode::{EcLevel, QrCode};
use tracing::debug;

/// Modules of blank margin drawn around the symbol on every side.
pub const QUIET_ZONE: u32 = 4;

/// How much of the symbol may be damaged and still decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    Low,
    #[default]
    Medium,
    Quartile,
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("data does not fit in a QR code at {level:?} error correction: {reason}")]
    Capacity {
        level: ErrorCorrection,
        reason: String,
    },
}

/// Turns text into a square, two-colour scannable image.
pub trait CodeEncoder: Send + Sync {
    /// Encode `text` into an image of `size` x `size` pixels.
    ///
    /// Implementations may return a larger square when the symbol cannot be
    /// drawn at `size` with at least one pixel per module.
    fn encode(
        &self,
        text: &str,
        level: ErrorCorrection,
        size: u32,
    ) -> Result<DynamicImage, EncodingError>;
}

/// Encoder backed by the `qrcode` crate.
#[derive(Debug, Clone, Copy)]
pub struct QrEncoder {
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self {
            foreground: Rgba([0, 0, 0, 255]),
            background: Rgba([255, 255, 255, 255]),
        }
    }
}

impl CodeEncoder for QrEncoder {
    fn encode(
        &self,
        text: &str,
        level: ErrorCorrection,
        size: u32,
    ) -> Result<DynamicImage, EncodingError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), level.into()).map_err(
            |e| EncodingError::Capacity {
                level,
                reason: e.to_string(),
            },
        )?;
        let modules = code.to_colors();
        let module_count = code.width() as u32;

        let real_size = module_count + 2 * QUIET_ZONE;
        let img_size = size.max(real_size);
        let scale = img_size / real_size;
        let margin = (img_size - real_size * scale) / 2 + QUIET_ZONE * scale;

        debug!(module_count, scale, img_size, margin, "Rendering QR symbol");

        let mut img = RgbaImage::from_pixel(img_size, img_size, self.background);

        for (i, color) in modules.iter().enumerate() {
            let x = (i as u32) % module_count;
            let y = (i as u32) / module_count;

            if *color == qrcode::Color::Dark {
                for dx in 0..scale {
                    for dy in 0..scale {
                        img.put_pixel(
                            margin + x * scale + dx,
                            margin + y * scale + dy,
                            self.foreground,
                        );
                    }
                }
            }
        }

        Ok(DynamicImage::ImageRgba8(img))
    }
}
