//! Contact → vCard → QR code → wallpaper → file.

use std::sync::Arc;

use contact_card::ContactRecord;
use image_engine::{CODE_SIZE, CodeEncoder, EncodingError, ErrorCorrection, WallpaperLayout};

use super::artifact::{ArtifactError, ArtifactWriter};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

/// Runs the full generation pipeline for one submission.
///
/// Holds no per-request state; a single instance is shared by all requests.
#[derive(Clone)]
pub struct WallpaperService {
    encoder: Arc<dyn CodeEncoder>,
    layout: WallpaperLayout,
    writer: ArtifactWriter,
}

impl WallpaperService {
    pub fn new(encoder: Arc<dyn CodeEncoder>, writer: ArtifactWriter) -> Self {
        Self {
            encoder,
            layout: WallpaperLayout::default(),
            writer,
        }
    }

    pub fn writer(&self) -> &ArtifactWriter {
        &self.writer
    }

    /// Generate and store the wallpaper for `record`, returning its public URL.
    ///
    /// Blocks on CPU work and file I/O.
    pub fn generate(&self, record: &ContactRecord) -> Result<String, PipelineError> {
        let vcard = record.to_vcard();
        tracing::debug!(vcard = %vcard, "Generated vCard content");

        let code = self
            .encoder
            .encode(&vcard, ErrorCorrection::Medium, CODE_SIZE)?;
        let canvas = self.layout.compose(&code);
        let url = self.writer.write(record, &canvas)?;
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, Luma};
    use image_engine::{CANVAS_HEIGHT, CANVAS_WIDTH, QrEncoder};
    use std::sync::Mutex;

    /// Deterministic checkerboard that records what it was asked to encode.
    #[derive(Default)]
    struct PatternEncoder {
        seen: Mutex<Vec<(String, ErrorCorrection, u32)>>,
    }

    impl CodeEncoder for PatternEncoder {
        fn encode(
            &self,
            text: &str,
            level: ErrorCorrection,
            size: u32,
        ) -> Result<DynamicImage, EncodingError> {
            self.seen
                .lock()
                .unwrap()
                .push((text.to_string(), level, size));
            let img = GrayImage::from_fn(size, size, |x, y| {
                if (x / 10 + y / 10) % 2 == 0 {
                    Luma([0])
                } else {
                    Luma([255])
                }
            });
            Ok(DynamicImage::ImageLuma8(img))
        }
    }

    struct FailingEncoder;

    impl CodeEncoder for FailingEncoder {
        fn encode(
            &self,
            _: &str,
            level: ErrorCorrection,
            _: u32,
        ) -> Result<DynamicImage, EncodingError> {
            Err(EncodingError::Capacity {
                level,
                reason: "too long".into(),
            })
        }
    }

    fn ada() -> ContactRecord {
        ContactRecord {
            first_name: "Ada".into(),
            sur_name: "Lovelace".into(),
            company: "Analytical Engines".into(),
            title: "Engineer".into(),
            email: "ada@example.com".into(),
            phone: "+1-555-0100".into(),
        }
    }

    #[test]
    fn generate_passes_vcard_at_medium_and_code_size() {
        let tmp = tempfile::tempdir().unwrap();
        let encoder = Arc::new(PatternEncoder::default());
        let svc = WallpaperService::new(encoder.clone(), ArtifactWriter::new(tmp.path()));

        let url = svc.generate(&ada()).unwrap();

        assert_eq!(url, "/static/Ada_Lovelace_qrcode.png");
        let seen = encoder.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, ada().to_vcard());
        assert_eq!(seen[0].1, ErrorCorrection::Medium);
        assert_eq!(seen[0].2, CODE_SIZE);
    }

    #[test]
    fn generated_file_is_full_wallpaper() {
        let tmp = tempfile::tempdir().unwrap();
        let svc = WallpaperService::new(
            Arc::new(PatternEncoder::default()),
            ArtifactWriter::new(tmp.path()),
        );
        svc.generate(&ada()).unwrap();

        let saved = image::open(tmp.path().join("Ada_Lovelace_qrcode.png"))
            .unwrap()
            .to_rgba8();
        assert_eq!(saved.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
        // Checkerboard origin is dark and lands at the centered offset.
        assert_eq!(saved.get_pixel(185, 866).0, [0, 0, 0, 255]);
        assert_eq!(saved.get_pixel(184, 866).0, [255, 255, 255, 255]);
    }

    #[test]
    fn generate_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let svc = WallpaperService::new(
            Arc::new(QrEncoder::default()),
            ArtifactWriter::new(tmp.path()),
        );
        let path = tmp.path().join("Ada_Lovelace_qrcode.png");

        svc.generate(&ada()).unwrap();
        let first = std::fs::read(&path).unwrap();
        svc.generate(&ada()).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn saved_wallpaper_decodes_to_vcard() {
        let tmp = tempfile::tempdir().unwrap();
        let svc = WallpaperService::new(
            Arc::new(QrEncoder::default()),
            ArtifactWriter::new(tmp.path()),
        );
        svc.generate(&ada()).unwrap();

        let saved = image::open(tmp.path().join("Ada_Lovelace_qrcode.png"))
            .unwrap()
            .to_luma8();
        assert_eq!(saved.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));

        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            saved.width() as usize,
            saved.height() as usize,
            |x, y| saved.get_pixel(x as u32, y as u32)[0],
        );
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1);

        let (_, content) = grids[0].decode().unwrap();
        assert_eq!(content, ada().to_vcard());
    }

    #[test]
    fn encoding_failure_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("static");
        let svc = WallpaperService::new(Arc::new(FailingEncoder), ArtifactWriter::new(&out));

        let err = svc.generate(&ada()).unwrap_err();

        assert!(matches!(err, PipelineError::Encoding(_)));
        assert!(!out.exists());
    }
}
