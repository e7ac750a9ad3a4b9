use std::path::Path;
use std::sync::Arc;

use image_engine::{CodeEncoder, QrEncoder};

use crate::config::AppConfig;
use crate::services::artifact::ArtifactWriter;
use crate::services::wallpaper::WallpaperService;

/// Application shared state accessible from axum handlers.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    config: AppConfig,
    wallpaper: WallpaperService,
}

impl SharedState {
    /// Create shared state with the production QR encoder.
    pub fn new(config: AppConfig) -> Self {
        Self::with_encoder(config, Arc::new(QrEncoder::default()))
    }

    /// Create shared state with a custom encoder (used by tests).
    pub fn with_encoder(config: AppConfig, encoder: Arc<dyn CodeEncoder>) -> Self {
        let writer = ArtifactWriter::new(config.static_dir.clone());
        let wallpaper = WallpaperService::new(encoder, writer);

        Self {
            inner: Arc::new(SharedStateInner { config, wallpaper }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn template_path(&self) -> &Path {
        &self.inner.config.template_path
    }

    pub fn static_dir(&self) -> &Path {
        self.inner.wallpaper.writer().output_dir()
    }

    pub fn wallpaper(&self) -> &WallpaperService {
        &self.inner.wallpaper
    }
}
