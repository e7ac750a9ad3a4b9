//! Request failures and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use image_engine::EncodingError;

use crate::services::artifact::ArtifactError;
use crate::services::wallpaper::PipelineError;
use crate::template::TemplateError;

/// Anything that ends a request with a 500.
///
/// The client only sees a short plain-text description; the cause is logged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("template load failed: {0}")]
    TemplateLoad(#[source] TemplateError),
    #[error("QR encoding failed: {0}")]
    Encoding(#[from] EncodingError),
    #[error("{0}")]
    DirectoryCreate(#[source] ArtifactError),
    #[error("{0}")]
    FileWrite(#[source] ArtifactError),
    #[error("{0}")]
    ImageEncode(#[source] ArtifactError),
    #[error("template render failed: {0}")]
    Render(#[source] TemplateError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Text returned to the client.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::TemplateLoad(_) => "Could not load form",
            Self::Encoding(_) => "Could not generate QR code",
            Self::DirectoryCreate(_) => "Could not create static directory",
            Self::FileWrite(_) => "Could not save wallpaper",
            Self::ImageEncode(_) => "Could not encode wallpaper as PNG",
            Self::Render(_) => "Could not render template",
            Self::Internal(_) => "Internal server error",
        }
    }
}

impl From<ArtifactError> for AppError {
    fn from(e: ArtifactError) -> Self {
        match e {
            ArtifactError::DirectoryCreate { .. } => Self::DirectoryCreate(e),
            ArtifactError::ImageEncode { .. } => Self::ImageEncode(e),
            ArtifactError::FileWrite { .. } | ArtifactError::InvalidName(_) => Self::FileWrite(e),
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::Encoding(e) => e.into(),
            PipelineError::Artifact(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.public_message()).into_response()
    }
}
