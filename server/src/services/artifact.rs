//! Naming and persisting generated wallpapers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use contact_card::ContactRecord;
use image::{ImageFormat, RgbaImage};

/// URL prefix the output directory is served under.
pub const PUBLIC_PREFIX: &str = "/static";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Could not create output directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not encode {path} as PNG: {source}")]
    ImageEncode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Derived file name is not a plain file name: {0:?}")]
    InvalidName(String),
}

/// Writes wallpapers into a flat output directory.
///
/// Files are keyed by first and last name only, so a later submission with
/// the same names replaces the earlier file.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `{first}_{sur}_qrcode.png`
    pub fn file_name(record: &ContactRecord) -> String {
        format!("{}_{}_qrcode.png", record.first_name, record.sur_name)
    }

    /// URL the browser uses to fetch a stored file, with the name
    /// percent-encoded as a single path segment.
    pub fn public_url(file_name: &str) -> String {
        format!("{PUBLIC_PREFIX}/{}", urlencoding::encode(file_name))
    }

    /// Create the output directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<(), ArtifactError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| {
            ArtifactError::DirectoryCreate {
                path: self.output_dir.clone(),
                source,
            }
        })
    }

    /// Store `canvas` as PNG for `record` and return its public URL.
    ///
    /// A failure part way through the encode can leave a truncated file.
    pub fn write(
        &self,
        record: &ContactRecord,
        canvas: &RgbaImage,
    ) -> Result<String, ArtifactError> {
        let file_name = Self::file_name(record);
        if !is_plain_file_name(&file_name) {
            return Err(ArtifactError::InvalidName(file_name));
        }

        self.ensure_dir()?;

        let path = self.output_dir.join(&file_name);
        let file = File::create(&path).map_err(|source| ArtifactError::FileWrite {
            path: path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        canvas
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|source| ArtifactError::ImageEncode {
                path: path.clone(),
                source,
            })?;
        writer.flush().map_err(|source| ArtifactError::FileWrite {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), "Wallpaper saved");
        Ok(Self::public_url(&file_name))
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.contains(['/', '\\', '\0']) && name != "." && name != ".."
}
