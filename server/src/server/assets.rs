//! Serving generated wallpapers from the output directory.

use std::path::{Component, Path as FsPath};

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::app::SharedState;

/// `GET /static/`: directory listings are never served.
pub async fn static_index() -> Response {
    forbidden()
}

/// `GET /static/{*path}`
pub async fn static_file(State(state): State<SharedState>, Path(path): Path<String>) -> Response {
    let Some(relative) = safe_relative_path(&path) else {
        tracing::warn!(path = %path, "Rejected static path");
        return forbidden();
    };
    let full = state.static_dir().join(relative);

    match tokio::fs::metadata(&full).await {
        Ok(meta) if meta.is_dir() => return forbidden(),
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return not_found(),
        Err(e) => {
            tracing::error!(path = %full.display(), "Failed to stat static file: {e}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    }

    match tokio::fs::read(&full).await {
        Ok(data) => {
            let mime = mime_guess::from_path(&full).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.as_ref())],
                data,
            )
                .into_response()
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => not_found(),
        Err(e) => {
            tracing::error!(path = %full.display(), "Failed to read static file: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Accept only paths made of plain components, so requests cannot leave the
/// output directory.
fn safe_relative_path(path: &str) -> Option<&FsPath> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    let relative = FsPath::new(trimmed);
    relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
        .then_some(relative)
}

fn forbidden() -> Response {
    (StatusCode::FORBIDDEN, "Forbidden").into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 page not found").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_accepted() {
        assert_eq!(
            safe_relative_path("Ada_Lovelace_qrcode.png"),
            Some(FsPath::new("Ada_Lovelace_qrcode.png"))
        );
        assert_eq!(safe_relative_path("/a.png"), Some(FsPath::new("a.png")));
    }

    #[test]
    fn empty_and_traversal_paths_are_rejected() {
        for path in ["", "/", "//", "../secret", "a/../../b", "./a.png"] {
            assert_eq!(safe_relative_path(path), None, "{path:?}");
        }
    }
}
