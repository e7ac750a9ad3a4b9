#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header};
use http_body_util::BodyExt;
use image_engine::{CodeEncoder, QrEncoder};
use tempfile::TempDir;
use tower::ServiceExt;

use vcard_wallpaper_lib::app::SharedState;
use vcard_wallpaper_lib::config::AppConfig;
use vcard_wallpaper_lib::server::router::create_router;

pub const ADA_FORM: &str = "firstName=Ada&surName=Lovelace&company=Analytical+Engines\
                            &title=Engineer&email=ada%40example.com&phone=%2B1-555-0100";

/// Router wired to a throwaway output directory and template.
pub struct TestApp {
    pub router: Router,
    pub dir: TempDir,
}

impl TestApp {
    pub fn static_dir(&self) -> PathBuf {
        self.dir.path().join("static")
    }

    pub fn template_path(&self) -> PathBuf {
        self.dir.path().join("form.html")
    }
}

fn bundled_template() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates/form.html")
}

/// Build a `TestApp` using the real QR encoder.
pub fn test_app() -> TestApp {
    test_app_with(Arc::new(QrEncoder::default()))
}

pub fn test_app_with(encoder: Arc<dyn CodeEncoder>) -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::copy(bundled_template(), dir.path().join("form.html")).expect("copy template");

    let config = AppConfig {
        host: "127.0.0.1".into(),
        server_port: 0,
        static_dir: dir.path().join("static"),
        template_path: dir.path().join("form.html"),
    };
    let router = create_router(SharedState::with_encoder(config, encoder));

    TestApp { router, dir }
}

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn post_form(app: &TestApp, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_string(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub fn content_type(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default()
}
