//! Runtime application configuration loaded from the environment.

use std::path::PathBuf;

use super::validation::validate_setting;

/// Runtime configuration for the wallpaper server.
///
/// Canvas and code dimensions are fixed in `image_engine` and are not part
/// of the configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub server_port: u16,
    /// Directory generated wallpapers are written to and served from.
    pub static_dir: PathBuf,
    /// Form template, read on every request.
    pub template_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            server_port: 8080,
            static_dir: PathBuf::from("static"),
            template_path: PathBuf::from("templates/form.html"),
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn load() -> Self {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Missing, empty or invalid values fall back to the default.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let g = |key: &str| -> Option<String> {
            let value = lookup(key)?;
            if value.is_empty() {
                return None;
            }
            match validate_setting(key, &value) {
                Ok(()) => Some(value),
                Err(e) => {
                    tracing::warn!(key, value = %value, "Ignoring invalid setting: {e}");
                    None
                }
            }
        };

        Self {
            host: g("HOST").unwrap_or(defaults.host),
            server_port: g("SERVER_PORT")
                .map(|v| parse_u16(&v, defaults.server_port))
                .unwrap_or(defaults.server_port),
            static_dir: g("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            template_path: g("TEMPLATE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.template_path),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.server_port)
    }

    /// Non-fatal problems worth logging at startup.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !self.template_path.is_file() {
            warnings.push(format!(
                "template not found at {}; every page request will fail until it exists",
                self.template_path.display()
            ));
        }
        if self.static_dir.exists() && !self.static_dir.is_dir() {
            warnings.push(format!(
                "{} exists but is not a directory",
                self.static_dir.display()
            ));
        }
        warnings
    }
}

fn parse_u16(s: &str, default: u16) -> u16 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}
