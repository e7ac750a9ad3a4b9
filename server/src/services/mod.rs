//! Wallpaper generation and storage.

pub mod artifact;
pub mod wallpaper;
