//! Utility helpers for callers feeding the core

use std::path::Path;

use crate::error::{ChefError, ChefResult};
use crate::types::{CapturedImage, SUPPORTED_MEDIA_TYPE};

/// Load a still image from disk for the recognition call
///
/// Stands in for the camera capture collaborator when the caller is not a
/// browser. Only the JPEG encoding the recognition client accepts is
/// supported; other extensions are rejected before any bytes are read.
pub fn load_captured_image(path: &Path) -> ChefResult<CapturedImage> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => {}
        other => {
            return Err(ChefError::InvalidInput {
                message: format!(
                    "unsupported image extension \"{}\" (expected .jpg or .jpeg for {})",
                    other.unwrap_or("none"),
                    SUPPORTED_MEDIA_TYPE
                ),
            });
        }
    }

    let data = std::fs::read(path)?;
    if data.is_empty() {
        return Err(ChefError::InvalidInput {
            message: format!("image file {} is empty", path.display()),
        });
    }

    Ok(CapturedImage::jpeg(data))
}
