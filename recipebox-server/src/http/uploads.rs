//! Uploaded image storage
//!
//! Files land in the uploads directory as `<unix-seconds>_<name>` and are
//! served back from `/uploads`. Two uploads of the same name within one
//! second overwrite each other.

use std::io;
use std::path::Path;

use chrono::Utc;

/// URL prefix the uploads directory is mounted at
pub const UPLOADS_ROUTE: &str = "/uploads";

const FALLBACK_NAME: &str = "image";

/// Write `bytes` under `dir`, returning the public URL of the stored file.
pub async fn store_image(dir: &Path, file_name: &str, bytes: &[u8]) -> io::Result<String> {
    let stored_name = format!("{}_{}", Utc::now().timestamp(), sanitize_file_name(file_name));

    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(dir.join(&stored_name), bytes).await?;

    tracing::info!(file = %stored_name, size = bytes.len(), "Stored uploaded image");
    Ok(format!("{UPLOADS_ROUTE}/{stored_name}"))
}

/// Reduce a client file name to a single safe path component.
///
/// Directory parts (either separator) are dropped and anything outside
/// `[A-Za-z0-9._-]` becomes `_`.
pub fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        cleaned
    }
}
