//! Uploaded-file persistence.
//!
//! Palm images are buffered in the handler and written here under a
//! generated name; the returned public URL is served by `ServeDir`
//! mounted at [`PUBLIC_PREFIX`]. The generator never inspects the file,
//! so this is pure passthrough plumbing.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Maximum accepted upload size (5 MiB), matching the original deployment.
pub const MAX_UPLOAD_SIZE_BYTES: usize = 5 * 1024 * 1024;

/// URL prefix under which uploaded files are served back.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Writes uploaded files to a directory and hands out their public URLs.
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the upload directory if it does not exist yet. Called once
    /// at startup.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Persist one uploaded file and return its public URL
    /// (`/uploads/<uuid>.<ext>`).
    ///
    /// The stored name is always a fresh UUID; only a sanitized extension
    /// is carried over from the client-supplied filename.
    pub async fn save(
        &self,
        original_filename: Option<&str>,
        bytes: &[u8],
    ) -> std::io::Result<String> {
        let filename = match original_filename.and_then(sanitized_extension) {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };

        tokio::fs::write(self.dir.join(&filename), bytes).await?;

        Ok(format!("{PUBLIC_PREFIX}/{filename}"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Extract a safe, lowercase file extension from a client-supplied
/// filename. Anything non-alphanumeric or overly long is discarded.
fn sanitized_extension(filename: &str) -> Option<String> {
    let ext = Path::new(filename).extension()?.to_str()?;
    if ext.is_empty() || ext.len() > 8 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
