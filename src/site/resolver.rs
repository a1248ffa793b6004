use std::io;
use std::path::{Path, PathBuf};

/// A file backing an allow-listed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub location: PathBuf,
    pub content_type: String,
}

impl Resource {
    /// Size in bytes, used as the static `Content-Length`.
    pub async fn len(&self) -> io::Result<u64> {
        let meta = tokio::fs::metadata(&self.location).await?;
        if !meta.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "resource is not a regular file",
            ));
        }
        Ok(meta.len())
    }

    /// Full contents as text, for templates.
    pub async fn read_text(&self) -> io::Result<String> {
        tokio::fs::read_to_string(&self.location).await
    }
}

/// Maps request paths onto files under a public directory.
#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
}

impl Resolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves an already authorised path. Does not touch the filesystem.
    pub fn resolve(&self, path: &str) -> Resource {
        let location = self.root.join(path.trim_start_matches('/'));
        let content_type = content_type_for(&location);
        Resource {
            location,
            content_type,
        }
    }
}

/// Content type from the file extension, `application/octet-stream` when unknown.
pub fn content_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
