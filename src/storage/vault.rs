use crate::core::error::{Error, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File persistence the note workflow writes through.
///
/// Paths are relative to the vault root. `create` must refuse to overwrite an
/// existing file.
pub trait Vault {
    /// Check whether a file already exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Create a new file at `path` with the given content
    fn create(&self, path: &Path, content: &str) -> Result<()>;
}

/// Filesystem-backed vault rooted at a directory
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory all vault paths are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Vault for FsVault {
    fn exists(&self, path: &Path) -> bool {
        self.root.join(path).exists()
    }

    fn create(&self, path: &Path, content: &str) -> Result<()> {
        let full_path = self.root.join(path);

        // A missing notes folder is a settings problem the user fixes; the
        // vault does not create it.
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full_path)
            .map_err(|e| Error::FileWrite(format!("Cannot create {}: {}", full_path.display(), e)))?;

        file.write_all(content.as_bytes())
            .map_err(|e| Error::FileWrite(format!("Cannot write {}: {}", full_path.display(), e)))?;

        Ok(())
    }
}
