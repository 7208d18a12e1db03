use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tokio::fs;

use crate::error::StoreError;

/// One user record: an `id` plus whatever fields the client sent.
pub type UserRecord = Map<String, Value>;

/// Accessor for the users collection, stored as a single JSON array file.
///
/// Every operation goes back to disk: there is no cache, no partial update
/// and no locking. Overlapping writers race and the last full-file overwrite
/// wins, which is the documented behavior of this API, not an oversight to
/// paper over here.
#[derive(Clone, Debug)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file is present. Absence is a normal answer,
    /// not an error.
    pub async fn exists(&self) -> bool {
        fs::metadata(&self.path).await.is_ok()
    }

    /// Raw file contents.
    pub async fn load(&self) -> Result<String, StoreError> {
        Ok(fs::read_to_string(&self.path).await?)
    }

    /// Load and parse the whole collection.
    pub async fn read(&self) -> Result<Vec<UserRecord>, StoreError> {
        let text = self.load().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Serialize the collection and overwrite the file in place.
    ///
    /// Plain overwrite, no temp-file-and-rename. A crash mid-write can leave
    /// a truncated document; the original server had the same window.
    pub async fn save(&self, users: &[UserRecord]) -> Result<(), StoreError> {
        let text = serde_json::to_string(users)?;
        fs::write(&self.path, text).await?;
        Ok(())
    }

    /// Remove the backing file. Removing a file that is already absent
    /// surfaces as an ordinary I/O failure; callers report it like any
    /// other error.
    pub async fn destroy(&self) -> Result<(), StoreError> {
        fs::remove_file(&self.path).await?;
        Ok(())
    }
}
