use std::path::{Path, PathBuf};

use async_trait::async_trait;
use userdeck_types::UserRecord;

use crate::decode::decode_users;
use crate::traits::{FetchRequest, UserSource};
use crate::Result;

/// Replays a saved randomuser.me response body from disk.
///
/// The file is read in full on every fetch. `count` truncates the batch the
/// same way the live API would return at most `results` users; the
/// nationality filter is not applied since the saved body already reflects
/// whatever was requested when it was captured.
pub struct ResponseFile {
    path: PathBuf,
}

impl ResponseFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UserSource for ResponseFile {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn fetch_users(&self, request: &FetchRequest) -> Result<Vec<UserRecord>> {
        let body = tokio::fs::read(&self.path).await?;
        let mut users = decode_users(&body)?;
        users.truncate(request.count as usize);
        Ok(users)
    }
}
