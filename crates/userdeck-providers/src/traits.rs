use async_trait::async_trait;
use userdeck_types::UserRecord;

use crate::Result;

/// Batch size the directory asks for at startup
pub const DEFAULT_RESULTS: u32 = 12;

/// Nationalities the directory asks for at startup
pub const DEFAULT_NATIONALITIES: [&str; 2] = ["us", "gb"];

/// Parameters of the single startup fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub count: u32,
    pub nationalities: Vec<String>,
}

impl FetchRequest {
    pub fn new(count: u32, nationalities: Vec<String>) -> Self {
        Self {
            count,
            nationalities,
        }
    }
}

impl Default for FetchRequest {
    fn default() -> Self {
        Self {
            count: DEFAULT_RESULTS,
            nationalities: DEFAULT_NATIONALITIES
                .iter()
                .map(|nat| nat.to_string())
                .collect(),
        }
    }
}

/// Where the directory gets its users from.
///
/// Implementations perform exactly one request per call and never retry;
/// callers treat any error as "the grid stays empty".
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Short label for logs (e.g. "randomuser.me", "file")
    fn describe(&self) -> String;

    async fn fetch_users(&self, request: &FetchRequest) -> Result<Vec<UserRecord>>;
}
