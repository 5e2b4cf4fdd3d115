use serde::{Deserialize, Serialize};

use crate::UserRecord;

/// Envelope of a randomuser.me response: `{ "results": [...], "info": {...} }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub results: Vec<UserRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<ResponseInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseInfo {
    #[serde(default)]
    pub seed: Option<String>,
    #[serde(default)]
    pub results: Option<u32>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub version: Option<String>,
}
