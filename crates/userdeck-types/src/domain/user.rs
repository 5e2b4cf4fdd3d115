use serde::{Deserialize, Serialize};
use std::fmt;

/// One user profile as returned by the randomuser.me API.
///
/// Records are taken verbatim from the response body and are never mutated
/// after decoding. Only the fields the directory displays are required; the
/// rest of the payload is either optional here or ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: Name,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell: Option<String>,
    pub picture: Picture,
    pub location: Location,
    pub dob: Dob,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nat: Option<String>,
}

impl UserRecord {
    /// "First Last", as shown on cards and in the detail header
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub postcode: Postcode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub number: u32,
    pub name: String,
}

/// Postal code. US postcodes come back as JSON numbers, GB ones as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    Number(u64),
    Text(String),
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postcode::Number(n) => write!(f, "{}", n),
            Postcode::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dob {
    /// ISO-8601 timestamp, e.g. `1993-07-20T09:44:18.674Z`
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}
