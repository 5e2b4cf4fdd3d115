//! Deterministic user records.
//!
//! Every record is derived from its name so tests can build users inline
//! without caring about the other fields.

use userdeck_types::{ApiResponse, Dob, Location, Name, Picture, Postcode, Street, UserRecord};

/// Twelve users, in the order a full startup batch would arrive
pub const SAMPLE_NAMES: [(&str, &str); 12] = [
    ("Alice", "Smith"),
    ("Bob", "Jones"),
    ("Ann", "Lee"),
    ("Marcus", "Hansen"),
    ("Jacob", "Morris"),
    ("Ella", "Watson"),
    ("Noah", "Turner"),
    ("Mia", "Anderson"),
    ("Oliver", "Reed"),
    ("Sophie", "Martin"),
    ("Liam", "Parker"),
    ("Grace", "Hall"),
];

/// Build a user whose other fields are derived from the name.
pub fn user(first: &str, last: &str) -> UserRecord {
    let slug = format!("{}.{}", first.to_lowercase(), last.to_lowercase());
    let seed = first.len() * 7 + last.len() * 13;

    UserRecord {
        name: Name {
            title: None,
            first: first.to_string(),
            last: last.to_string(),
        },
        email: format!("{}@example.com", slug),
        phone: format!("(555) 010-{:04}", seed * 31 % 10_000),
        cell: None,
        picture: Picture {
            large: format!("https://randomuser.me/api/portraits/lego/{}.jpg", seed % 10),
            medium: None,
            thumbnail: None,
        },
        location: Location {
            street: Street {
                number: (seed * 17) as u32,
                name: format!("{} Street", last),
            },
            city: format!("{}ville", first),
            state: "Texas".to_string(),
            postcode: Postcode::Number(75_000 + seed as u64),
        },
        dob: Dob {
            date: format!("19{:02}-0{}-1{}T10:00:00.000Z", 60 + seed % 40, 1 + seed % 9, seed % 10),
            age: None,
        },
        nat: Some("US".to_string()),
    }
}

/// "Alice Smith", "Bob Jones", "Ann Lee"
pub fn trio() -> Vec<UserRecord> {
    SAMPLE_NAMES[..3]
        .iter()
        .map(|(first, last)| user(first, last))
        .collect()
}

pub fn sample_users() -> Vec<UserRecord> {
    SAMPLE_NAMES
        .iter()
        .map(|(first, last)| user(first, last))
        .collect()
}

/// Serialize records the way randomuser.me wraps them
pub fn response_json(users: &[UserRecord]) -> String {
    let response = ApiResponse {
        results: users.to_vec(),
        info: None,
    };
    serde_json::to_string_pretty(&response).expect("fixture records serialize")
}
