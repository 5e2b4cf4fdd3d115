mod user;

pub use user::{Dob, Location, Name, Picture, Postcode, Street, UserRecord};
