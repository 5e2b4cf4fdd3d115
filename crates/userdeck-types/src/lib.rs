pub mod domain;
pub mod response;

pub use domain::*;
pub use response::{ApiResponse, ResponseInfo};
