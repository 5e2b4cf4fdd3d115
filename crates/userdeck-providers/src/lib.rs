//! User sources for userdeck.
//!
//! A source produces the one batch of [`UserRecord`]s the directory works on.
//! The live source talks to randomuser.me; the file source replays a saved
//! response body so the directory can be browsed offline and tested.

mod decode;
pub mod error;
pub mod file;
pub mod randomuser;
pub mod traits;

pub use error::{FetchError, Result};
pub use file::ResponseFile;
pub use randomuser::{RandomUserApi, DEFAULT_BASE_URL};
pub use traits::{FetchRequest, UserSource};

pub use userdeck_types::UserRecord;
