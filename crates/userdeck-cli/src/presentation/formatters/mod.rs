pub mod date;
pub mod html;
pub mod text;

pub use date::format_birthday;
pub use html::escape_html;
pub use text::{pad_to_width, truncate};
