pub mod logger;
pub mod poll;
pub mod text;

pub use poll::wait_until;
pub use text::{decode_entities, strip_tags, truncate_text};
