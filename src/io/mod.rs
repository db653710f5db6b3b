//! I/O helpers.

mod stat;

pub use stat::{hexdigest_bytes, ContentHasher};
