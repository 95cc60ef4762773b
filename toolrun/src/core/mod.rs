//! Pure, deterministic logic. No I/O.

pub mod progress;
pub mod table;
pub mod types;
