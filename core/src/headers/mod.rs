//! headers/mod.rs
//! Header records of the selection file.
//!
//! - `FileHeader` opens the file and holds the selection count.
//! - `SelectionHeader` opens each selection block and flags all-empty selections.
//! - The decoder reads both as opaque skip-records and only logs what they say.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
