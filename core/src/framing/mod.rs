//! Record framing for sequential unformatted binary files.
//!
//! Responsibilities:
//! - Read `[len][payload][len]` records with strict length checks
//! - Write the same layout symmetrically
//! - Carry the file's byte order
//!
//! Non-responsibilities:
//! - Meaning of any payload
//! - Opening or closing files

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{Endian, FramingError};
pub use encode::RecordWriter;
pub use decode::RecordReader;
