//! Selection model and the codec mapping it to framed records.
//!
//! Responsibilities:
//! - `Selection` / `SelectionFile` with their fixed 6 x 6 shape
//! - Decoding the record sequence of a file into a `SelectionFile`
//! - Encoding a `SelectionFile` back into the same record sequence

pub mod types;
pub mod file;
pub mod encode;
pub mod decode;

pub use types::{ParticleType, Selection, SelectionName};
pub use file::SelectionFile;
pub use encode::{encode_selection, encode_selections};
pub use decode::{decode_selection, decode_selections};
