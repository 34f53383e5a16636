//! gvselect-core
//!
//! Reader and writer for gadgetviewer selection files.
//! Pure Rust, no Python, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;
pub mod utils;

// Codec layers
pub mod framing;
pub mod headers;
pub mod selection;

pub mod io;

pub use config::CodecConfig;
pub use framing::{Endian, FramingError};
pub use selection::{ParticleType, Selection, SelectionFile, SelectionName};
pub use types::{Result, SelectError};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::CodecConfig;
    pub use crate::constants::{NAME_LENGTH, NUM_PTYPES, NUM_SELECTIONS};
    pub use crate::framing::Endian;
    pub use crate::selection::{ParticleType, Selection, SelectionFile, SelectionName};
    pub use crate::types::{Result, SelectError};
}
