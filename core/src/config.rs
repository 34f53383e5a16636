use crate::framing::Endian;

/// Settings shared by reading and writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Byte order of every integer in the file.
    /// - `Little` (default) matches files written on x86 and ARM hosts.
    /// - `Big` reads files produced on big-endian machines.
    pub endian: Endian,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { endian: Endian::Little }
    }
}

impl CodecConfig {
    pub fn new(endian: Option<Endian>) -> Self {
        Self { endian: endian.unwrap_or_default() }
    }

    pub fn little_endian() -> Self {
        Self { endian: Endian::Little }
    }

    pub fn big_endian() -> Self {
        Self { endian: Endian::Big }
    }

    /// Byte order of the running host.
    pub fn native() -> Self {
        Self { endian: Endian::native() }
    }
}
