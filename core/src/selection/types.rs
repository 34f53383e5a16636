use std::fmt;

use num_enum::TryFromPrimitive;

use crate::constants::{DEFAULT_NAME_PREFIX, NAME_LENGTH, NAME_PAD, NUM_PTYPES};
use crate::types::{Result, SelectError};
use crate::utils::{check_index, fmt_bytes, trim_padding};

/// Gadget particle categories, in on-disk order.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum ParticleType {
    Gas      = 0,
    Halo     = 1,
    Disk     = 2,
    Bulge    = 3,
    Stars    = 4,
    Boundary = 5,
}

impl ParticleType {
    pub const ALL: [ParticleType; NUM_PTYPES] = [
        ParticleType::Gas,
        ParticleType::Halo,
        ParticleType::Disk,
        ParticleType::Bulge,
        ParticleType::Stars,
        ParticleType::Boundary,
    ];

    pub fn from_index(index: usize) -> Result<Self> {
        let index = check_index("particle type", index, NUM_PTYPES)?;
        u8::try_from(index)
            .ok()
            .and_then(|raw| ParticleType::try_from_primitive(raw).ok())
            .ok_or(SelectError::IndexOutOfRange {
                what: "particle type",
                index,
                max: NUM_PTYPES,
            })
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Fixed-width, space-padded selection name.
///
/// Always exactly `NAME_LENGTH` bytes. Names set through `from_ascii` are
/// ASCII; names read from a file are kept byte for byte.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SelectionName([u8; NAME_LENGTH]);

impl SelectionName {
    /// Truncate to `NAME_LENGTH` characters and pad with spaces.
    pub fn from_ascii(name: &str) -> Result<Self> {
        if let Some(pos) = name.find(|c: char| !c.is_ascii()) {
            return Err(SelectError::InvalidName {
                reason: format!("non-ASCII character at byte {pos}"),
            });
        }
        Ok(Self::padded(name.as_bytes()))
    }

    /// Default name of the selection at `index`: "Selection 01" ..
    pub fn default_for(index: usize) -> Self {
        Self::padded(format!("{} {:02}", DEFAULT_NAME_PREFIX, index + 1).as_bytes())
    }

    fn padded(bytes: &[u8]) -> Self {
        let mut buf = [NAME_PAD; NAME_LENGTH];
        let bytes = &bytes[..bytes.len().min(NAME_LENGTH)];
        buf[..bytes.len()].copy_from_slice(bytes);
        Self(buf)
    }

    pub const fn from_raw(raw: [u8; NAME_LENGTH]) -> Self {
        Self(raw)
    }

    pub fn as_bytes(&self) -> &[u8; NAME_LENGTH] {
        &self.0
    }

    /// Full padded name. Non-UTF-8 bytes from foreign files are replaced.
    pub fn to_padded_string(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }

    /// Name without trailing padding, for display.
    pub fn trimmed(&self) -> String {
        String::from_utf8_lossy(trim_padding(&self.0)).into_owned()
    }
}

impl fmt::Debug for SelectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SelectionName({})", fmt_bytes(trim_padding(&self.0)))
    }
}

impl fmt::Display for SelectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.trimmed())
    }
}

/// One named selection: a list of particle IDs per particle type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    name: SelectionName,
    ids: [Vec<i32>; NUM_PTYPES],
}

impl Selection {
    /// New selection with all categories empty.
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self::with_name(SelectionName::from_ascii(name)?))
    }

    pub fn with_name(name: SelectionName) -> Self {
        Self { name, ids: Default::default() }
    }

    pub fn name(&self) -> &SelectionName {
        &self.name
    }

    /// Replace the name. On error the previous name is kept.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = SelectionName::from_ascii(name)?;
        Ok(())
    }

    pub fn get_ids(&self, ptype: usize) -> Result<&[i32]> {
        let ptype = check_index("particle type", ptype, NUM_PTYPES)?;
        Ok(&self.ids[ptype])
    }

    pub fn set_ids(&mut self, ptype: usize, ids: impl Into<Vec<i32>>) -> Result<()> {
        let ptype = check_index("particle type", ptype, NUM_PTYPES)?;
        self.ids[ptype] = ids.into();
        Ok(())
    }

    /// Infallible accessor keyed by the typed category.
    pub fn ids(&self, ptype: ParticleType) -> &[i32] {
        &self.ids[ptype.index()]
    }

    pub fn all_ids(&self) -> &[Vec<i32>; NUM_PTYPES] {
        &self.ids
    }

    /// True when every category is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.iter().all(Vec::is_empty)
    }

    /// Total number of IDs over all categories.
    pub fn len(&self) -> usize {
        self.ids.iter().map(Vec::len).sum()
    }

    pub fn clear(&mut self) {
        self.ids.iter_mut().for_each(Vec::clear);
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GVSelection: {}", self.name)
    }
}
