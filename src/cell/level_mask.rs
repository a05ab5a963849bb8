/// A bitmask over merkle levels `1..=3` of a cell.
///
/// Bit `i` is set when the cell carries its own hash for level `i + 1`.
/// The mask is not validated on construction: values above `0b111` are kept
/// as is and produce a level above [`LevelMask::MAX_LEVEL`].
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LevelMask(u8);

impl LevelMask {
    /// Max cell level.
    pub const MAX_LEVEL: u8 = 3;

    /// Constructs a new level mask from the raw value.
    #[inline(always)]
    pub const fn new(mask: u8) -> Self {
        Self(mask)
    }

    /// Creates a sufficient mask for the specified level
    ///
    /// NOTE: levels > 3 has no effect (mask will always be `0b111`)
    #[inline(always)]
    pub const fn from_level(level: u8) -> Self {
        Self(match level {
            0 => 0,
            1 => 1,
            2 => 3,
            _ => 7,
        })
    }

    /// Returns the raw mask value.
    #[inline(always)]
    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// Position of the highest set bit plus one, or `0` for an empty mask.
    #[inline]
    pub const fn level(self) -> u8 {
        (u8::BITS - self.0.leading_zeros()) as u8
    }

    /// Number of set bits.
    #[inline]
    pub const fn hash_count(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Keeps only bits at positions `0..=n`.
    #[inline]
    pub const fn apply(self, n: u8) -> Self {
        if n >= 7 {
            self
        } else {
            Self(self.0 & ((2u8 << n) - 1))
        }
    }

    /// Computes hash index for the specified level
    pub const fn hash_index(self, level: u8) -> u8 {
        Self(self.0 & Self::from_level(level).0).hash_count()
    }

    /// Returns whether the cell has its own hash for the specified level.
    ///
    /// Level `0` is always significant.
    pub const fn is_significant(self, level: u8) -> bool {
        level == 0 || (level <= 8 && (self.0 >> (level - 1)) & 1 != 0)
    }
}

impl PartialEq<u8> for LevelMask {
    #[inline]
    fn eq(&self, other: &u8) -> bool {
        self.0 == *other
    }
}

impl From<u8> for LevelMask {
    #[inline(always)]
    fn from(mask: u8) -> Self {
        Self(mask)
    }
}

impl From<LevelMask> for u8 {
    #[inline(always)]
    fn from(m: LevelMask) -> u8 {
        m.0
    }
}

impl std::fmt::Debug for LevelMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:03b}", self.0))
    }
}
