use crate::cell::BitString;
use crate::error::Error;

/// A cursor over a [`BitString`].
///
/// Every `load_*` method advances the cursor on success and leaves it
/// untouched on failure.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bits: &'a BitString,
    offset: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a reader positioned at the first bit.
    #[inline]
    pub const fn new(bits: &'a BitString) -> Self {
        Self { bits, offset: 0 }
    }

    /// Returns the underlying bit string.
    #[inline]
    pub const fn bits(&self) -> &'a BitString {
        self.bits
    }

    /// Returns the number of bits already read.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the total number of bits in the underlying string.
    #[inline]
    pub fn total_bits(&self) -> usize {
        self.bits.len()
    }

    /// Returns the number of bits left.
    #[inline]
    pub fn remaining_bits(&self) -> usize {
        self.bits.len() - self.offset
    }

    /// Returns `true` if all bits have been read.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining_bits() == 0
    }

    /// Skips the next `bits` bits.
    pub fn skip(&mut self, bits: usize) -> Result<(), Error> {
        ok!(self.require(bits));
        self.offset += bits;
        Ok(())
    }

    /// Reads the next bit.
    pub fn load_bit(&mut self) -> Result<bool, Error> {
        ok!(self.require(1));
        let index = self.offset;
        let byte = self.bits.as_bytes()[index / 8];
        self.offset += 1;
        Ok((byte >> (7 - index % 8)) & 1 != 0)
    }

    /// Reads the next `bits` bits as a big-endian unsigned integer
    /// without advancing the cursor.
    ///
    /// Fails with [`Error::IntOverflow`] for widths above 64 bits.
    pub fn preload_uint(&self, bits: u16) -> Result<u64, Error> {
        if bits > u64::BITS as u16 {
            return Err(Error::IntOverflow { bits });
        }
        ok!(self.require(bits as usize));
        Ok(self.read_bits(self.offset, bits as usize))
    }

    /// Reads the next `bits` bits as a big-endian unsigned integer.
    ///
    /// Fails with [`Error::IntOverflow`] for widths above 64 bits.
    pub fn load_uint(&mut self, bits: u16) -> Result<u64, Error> {
        let res = ok!(self.preload_uint(bits));
        self.offset += bits as usize;
        Ok(res)
    }

    /// Reads the next `u8`.
    #[inline]
    pub fn load_u8(&mut self) -> Result<u8, Error> {
        Ok(ok!(self.load_uint(8)) as u8)
    }

    /// Reads the next `u16`.
    #[inline]
    pub fn load_u16(&mut self) -> Result<u16, Error> {
        Ok(ok!(self.load_uint(16)) as u16)
    }

    /// Reads the next `u32`.
    #[inline]
    pub fn load_u32(&mut self) -> Result<u32, Error> {
        Ok(ok!(self.load_uint(32)) as u32)
    }

    /// Reads the next `bytes * 8` bits as a byte buffer.
    pub fn load_buffer(&mut self, bytes: usize) -> Result<Vec<u8>, Error> {
        let mut buffer = vec![0; bytes];
        ok!(self.load_raw(&mut buffer));
        Ok(buffer)
    }

    /// Reads the next `N * 8` bits as a fixed size array.
    pub fn load_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut buffer = [0; N];
        ok!(self.load_raw(&mut buffer));
        Ok(buffer)
    }

    fn load_raw(&mut self, target: &mut [u8]) -> Result<(), Error> {
        let bits = target.len() * 8;
        ok!(self.require(bits));

        if self.offset % 8 == 0 {
            let start = self.offset / 8;
            target.copy_from_slice(&self.bits.as_bytes()[start..start + target.len()]);
        } else {
            for (i, byte) in target.iter_mut().enumerate() {
                *byte = self.read_bits(self.offset + i * 8, 8) as u8;
            }
        }

        self.offset += bits;
        Ok(())
    }

    #[inline]
    fn require(&self, bits: usize) -> Result<(), Error> {
        let remaining = self.remaining_bits();
        if bits <= remaining {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                requested: bits,
                remaining,
            })
        }
    }

    /// Collects `bits` bits starting from `offset`.
    /// Caller must ensure that `offset + bits` is in bounds.
    fn read_bits(&self, mut offset: usize, mut bits: usize) -> u64 {
        let data = self.bits.as_bytes();

        let mut res = 0u64;
        while bits > 0 {
            // __xxx___ -> _____xxx
            // r^
            let r = offset % 8;
            let take = std::cmp::min(8 - r, bits);
            let byte = data[offset / 8] >> (8 - r - take);
            let chunk = byte & (((1u16 << take) - 1) as u8);

            res = (res << take) | chunk as u64;
            offset += take;
            bits -= take;
        }
        res
    }
}
