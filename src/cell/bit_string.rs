use crate::cell::BitReader;
use crate::error::Error;

/// An immutable sequence of bits with a known length.
///
/// Bits are stored big-endian: bit `0` is the most significant bit of the
/// first byte. Bits past the end of the string are always zero.
#[derive(Default, Clone, Eq, PartialEq, Hash)]
pub struct BitString {
    data: Box<[u8]>,
    bit_len: usize,
}

impl BitString {
    /// Creates a bit string from the first `bit_len` bits of `data`.
    pub fn new(data: &[u8], bit_len: usize) -> Result<Self, Error> {
        if bit_len > data.len() * 8 {
            return Err(Error::InvalidBitLen {
                bit_len,
                byte_len: data.len(),
            });
        }

        let mut data = data[..bit_len.div_ceil(8)].to_vec().into_boxed_slice();
        let rem = bit_len % 8;
        if rem != 0 {
            if let Some(last) = data.last_mut() {
                *last &= 0xff << (8 - rem);
            }
        }

        Ok(Self { data, bit_len })
    }

    /// Creates a bit string which covers all bits of `data`.
    pub fn from_bytes<T: Into<Box<[u8]>>>(data: T) -> Self {
        let data = data.into();
        let bit_len = data.len() * 8;
        Self { data, bit_len }
    }

    /// Creates a bit string from data with a completion tag.
    ///
    /// The tag is the last set bit of the data followed only by zeros
    /// (`xxxx1000`). Data without any set bit is treated as an empty string.
    pub fn from_padded(data: &[u8]) -> Self {
        let mut bit_len = data.len() * 8;
        for byte in data.iter().rev() {
            if *byte == 0 {
                bit_len -= 8;
            } else {
                bit_len -= 1 + byte.trailing_zeros() as usize;
                break;
            }
        }

        // NOTE: `bit_len` never exceeds the data length
        let mut data = data[..bit_len.div_ceil(8)].to_vec().into_boxed_slice();
        let rem = bit_len % 8;
        if rem != 0 {
            if let Some(last) = data.last_mut() {
                *last &= 0xff << (8 - rem);
            }
        }

        Self { data, bit_len }
    }

    /// Returns the number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.bit_len
    }

    /// Returns `true` if there are no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Underlying bytes. The last byte may be partially used.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the bit at the specified index.
    pub fn get_bit(&self, index: usize) -> Option<bool> {
        if index < self.bit_len {
            let byte = self.data[index / 8];
            Some((byte >> (7 - index % 8)) & 1 != 0)
        } else {
            None
        }
    }

    /// Creates a new reader positioned at the first bit.
    #[inline]
    pub fn reader(&self) -> BitReader<'_> {
        BitReader::new(self)
    }
}

impl std::fmt::Display for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rem = self.bit_len % 4;
        let mut data = self.data.to_vec();
        if rem != 0 {
            // Incomplete nibble: the completion tag fits into the last byte
            let tag = self.bit_len;
            data[tag / 8] |= 0x80 >> (tag % 8);
        }

        let mut hex = hex::encode_upper(data);
        hex.truncate(self.bit_len.div_ceil(4));
        f.write_str(&hex)?;
        if rem != 0 {
            f.write_str("_")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitString")
            .field("bit_len", &self.bit_len)
            .field("data", &format_args!("{self}"))
            .finish()
    }
}
