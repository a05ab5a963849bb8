//! General stuff.

/// Computes CRC-32C of the data and returns it as little-endian bytes,
/// the way it is stored at the end of a BOC.
#[inline]
pub fn crc32c(data: &[u8]) -> [u8; 4] {
    crc32c_u32(data).to_le_bytes()
}

/// Computes CRC-32C of the data.
#[inline]
pub fn crc32c_u32(data: &[u8]) -> u32 {
    ::crc32c::crc32c(data)
}
