//! Serde helpers.

/// Hex (human readable) or raw bytes representation of a [`CellHash`].
///
/// [`CellHash`]: crate::cell::CellHash
pub mod hash_bytes {
    use ::serde::de::{Error, Visitor};
    use ::serde::{Deserializer, Serializer};

    use crate::cell::CellHash;

    /// Serializes hash as a hex string or as raw bytes.
    pub fn serialize<S: Serializer>(hash: &CellHash, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&hex::encode(hash))
        } else {
            serializer.serialize_bytes(hash)
        }
    }

    /// Deserializes hash from a hex string or from raw bytes.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<CellHash, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HashVisitor;

        impl Visitor<'_> for HashVisitor {
            type Value = CellHash;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("hex encoded hash or 32 bytes")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                let mut hash = [0u8; 32];
                match hex::decode_to_slice(v, &mut hash) {
                    Ok(()) => Ok(hash),
                    Err(_) => Err(Error::custom("invalid hex string")),
                }
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: Error,
            {
                match <CellHash>::try_from(v) {
                    Ok(hash) => Ok(hash),
                    Err(_) => Err(Error::invalid_length(v.len(), &self)),
                }
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(HashVisitor)
        } else {
            deserializer.deserialize_bytes(HashVisitor)
        }
    }
}
