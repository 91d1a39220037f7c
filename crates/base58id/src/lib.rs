mod alphabet;
mod b58_str;
mod decode;
mod encode;
mod error;

pub use alphabet::ENCODED_LEN;
pub use b58_str::Base58Str;
pub use decode::decode64;
pub use encode::encode64;
pub use error::{DecodeError, RangeError};

/// A 64-bit unsigned identifier with a fixed-width base-58 textual form.
///
/// Ordering, equality, and hashing operate on the underlying integer,
/// never on the encoded text.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Base58Id(pub u64);

use std::fmt;

impl fmt::Debug for Base58Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Base58Id").field(&self.encode()).finish()
    }
}

impl Base58Id {
    pub const ZERO: Self = Base58Id(0);
    pub const MAX: Self = Base58Id(u64::MAX);

    #[inline]
    pub const fn to_u64(self) -> u64 {
        self.0
    }

    /// Renders the fixed 11-character base-58 form.
    #[inline]
    pub fn encode(self) -> Base58Str {
        encode::encode64(self.0)
    }

    /// Parses a base-58 string. Leading `'1'` padding is permitted.
    #[inline]
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        decode::decode64(text).map(Base58Id)
    }

    /// Narrows to a signed 64-bit integer, failing above `i64::MAX`.
    #[inline]
    pub const fn to_i64(self) -> Result<i64, RangeError> {
        if self.0 > i64::MAX as u64 {
            return Err(RangeError::ExceedsSignedRange);
        }

        Ok(self.0 as i64)
    }

    /// Widens from a signed 64-bit integer, failing on negatives.
    #[inline]
    pub const fn from_i64(value: i64) -> Result<Self, RangeError> {
        if value < 0 {
            return Err(RangeError::NegativeValue);
        }

        Ok(Base58Id(value as u64))
    }

    /// The 8-byte network-order wire form; a byte-for-byte transfer of
    /// the value, never the text form.
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub const fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Base58Id(u64::from_be_bytes(bytes))
    }

    /// Well-distributed 64-bit hash of the raw value bytes. Deterministic
    /// across processes, unlike the std `Hash` impl, so it is usable for
    /// on-disk or cross-process structures.
    #[inline]
    pub fn hash64(self) -> u64 {
        fxhash::hash64(&self.0.to_be_bytes())
    }
}

impl From<u64> for Base58Id {
    #[inline]
    fn from(value: u64) -> Self {
        Base58Id(value)
    }
}

impl From<Base58Id> for u64 {
    #[inline]
    fn from(id: Base58Id) -> u64 {
        id.0
    }
}

impl TryFrom<i64> for Base58Id {
    type Error = RangeError;

    #[inline]
    fn try_from(value: i64) -> Result<Self, RangeError> {
        Self::from_i64(value)
    }
}

impl TryFrom<Base58Id> for i64 {
    type Error = RangeError;

    #[inline]
    fn try_from(id: Base58Id) -> Result<i64, RangeError> {
        id.to_i64()
    }
}

use std::str::FromStr;

impl FromStr for Base58Id {
    type Err = DecodeError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, DecodeError> {
        Self::parse(s)
    }
}

impl fmt::Display for Base58Id {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.encode(), f)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{Deserialize, Deserializer, Error, Visitor};
    use serde::ser::{Serialize, Serializer};

    use super::Base58Id;

    impl Serialize for Base58Id {
        #[inline]
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            if serializer.is_human_readable() {
                serializer.serialize_str(self.encode().as_ref())
            } else {
                self.0.serialize(serializer)
            }
        }
    }

    impl<'de> Deserialize<'de> for Base58Id {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            use std::fmt;

            struct IdVisitor;

            impl<'de> Visitor<'de> for IdVisitor {
                type Value = Base58Id;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a base58 string or 64-bit integer")
                }

                fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                where
                    E: Error,
                {
                    Base58Id::parse(v).map_err(E::custom)
                }

                fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
                where
                    E: Error,
                {
                    Ok(Base58Id(v))
                }

                fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
                where
                    E: Error,
                {
                    Base58Id::from_i64(v).map_err(E::custom)
                }
            }

            if deserializer.is_human_readable() {
                deserializer.deserialize_any(IdVisitor)
            } else {
                deserializer.deserialize_u64(IdVisitor)
            }
        }
    }
}

#[cfg(feature = "pg")]
mod pg_impl {
    use postgres_types::{accepts, to_sql_checked, FromSql, IsNull, ToSql, Type};

    use super::Base58Id;

    impl ToSql for Base58Id {
        #[inline]
        fn to_sql(
            &self,
            ty: &Type,
            out: &mut bytes::BytesMut,
        ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>>
        where
            Self: Sized,
        {
            // bit-preserving: INT8's binary format is the 8-byte
            // network-order wire form, so ids above i64::MAX reinterpret
            // rather than range-error (the checked path is to_i64)
            (self.0 as i64).to_sql(ty, out)
        }

        accepts!(INT8);
        to_sql_checked!();
    }

    impl<'a> FromSql<'a> for Base58Id {
        #[inline]
        fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn std::error::Error + Sync + Send>> {
            i64::from_sql(ty, raw).map(|v| Base58Id(v as u64))
        }

        accepts!(INT8);
    }
}
