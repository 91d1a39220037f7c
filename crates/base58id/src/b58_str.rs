use crate::alphabet::ENCODED_LEN;

/// The fixed-width textual form of a [`Base58Id`](crate::Base58Id),
/// always exactly 11 alphabet bytes, stored inline on the stack.
#[derive(Clone, Copy)]
pub struct Base58Str(pub(crate) [u8; ENCODED_LEN]);

impl AsRef<str> for Base58Str {
    #[inline]
    fn as_ref(&self) -> &str {
        // only ever constructed from alphabet bytes, which are ASCII
        unsafe { std::str::from_utf8_unchecked(&self.0) }
    }
}

use std::borrow::Borrow;

impl Borrow<str> for Base58Str {
    #[inline]
    fn borrow(&self) -> &str {
        self.as_ref()
    }
}

use std::ops::Deref;

impl Deref for Base58Str {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_ref()
    }
}

impl PartialEq for Base58Str {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Base58Str {}

impl PartialEq<str> for Base58Str {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_ref() == other
    }
}

impl PartialEq<Base58Str> for str {
    #[inline]
    fn eq(&self, other: &Base58Str) -> bool {
        self == other.as_ref()
    }
}

use std::fmt;

impl fmt::Debug for Base58Str {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_ref(), f)
    }
}

impl fmt::Display for Base58Str {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_ref(), f)
    }
}
