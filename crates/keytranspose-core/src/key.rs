// Keytranspose Key Type
// Represents a single letter key from the alphabetic block of a keyboard

use std::fmt;
use std::str::FromStr;

/// Represents a single letter key.
///
/// This is a newtype wrapper around the key's lowercase ASCII byte.
/// Only `a`..=`z` are representable; anything else has no key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Key(u8);

/// Number of letter keys on the block
pub const KEY_COUNT: usize = 26;

impl Key {
    /// Get the key for a character, if the character names a letter key
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_lowercase() {
            Some(Key(c as u8))
        } else {
            None
        }
    }

    /// Get the character this key types
    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// Dense index of this key, suitable for table lookups
    pub fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    /// Iterate over every letter key in alphabetical order
    pub fn all() -> impl Iterator<Item = Key> {
        (b'a'..=b'z').map(Key)
    }
}

impl TryFrom<char> for Key {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Key::from_char(c).ok_or_else(|| format!("Unknown key: {:?}", c))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::try_from(c),
            _ => Err(format!("Unknown key: {}", s)),
        }
    }
}
