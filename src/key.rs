//! Keys of a [`Collection`](crate::Collection).
//!
//! A collection tells "list-like" entries from "map-like" ones through its
//! keys alone: index keys take part in renumbering (merge, reverse) and in
//! the contiguity check that picks JSON array notation, named keys never do.

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// A key type usable in a [`Collection`](crate::Collection).
pub trait CollectionKey: Hash + Eq + Clone {
    /// Returns the position this key stands for, or `None` for a named key.
    fn as_index(&self) -> Option<usize>;

    /// Creates the index key for `index`.
    ///
    /// Panics if `index` does not fit the key type.
    fn from_index(index: usize) -> Self;
}

macro_rules! unsigned_key {
    ($($ty:ty),*) => {
        $(
            impl CollectionKey for $ty {
                #[inline]
                fn as_index(&self) -> Option<usize> {
                    usize::try_from(*self).ok()
                }

                #[inline]
                fn from_index(index: usize) -> Self {
                    <$ty>::try_from(index).unwrap_or_else(|_| {
                        panic!("Index {index} out of range for {} keys", stringify!($ty))
                    })
                }
            }
        )*
    };
}

unsigned_key!(usize, u32, u64);

/// A key that is either a position or a name.
///
/// This mirrors arrays whose keys may be integers or strings. Strings that
/// spell a canonical non-negative integer are normalized to
/// [`Key::Index`] when converted, parsed or deserialized, so `"3"` and `3`
/// are the same key. Build keys through `From` or [`Key::parse`]; a
/// hand-written `Key::Name("3")` bypasses the normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key
    Index(usize),
    /// String key
    Name(String),
}

impl Key {
    /// Builds a key from text, normalizing canonical integers to an index.
    pub fn parse(text: &str) -> Self {
        match canonical_index(text) {
            Some(index) => Key::Index(index),
            None => Key::Name(text.to_owned()),
        }
    }

    /// Returns the name of a named key.
    #[inline]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

fn canonical_index(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    text.parse().ok()
}

impl CollectionKey for Key {
    #[inline]
    fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    #[inline]
    fn from_index(index: usize) -> Self {
        Key::Index(index)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    #[inline]
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    #[inline]
    fn from(name: &str) -> Self {
        Key::parse(name)
    }
}

impl From<String> for Key {
    #[inline]
    fn from(name: String) -> Self {
        match canonical_index(&name) {
            Some(index) => Key::Index(index),
            None => Key::Name(name),
        }
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Index(index) => ser.serialize_u64(*index as u64),
            Key::Name(name) => ser.serialize_str(name),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct KeyVisitor;
        impl Visitor<'_> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or a string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                usize::try_from(v)
                    .map(Key::Index)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                usize::try_from(v)
                    .map(Key::Index)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Key::parse(v))
            }
        }

        de.deserialize_any(KeyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_canonical_integers() {
        assert_eq!(Key::parse("0"), Key::Index(0));
        assert_eq!(Key::parse("42"), Key::Index(42));
        assert_eq!(Key::parse("042"), Key::Name("042".into()));
        assert_eq!(Key::parse("-1"), Key::Name("-1".into()));
        assert_eq!(Key::parse("+1"), Key::Name("+1".into()));
        assert_eq!(Key::parse(""), Key::Name(String::new()));
        assert_eq!(Key::parse("a"), Key::Name("a".into()));
    }

    #[test]
    fn from_text_normalizes_like_parse() {
        assert_eq!(Key::from("0"), Key::Index(0));
        assert_eq!(Key::from(String::from("15")), Key::Index(15));
        assert_eq!(Key::from("007"), Key::Name("007".into()));
        assert_eq!(Key::from(String::from("x")), Key::Name("x".into()));
    }

    #[test]
    fn u32_keys_accept_indices_in_range() {
        assert_eq!(u32::from_index(7), 7u32);
        assert_eq!(u32::from_index(u32::MAX as usize), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic(expected = "out of range for u32 keys")]
    fn u32_keys_reject_indices_past_their_width() {
        let _ = u32::from_index(u32::MAX as usize + 1);
    }

    #[test]
    fn display_matches_json_key_text() {
        assert_eq!(Key::Index(7).to_string(), "7");
        assert_eq!(Key::from("name").to_string(), "name");
    }

    #[test]
    fn deserialize_string_keys_as_indices() {
        let key: Key = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(key, Key::Index(12));
        let key: Key = serde_json::from_str("3").unwrap();
        assert_eq!(key, Key::Index(3));
        assert!(serde_json::from_str::<Key>("-3").is_err());
    }
}
