//! JSON support for [`Collection`].
//!
//! A list (keys exactly `0..n` in order) serializes to a JSON array, any
//! other collection to a JSON object whose index keys become decimal
//! strings. Deserialization accepts both forms.

use crate::collection::Collection;
use crate::error::{CollectionError, Result};
use crate::key::CollectionKey;
use indexmap::IndexMap;
use log::debug;
use serde::de::{DeserializeOwned, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

impl<K: CollectionKey + Serialize, V: Serialize> Collection<K, V> {
    /// Serializes the collection to compact JSON text.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| {
            debug!("collection of {} entries failed to serialize: {err}", self.len());
            CollectionError::from(err)
        })
    }

    /// Serializes the collection to indented JSON text.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            debug!("collection of {} entries failed to serialize: {err}", self.len());
            CollectionError::from(err)
        })
    }
}

impl<K: CollectionKey + DeserializeOwned, V: DeserializeOwned> Collection<K, V> {
    /// Parses JSON text whose top level is an array or an object.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|err| {
            debug!("collection JSON text failed to parse: {err}");
            CollectionError::from(err)
        })?;
        Self::try_from(value)
    }
}

/// Renders [`to_json`](Collection::to_json).
///
/// A value that cannot be serialized surfaces as [`fmt::Error`], which makes
/// `to_string()` panic; call `to_json` when that can happen.
impl<K: CollectionKey + Serialize, V: Serialize> fmt::Display for Collection<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl<K: CollectionKey + DeserializeOwned, V: DeserializeOwned> TryFrom<Value> for Collection<K, V> {
    type Error = CollectionError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(_) | Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => {
                let found = kind_of(&other);
                debug!("rejected {found} as collection input");
                Err(CollectionError::invalid_argument(found))
            }
        }
    }
}

impl<K: CollectionKey + Serialize, V: Serialize> Serialize for Collection<K, V> {
    fn serialize<S: Serializer>(&self, ser: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = ser.serialize_seq(Some(self.len()))?;
            for value in self.all().values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = ser.serialize_map(Some(self.len()))?;
            for (key, value) in self {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}

impl<'de, K, V> Deserialize<'de> for Collection<K, V>
where
    K: CollectionKey + Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(de: D) -> std::result::Result<Self, D::Error> {
        struct CollectionVisitor<K, V>(PhantomData<(K, V)>);
        impl<'de, K, V> Visitor<'de> for CollectionVisitor<K, V>
        where
            K: CollectionKey + Deserialize<'de>,
            V: Deserialize<'de>,
        {
            type Value = Collection<K, V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sequence or a map")
            }

            #[inline]
            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = IndexMap::with_capacity(seq.size_hint().unwrap_or(0));
                let mut index = 0;
                while let Some(value) = seq.next_element()? {
                    items.insert(K::from_index(index), value);
                    index += 1;
                }
                Ok(Collection::from(items))
            }

            #[inline]
            fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut items = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry()? {
                    items.insert(key, value);
                }
                Ok(Collection::from(items))
            }
        }

        de.deserialize_any(CollectionVisitor(PhantomData))
    }
}
