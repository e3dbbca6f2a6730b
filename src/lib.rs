//! # Sugars Collection
//!
//! An insertion-ordered, keyed collection with the small convenience
//! operations of a scripting-language array: count, filter, map, merge,
//! first/last, keys and JSON output.
//!
//! ## Features
//!
//! - `hashbrown` (default) - build collections from `hashbrown::HashMap`
//!
//! ## JSON text
//!
//! [`Collection::to_json`] is the fallible way to render a collection and
//! returns [`CollectionError::Serialization`] for values JSON cannot hold.
//! `Display` (and so `to_string()`) renders the same text but panics on such
//! values.
//!
//! ## Example
//!
//! ```rust
//! use sugars_collection::{Collection, Key};
//!
//! let scores: Collection<Key, i32> = Collection::new(vec![3, 0, 7]);
//! assert_eq!(scores.count(), 3);
//! assert_eq!(scores.last(), Some(&7));
//!
//! // Falsy values dropped, keys untouched
//! let nonzero = scores.filter_truthy();
//! assert_eq!(nonzero.to_string(), r#"{"0":3,"2":7}"#);
//!
//! // Index keys append, named keys overwrite
//! let named: Collection<Key, i32> = [(Key::from("a"), 1)].into_iter().collect();
//! let update: Collection<Key, i32> = [(Key::from("a"), 2), (Key::from("b"), 3)].into_iter().collect();
//! assert_eq!(named.merge(update).to_json()?, r#"{"a":2,"b":3}"#);
//! # Ok::<(), sugars_collection::CollectionError>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod collection;
pub mod countable;
pub mod entries;
pub mod error;
pub mod json;
pub mod key;
pub mod truthy;

pub use collection::Collection;
pub use countable::Countable;
pub use entries::IntoEntries;
pub use error::{CollectionError, Result};
pub use key::{CollectionKey, Key};
pub use truthy::Truthy;
