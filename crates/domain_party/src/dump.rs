//! Flattening entities into generic maps
//!
//! `dump()` turns an entity into a `serde_json` object map so it can be
//! handed to any generic encoder. Composite entities build their map level
//! by level with [`flatten`], most-base level first.

use serde_json::{Map, Value};

/// A flattened entity
pub type DumpMap = Map<String, Value>;

/// Entities that can be flattened into a [`DumpMap`]
pub trait Dump {
    /// Returns all stored data as a map from field name to value
    fn dump(&self) -> DumpMap;

    /// Returns the dump wrapped as a JSON value
    fn dump_value(&self) -> Value {
        Value::Object(self.dump())
    }
}

/// Merges levels in order; a key set by an earlier level is never replaced
///
/// # Example
///
/// ```rust
/// use domain_party::dump::{flatten, DumpMap};
/// use serde_json::json;
///
/// let mut base = DumpMap::new();
/// base.insert("county".into(), json!({"id": 5}));
/// let mut local = DumpMap::new();
/// local.insert("county".into(), json!("shadow"));
/// local.insert("zipcode".into(), json!("00000"));
///
/// let merged = flatten([base, local]);
/// assert_eq!(merged["county"], json!({"id": 5}));
/// assert_eq!(merged["zipcode"], "00000");
/// ```
pub fn flatten<I>(levels: I) -> DumpMap
where
    I: IntoIterator<Item = DumpMap>,
{
    let mut merged = DumpMap::new();
    for level in levels {
        for (key, value) in level {
            merged.entry(key).or_insert(value);
        }
    }
    merged
}
