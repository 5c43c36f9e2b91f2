//! JSON rendering and parsing for collections.
//!
//! A collection whose keys are exactly `0..count-1` renders as a JSON array;
//! any other collection renders as a JSON object whose member names are the
//! keys' text forms, in collection order.

use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{Collection, CollectionError, Key};
use crate::Result;
use crate::constants::{DEFAULT_JSON_DEPTH, PRETTY_INDENT};

/// Options for [`Collection::to_json_with`].
///
/// ```
/// # use collection::{Collection, JsonOptions, collection};
/// let numbers: Collection = collection![1, 2];
///
/// let options = JsonOptions::default().with_force_object();
/// assert_eq!(numbers.to_json_with(&options).unwrap(), r#"{"0":1,"1":2}"#);
///
/// let options = JsonOptions::default().with_depth(0);
/// assert!(numbers.to_json_with(&options).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonOptions {
    /// Indent nested structures with four spaces per level
    pub pretty: bool,
    /// Render every list as an object keyed by position
    pub force_object: bool,
    /// Maximum nesting depth; the collection itself counts as one level
    pub depth: usize,
}

impl JsonOptions {
    /// Enables pretty printing
    pub fn with_pretty_print(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Renders lists as objects
    pub fn with_force_object(mut self) -> Self {
        self.force_object = true;
        self
    }

    /// Sets the nesting limit
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            force_object: false,
            depth: DEFAULT_JSON_DEPTH,
        }
    }
}

impl<V: Serialize> Collection<V> {
    /// Renders the collection as compact JSON with the default depth limit
    pub fn to_json(&self) -> Result<String> {
        self.to_json_with(&JsonOptions::default())
    }

    /// Renders the collection as JSON.
    ///
    /// Fails with `EncodingFailed` when a value cannot be represented in JSON
    /// and with `DepthExceeded` when nesting goes past `options.depth`.
    pub fn to_json_with(&self, options: &JsonOptions) -> Result<String> {
        let mut tree = serde_json::to_value(self).map_err(|err| {
            tracing::debug!(error = %err, "Collection could not be encoded as JSON");
            CollectionError::EncodingFailed {
                reason: err.to_string(),
            }
        })?;

        let depth = nesting_depth(&tree);
        if depth > options.depth {
            tracing::debug!(depth, limit = options.depth, "JSON depth limit exceeded");
            return Err(CollectionError::DepthExceeded {
                limit: options.depth,
                depth,
            }
            .into());
        }

        if options.force_object {
            force_object(&mut tree);
        }

        if options.pretty {
            let mut buf = Vec::new();
            let formatter = serde_json::ser::PrettyFormatter::with_indent(PRETTY_INDENT);
            let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
            tree.serialize(&mut serializer)?;
            String::from_utf8(buf).map_err(|err| {
                CollectionError::EncodingFailed {
                    reason: err.to_string(),
                }
                .into()
            })
        } else {
            Ok(serde_json::to_string(&tree)?)
        }
    }
}

impl<V> Collection<V>
where
    V: for<'de> Deserialize<'de>,
{
    /// Parses JSON text into a collection.
    ///
    /// Arrays get positional keys; object members keep their order and are
    /// keyed by their names as strings.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Depth of a JSON tree, where each array or object adds one level.
fn nesting_depth(value: &serde_json::Value) -> usize {
    match value {
        serde_json::Value::Array(items) => 1 + items.iter().map(nesting_depth).max().unwrap_or(0),
        serde_json::Value::Object(members) => {
            1 + members.values().map(nesting_depth).max().unwrap_or(0)
        }
        _ => 0,
    }
}

/// Rewrites every array in the tree as an object keyed by position.
fn force_object(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Array(items) => {
            let object = std::mem::take(items)
                .into_iter()
                .enumerate()
                .map(|(position, mut item)| {
                    force_object(&mut item);
                    (position.to_string(), item)
                })
                .collect();
            *value = serde_json::Value::Object(object);
        }
        serde_json::Value::Object(members) => members.values_mut().for_each(force_object),
        _ => {}
    }
}

impl<V: Serialize> Serialize for Collection<V> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for (_, value) in self.iter() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            // Int(n) and Str("n") are distinct keys but share a member name
            let mut names = HashSet::with_capacity(self.len());
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                if !names.insert(key.to_string()) {
                    return Err(S::Error::custom(format!(
                        "duplicate JSON member name \"{key}\""
                    )));
                }
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Collection<V> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CollectionVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for CollectionVisitor<V> {
            type Value = Collection<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON array or object")
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(value) = seq.next_element()? {
                    values.push(value);
                }
                Ok(Collection::from_values(values))
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut collection = Collection::new();
                while let Some((key, value)) = access.next_entry::<Key, V>()? {
                    collection.put(key, value);
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_any(CollectionVisitor(PhantomData))
    }
}
