//! GraphQL-aware JSON decoding.
//!
//! [`from_json`] walks a JSON value in lockstep with the target's
//! [`GraphQLType`](crate::GraphQLType) shape instead of building a
//! `serde_json::Value` tree first: the input is parsed once into borrowed
//! [`RawValue`] spans and each span is handed to exactly the field (or, for
//! union fragments, fields) it belongs to. This is what gives the decoder its
//! GraphQL-specific semantics — inline-fragment fan-out, alias-aware key
//! lookup, `Option` reset on `null`, and `Vec` replacement — which plain
//! serde deserialization does not provide.

use serde::de::{DeserializeOwned, DeserializeSeed, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

use crate::error::DecodeError;
use crate::query::GraphQLType;

pub use serde_json::value::RawValue;

/// Decode one complete JSON value into `target`.
///
/// Exactly one top-level value is accepted: malformed input fails with a
/// syntax error carrying the position, and any non-whitespace input after
/// the value fails with [`DecodeError::TrailingData`] rather than being
/// silently ignored.
pub fn from_json<T: GraphQLType>(json: &str, target: &mut T) -> Result<(), DecodeError> {
    let mut de = serde_json::Deserializer::from_str(json);
    let raw = <&RawValue>::deserialize(&mut de).map_err(DecodeError::syntax)?;
    if de.end().is_err() {
        return Err(DecodeError::TrailingData);
    }
    let mut path = FieldPath::new();
    target.decode(raw, &mut path)
}

/// The location of the value currently being decoded, for error reporting:
/// `viewer.comments[2].createdAt`.
#[derive(Debug, Default)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

#[derive(Debug)]
enum Segment {
    Field(String),
    Index(usize),
}

impl FieldPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_field(&mut self, name: &str) {
        self.segments.push(Segment::Field(name.to_owned()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    pub fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("(root)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Walk the keys of a JSON object, handing each `(key, value)` pair to `f`.
///
/// `f` returns whether the key matched a field; unmatched keys are ignored,
/// keeping decoding forward-compatible with server schema additions. Fails
/// with a schema mismatch if `raw` is not an object.
///
/// Called by derived [`GraphQLType`](crate::GraphQLType) impls.
pub fn each_field(
    raw: &RawValue,
    path: &mut FieldPath,
    f: &mut dyn FnMut(&str, &RawValue, &mut FieldPath) -> Result<bool, DecodeError>,
) -> Result<(), DecodeError> {
    let mut failure = None;
    let mut de = serde_json::Deserializer::from_str(raw.get());
    let walker = ObjectWalker {
        path: &mut *path,
        f,
        failure: &mut failure,
    };
    match walker.deserialize(&mut de) {
        Ok(()) => Ok(()),
        Err(_) => match failure {
            Some(err) => Err(err),
            None => Err(DecodeError::SchemaMismatch {
                path: path.to_string(),
                message: format!("expected an object, got: {}", snippet(raw.get())),
            }),
        },
    }
}

/// Streaming object walker: visits each key/value pair without materializing
/// the object. Decode errors from `f` are stashed in `failure` so they
/// survive the trip through the serde error type.
struct ObjectWalker<'a, 'b> {
    path: &'a mut FieldPath,
    f: &'a mut dyn FnMut(&str, &RawValue, &mut FieldPath) -> Result<bool, DecodeError>,
    failure: &'b mut Option<DecodeError>,
}

impl<'de> DeserializeSeed<'de> for ObjectWalker<'_, '_> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for ObjectWalker<'_, '_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        while let Some(key) = map.next_key::<String>()? {
            let value: &RawValue = map.next_value()?;
            if let Err(err) = (self.f)(&key, value, self.path) {
                *self.failure = Some(err);
                return Err(serde::de::Error::custom("decode failed"));
            }
        }
        Ok(())
    }
}

/// Decode a JSON array into `vec`, replacing any prior contents. The target
/// is never appended to: decoding is not merge-semantics.
pub(crate) fn array<T: GraphQLType>(
    vec: &mut Vec<T>,
    raw: &RawValue,
    path: &mut FieldPath,
) -> Result<(), DecodeError> {
    let items: Vec<&RawValue> =
        serde_json::from_str(raw.get()).map_err(|_| DecodeError::SchemaMismatch {
            path: path.to_string(),
            message: format!("expected an array, got: {}", snippet(raw.get())),
        })?;
    vec.clear();
    vec.reserve(items.len());
    for (i, item) in items.into_iter().enumerate() {
        path.push_index(i);
        let mut element = T::default();
        let result = element.decode(item, path);
        path.pop();
        result?;
        vec.push(element);
    }
    Ok(())
}

/// Decode a scalar leaf by its own serde rule, mapping failures to a schema
/// mismatch naming the field path. `expected` describes the leaf for the
/// error message ("an integer", "a ReactionContent value").
///
/// Public so [`graphql_enum!`](crate::graphql_enum) expansions can call it.
pub fn scalar_leaf<T: DeserializeOwned>(
    raw: &RawValue,
    path: &mut FieldPath,
    expected: &str,
) -> Result<T, DecodeError> {
    serde_json::from_str(raw.get()).map_err(|_| DecodeError::SchemaMismatch {
        path: path.to_string(),
        message: format!("expected {}, got: {}", expected, snippet(raw.get())),
    })
}

/// A short excerpt of the offending JSON for error messages.
fn snippet(json: &str) -> String {
    const LIMIT: usize = 40;
    if json.chars().count() <= LIMIT {
        json.to_owned()
    } else {
        let cut: String = json.chars().take(LIMIT).collect();
        format!("{}…", cut)
    }
}
