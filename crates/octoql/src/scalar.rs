//! GitHub GraphQL scalar types.
//!
//! These are the leaf types of a result shape: each implements
//! [`GraphQLType`] with the default no-op selection methods (leaves emit no
//! sub-selection) and a `decode` that parses the raw JSON span directly.
//!
//! `bool`, `i32`, `f64` and `String` map to the built-in scalars `Boolean`,
//! `Int`, `Float` and `String`; the newtypes below cover GitHub's custom
//! scalars, which all travel as JSON strings but are kept distinct so the
//! variable layer can declare their proper wire types.

use chrono::{DateTime, FixedOffset, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;

use crate::decode::FieldPath;
use crate::error::DecodeError;
use crate::query::GraphQLType;

/// The opaque `ID` scalar.
///
/// GitHub historically served some ids as JSON numbers; both string and
/// number representations decode, normalized to the string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(pub String);

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = Id;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Id, E> {
                Ok(Id(v.to_owned()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Id, E> {
                Ok(Id(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Id, E> {
                Ok(Id(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

macro_rules! string_scalar {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_scalar!(
    /// The `URI` scalar, an RFC 3986/3987/6570 string.
    Uri
);
string_scalar!(
    /// The `HTML` scalar, a string of pre-rendered HTML.
    Html
);
string_scalar!(
    /// The `GitObjectID` scalar, a 40-character git object id.
    GitObjectId
);
string_scalar!(
    /// The `X509Certificate` scalar, a PEM-encoded certificate.
    X509Certificate
);

/// The `GitTimestamp` scalar.
///
/// Unlike `DateTime`, git timestamps carry the author's original UTC offset,
/// so the offset is preserved rather than normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GitTimestamp(pub DateTime<FixedOffset>);

impl Default for GitTimestamp {
    fn default() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
    }
}

impl From<DateTime<FixedOffset>> for GitTimestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self(value)
    }
}

macro_rules! scalar_leaf {
    ($($ty:ty => $expected:expr;)+) => {$(
        impl GraphQLType for $ty {
            fn decode(&mut self, raw: &RawValue, path: &mut FieldPath) -> Result<(), DecodeError> {
                *self = crate::decode::scalar_leaf(raw, path, $expected)?;
                Ok(())
            }
        }
    )+};
}

scalar_leaf! {
    bool => "a boolean";
    i32 => "an integer";
    f64 => "a float";
    String => "a string";
    DateTime<Utc> => "an ISO-8601 timestamp";
    Id => "an id";
    Uri => "a URI string";
    Html => "an HTML string";
    GitObjectId => "a git object id";
    GitTimestamp => "an ISO-8601 timestamp";
    X509Certificate => "a certificate string";
}
