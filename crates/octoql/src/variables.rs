//! Typed GraphQL variables and the argument-declaration clause.
//!
//! [`Variables`] is a closed, typed variable set rather than an open map of
//! arbitrary values: every value is a [`Variable`] — a required scalar, a
//! nullable scalar, a list of required scalars, or a named input object —
//! so the wire type of each declaration (`Int!`, `Boolean`, `[ID!]`,
//! `AddReactionInput!`) is derived exhaustively from the variant.
//! Unsupported shapes are unrepresentable, so there is no runtime "cannot
//! introspect this value" failure mode.
//!
//! The set is backed by a `BTreeMap`, which makes the emitted argument list
//! lexicographic by variable name regardless of insertion order; emitted
//! queries are deterministic and therefore cache- and test-friendly.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::input::InputObject;
use crate::scalar::{GitObjectId, GitTimestamp, Html, Id, Uri, X509Certificate};

/// Wire type names for the scalar leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Boolean,
    Int,
    Float,
    String,
    Id,
    Uri,
    Html,
    GitObjectId,
    GitTimestamp,
    DateTime,
    X509Certificate,
    /// A generated enum type, carrying its schema type name.
    Enum(&'static str),
}

impl ScalarType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
            Self::Id => "ID",
            Self::Uri => "URI",
            Self::Html => "HTML",
            Self::GitObjectId => "GitObjectID",
            Self::GitTimestamp => "GitTimestamp",
            Self::DateTime => "DateTime",
            Self::X509Certificate => "X509Certificate",
            Self::Enum(name) => name,
        }
    }
}

/// A scalar variable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Boolean(bool),
    Int(i32),
    Float(f64),
    String(String),
    Id(Id),
    Uri(Uri),
    Html(Html),
    GitObjectId(GitObjectId),
    GitTimestamp(GitTimestamp),
    DateTime(DateTime<Utc>),
    X509Certificate(X509Certificate),
    Enum {
        type_name: &'static str,
        value: &'static str,
    },
}

impl Scalar {
    fn scalar_type(&self) -> ScalarType {
        match self {
            Self::Boolean(_) => ScalarType::Boolean,
            Self::Int(_) => ScalarType::Int,
            Self::Float(_) => ScalarType::Float,
            Self::String(_) => ScalarType::String,
            Self::Id(_) => ScalarType::Id,
            Self::Uri(_) => ScalarType::Uri,
            Self::Html(_) => ScalarType::Html,
            Self::GitObjectId(_) => ScalarType::GitObjectId,
            Self::GitTimestamp(_) => ScalarType::GitTimestamp,
            Self::DateTime(_) => ScalarType::DateTime,
            Self::X509Certificate(_) => ScalarType::X509Certificate,
            Self::Enum { type_name, .. } => ScalarType::Enum(type_name),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Boolean(v) => (*v).into(),
            Self::Int(v) => (*v).into(),
            Self::Float(v) => (*v).into(),
            Self::String(v) => v.clone().into(),
            Self::Id(v) => v.0.clone().into(),
            Self::Uri(v) => v.0.clone().into(),
            Self::Html(v) => v.0.clone().into(),
            Self::GitObjectId(v) => v.0.clone().into(),
            Self::GitTimestamp(v) => v.0.to_rfc3339().into(),
            Self::DateTime(v) => v.to_rfc3339().into(),
            Self::X509Certificate(v) => v.0.clone().into(),
            Self::Enum { value, .. } => (*value).into(),
        }
    }
}

/// Conversion into [`Scalar`] with a statically known wire type.
///
/// A bare Rust string converts to the opaque `ID` type — GitHub's API is
/// id-heavy and `ID` accepts any string — while [`Variable::string`] gives
/// the GraphQL `String` type explicitly.
pub trait IntoScalar {
    const TYPE: ScalarType;
    fn into_scalar(self) -> Scalar;
}

macro_rules! into_scalar {
    ($($ty:ty => $scalar_type:ident, $build:expr;)+) => {$(
        impl IntoScalar for $ty {
            const TYPE: ScalarType = ScalarType::$scalar_type;
            fn into_scalar(self) -> Scalar {
                let build: fn($ty) -> Scalar = $build;
                build(self)
            }
        }
    )+};
}

into_scalar! {
    bool => Boolean, Scalar::Boolean;
    i32 => Int, Scalar::Int;
    f64 => Float, Scalar::Float;
    String => Id, |v| Scalar::Id(Id(v));
    &str => Id, |v| Scalar::Id(Id(v.to_owned()));
    Id => Id, Scalar::Id;
    Uri => Uri, Scalar::Uri;
    Html => Html, Scalar::Html;
    GitObjectId => GitObjectId, Scalar::GitObjectId;
    GitTimestamp => GitTimestamp, Scalar::GitTimestamp;
    DateTime<Utc> => DateTime, Scalar::DateTime;
    X509Certificate => X509Certificate, Scalar::X509Certificate;
}

/// One typed variable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    /// A required scalar, declared as `Type!`.
    Scalar(Scalar),
    /// A nullable scalar, declared as `Type` with no `!`.
    Nullable {
        ty: ScalarType,
        value: Option<Scalar>,
    },
    /// A required list of required scalars, declared as `[Elem!]`.
    List { ty: ScalarType, values: Vec<Scalar> },
    /// A named input object, declared as `TypeName!`.
    Input {
        type_name: &'static str,
        value: serde_json::Value,
    },
}

impl Variable {
    /// A required scalar (`Type!`).
    pub fn scalar(value: impl IntoScalar) -> Self {
        Self::Scalar(value.into_scalar())
    }

    /// A required GraphQL `String!` (bare Rust strings convert to `ID!`).
    pub fn string(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::String(value.into()))
    }

    /// A nullable scalar (`Type`); `None` is sent as JSON `null`.
    pub fn nullable<T: IntoScalar>(value: Option<T>) -> Self {
        Self::Nullable {
            ty: T::TYPE,
            value: value.map(IntoScalar::into_scalar),
        }
    }

    /// A required list of required scalars (`[Elem!]`).
    pub fn list<T: IntoScalar>(values: impl IntoIterator<Item = T>) -> Self {
        Self::List {
            ty: T::TYPE,
            values: values.into_iter().map(IntoScalar::into_scalar).collect(),
        }
    }

    /// A named input object (`TypeName!`), serialized with its camelCase
    /// field names.
    pub fn input<T: InputObject>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::Input {
            type_name: T::TYPE_NAME,
            value: serde_json::to_value(value)?,
        })
    }

    /// The declaration type for the argument clause.
    fn wire_type(&self) -> String {
        match self {
            Self::Scalar(s) => format!("{}!", s.scalar_type().name()),
            Self::Nullable { ty, .. } => ty.name().to_owned(),
            Self::List { ty, .. } => format!("[{}!]", ty.name()),
            Self::Input { type_name, .. } => format!("{}!", type_name),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Scalar(s) => s.to_json(),
            Self::Nullable { value, .. } => value
                .as_ref()
                .map_or(serde_json::Value::Null, Scalar::to_json),
            Self::List { values, .. } => values.iter().map(Scalar::to_json).collect(),
            Self::Input { value, .. } => value.clone(),
        }
    }
}

macro_rules! variable_from {
    ($($ty:ty),+ $(,)?) => {$(
        impl From<$ty> for Variable {
            fn from(value: $ty) -> Self {
                Variable::Scalar(value.into_scalar())
            }
        }
    )+};
}

variable_from!(
    bool,
    i32,
    f64,
    String,
    &str,
    Id,
    Uri,
    Html,
    GitObjectId,
    GitTimestamp,
    DateTime<Utc>,
    X509Certificate,
);

/// An ordered set of GraphQL variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: BTreeMap<String, Variable>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    ///
    /// ```
    /// use octoql::Variables;
    ///
    /// let vars = Variables::new().set("issueNumber", 1).set("owner", "golang");
    /// assert_eq!(vars.argument_clause(), "$issueNumber:Int!$owner:ID!");
    /// ```
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Variable>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Variable>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// The minified argument-declaration clause, names in lexicographic
    /// (byte-wise) order: `$A:Int!$B:Boolean`.
    pub fn argument_clause(&self) -> String {
        let mut out = String::new();
        self.write_argument_clause(&mut out);
        out
    }

    pub(crate) fn write_argument_clause(&self, out: &mut String) {
        for (name, value) in &self.values {
            out.push('$');
            out.push_str(name);
            out.push(':');
            out.push_str(&value.wire_type());
        }
    }
}

impl Serialize for Variables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, &value.to_json())?;
        }
        map.end()
    }
}
