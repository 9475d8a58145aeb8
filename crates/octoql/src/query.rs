//! Type-driven GraphQL query synthesis.
//!
//! Every type usable in a result shape implements [`GraphQLType`]: scalar
//! leaves by hand in [`scalar`](crate::scalar) and [`enums`](crate::enums),
//! record types via `#[derive(GraphQLType)]`. The struct shape *is* the query
//! shape — [`build_query`] and [`build_mutation`] walk it to produce the
//! minified wire string, and the same shape drives response decoding.

use serde_json::value::RawValue;

use crate::decode::FieldPath;
use crate::error::DecodeError;
use crate::variables::Variables;

/// A type that knows its GraphQL selection and how to decode itself from a
/// GraphQL JSON response.
///
/// Scalar leaves (the closed set in [`scalar`](crate::scalar), plus the
/// generated enums) keep the default no-op selection methods and implement
/// only [`decode`](Self::decode): they are terminal even where their wire
/// representation is structured, and are never expanded into a
/// sub-selection. Derived record types implement all four methods.
pub trait GraphQLType: Default {
    /// Append this type's selection set (`{field1,field2,...}`). Scalar
    /// leaves append nothing.
    fn build_selection(out: &mut String) {
        let _ = out;
    }

    /// Append this type's fields without enclosing braces, each with a
    /// trailing comma. Used to splice flattened fields into a parent
    /// selection.
    fn build_fields(out: &mut String) {
        let _ = out;
    }

    /// Populate `self` from one JSON value.
    fn decode(&mut self, raw: &RawValue, path: &mut FieldPath) -> Result<(), DecodeError>;

    /// Offer one object key to this value, returning whether it matched a
    /// field. Implemented by derived record types; the scalar default
    /// matches nothing.
    fn decode_field(
        &mut self,
        key: &str,
        raw: &RawValue,
        path: &mut FieldPath,
    ) -> Result<bool, DecodeError> {
        let _ = (key, raw, path);
        Ok(false)
    }
}

/// `Option` marks a nullable field: the selection is the inner type's, and a
/// JSON `null` resets the value to `None` even if it previously held one.
///
/// Key matching forwards to the inner type, so fragment and flattened
/// members may be `Option`-typed: the value is allocated on the first
/// matching key and stays `None` when no key ever matches.
impl<T: GraphQLType> GraphQLType for Option<T> {
    fn build_selection(out: &mut String) {
        T::build_selection(out);
    }

    fn build_fields(out: &mut String) {
        T::build_fields(out);
    }

    fn decode(&mut self, raw: &RawValue, path: &mut FieldPath) -> Result<(), DecodeError> {
        if raw.get() == "null" {
            *self = None;
            return Ok(());
        }
        self.get_or_insert_with(T::default).decode(raw, path)
    }

    fn decode_field(
        &mut self,
        key: &str,
        raw: &RawValue,
        path: &mut FieldPath,
    ) -> Result<bool, DecodeError> {
        match self {
            Some(inner) => inner.decode_field(key, raw, path),
            None => {
                let mut inner = T::default();
                if inner.decode_field(key, raw, path)? {
                    *self = Some(inner);
                    return Ok(true);
                }
                Ok(false)
            }
        }
    }
}

/// `Vec` marks a GraphQL list: decoding replaces the previous contents
/// entirely.
impl<T: GraphQLType> GraphQLType for Vec<T> {
    fn build_selection(out: &mut String) {
        T::build_selection(out);
    }

    fn build_fields(out: &mut String) {
        T::build_fields(out);
    }

    fn decode(&mut self, raw: &RawValue, path: &mut FieldPath) -> Result<(), DecodeError> {
        crate::decode::array(self, raw, path)
    }
}

/// `Box` is transparent; it exists so recursive result shapes can be
/// declared.
impl<T: GraphQLType> GraphQLType for Box<T> {
    fn build_selection(out: &mut String) {
        T::build_selection(out);
    }

    fn build_fields(out: &mut String) {
        T::build_fields(out);
    }

    fn decode(&mut self, raw: &RawValue, path: &mut FieldPath) -> Result<(), DecodeError> {
        (**self).decode(raw, path)
    }

    fn decode_field(
        &mut self,
        key: &str,
        raw: &RawValue,
        path: &mut FieldPath,
    ) -> Result<bool, DecodeError> {
        (**self).decode_field(key, raw, path)
    }
}

/// Construct a minified query string for the result shape `Q`.
///
/// With variables: `query($a:Int!$b:Boolean){...}`. Without variables the
/// bare selection set is emitted, which GraphQL treats as an anonymous
/// query.
pub fn build_query<Q: GraphQLType>(variables: &Variables) -> String {
    let mut out = String::new();
    if !variables.is_empty() {
        out.push_str("query(");
        variables.write_argument_clause(&mut out);
        out.push(')');
    }
    Q::build_selection(&mut out);
    out
}

/// Construct a minified mutation string for the result shape `M`.
///
/// The `mutation` keyword is always emitted, with or without variables —
/// unlike queries, mutations cannot be anonymous.
pub fn build_mutation<M: GraphQLType>(variables: &Variables) -> String {
    let mut out = String::from("mutation");
    if !variables.is_empty() {
        out.push('(');
        variables.write_argument_clause(&mut out);
        out.push(')');
    }
    M::build_selection(&mut out);
    out
}
