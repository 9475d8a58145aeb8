#![recursion_limit = "256"]

//! octoql is a typed client for the GitHub GraphQL API v4.
//!
//! Queries are plain Rust structs deriving [`GraphQLType`]: the struct shape
//! is walked to synthesize the GraphQL query string, and the response is
//! decoded back into the same struct. See the README for a walkthrough.

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod client;
pub mod decode;
pub mod enums;
pub mod error;
pub mod ident;
pub mod input;
pub mod query;
pub mod scalar;
pub mod variables;

// Re-export key types at crate root for convenience.
pub use client::{Client, GITHUB_GRAPHQL_URL};
pub use decode::from_json;
pub use error::{DecodeError, ErrorLocation, GraphQLError, OctoqlError};
pub use input::InputObject;
pub use octoql_derive::GraphQLType;
pub use query::{build_mutation, build_query, GraphQLType};
pub use scalar::{GitObjectId, GitTimestamp, Html, Id, Uri, X509Certificate};
pub use variables::{IntoScalar, Scalar, ScalarType, Variable, Variables};
