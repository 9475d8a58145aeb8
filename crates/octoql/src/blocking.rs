//! Blocking (synchronous) GitHub GraphQL client.
//!
//! This module provides a synchronous wrapper around the async
//! [`Client`](crate::Client). Enable it with the `blocking` feature flag:
//!
//! ```toml
//! [dependencies]
//! octoql = { version = "...", features = ["blocking"] }
//! ```
//!
//! The blocking client creates an internal tokio runtime and runs each
//! operation to completion synchronously. It mirrors the async client's
//! `query`/`mutate` surface.
//!
//! # Example
//!
//! ```no_run
//! use octoql::blocking::Client;
//! use octoql::{GraphQLType, Variables};
//!
//! #[derive(Default, GraphQLType)]
//! struct Query {
//!     viewer: Viewer,
//! }
//!
//! #[derive(Default, GraphQLType)]
//! struct Viewer {
//!     login: String,
//! }
//!
//! let client = Client::from_token("ghp_...").unwrap();
//! let mut query = Query::default();
//! client.query(&mut query, Variables::new()).unwrap();
//! println!("logged in as {}", query.viewer.login);
//! ```

use crate::error::OctoqlError;
use crate::input::InputObject;
use crate::query::GraphQLType;
use crate::variables::Variables;

/// A synchronous GitHub GraphQL client.
///
/// Wraps the async [`crate::Client`] with an internal tokio runtime. Every
/// method blocks the calling thread until the operation completes.
pub struct Client {
    inner: crate::Client,
    rt: tokio::runtime::Runtime,
}

impl Client {
    /// Wrap an existing HTTP client, pointed at the production endpoint.
    pub fn new(http: reqwest::Client) -> Result<Self, OctoqlError> {
        Ok(Self {
            inner: crate::Client::new(http),
            rt: build_runtime()?,
        })
    }

    /// Wrap an existing HTTP client, pointed at a custom endpoint.
    pub fn with_endpoint(
        http: reqwest::Client,
        endpoint: impl Into<String>,
    ) -> Result<Self, OctoqlError> {
        Ok(Self {
            inner: crate::Client::with_endpoint(http, endpoint),
            rt: build_runtime()?,
        })
    }

    /// Build a blocking client authenticated with a personal access token.
    pub fn from_token(token: &str) -> Result<Self, OctoqlError> {
        Ok(Self {
            inner: crate::Client::from_token(token)?,
            rt: build_runtime()?,
        })
    }

    /// Execute a query synchronously.
    ///
    /// This is the blocking equivalent of [`crate::Client::query`].
    pub fn query<Q: GraphQLType>(
        &self,
        query: &mut Q,
        variables: Variables,
    ) -> Result<(), OctoqlError> {
        self.rt.block_on(self.inner.query(query, variables))
    }

    /// Execute a mutation synchronously.
    ///
    /// This is the blocking equivalent of [`crate::Client::mutate`].
    pub fn mutate<M, I>(
        &self,
        mutation: &mut M,
        input: &I,
        variables: Variables,
    ) -> Result<(), OctoqlError>
    where
        M: GraphQLType,
        I: InputObject,
    {
        self.rt
            .block_on(self.inner.mutate(mutation, input, variables))
    }

    /// Execute a mutation with explicitly assembled variables, synchronously.
    ///
    /// This is the blocking equivalent of [`crate::Client::mutate_with`].
    pub fn mutate_with<M: GraphQLType>(
        &self,
        mutation: &mut M,
        variables: Variables,
    ) -> Result<(), OctoqlError> {
        self.rt.block_on(self.inner.mutate_with(mutation, variables))
    }
}

fn build_runtime() -> Result<tokio::runtime::Runtime, OctoqlError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| OctoqlError::Internal(format!("failed to create tokio runtime: {}", e)))
}
