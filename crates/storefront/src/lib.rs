//! Typed access to the Storefront GraphQL API.
//!
//! The `types` module is generated by `sfg` from the introspection schema
//! under `schema/` and should match [`API_VERSION`]. Queries are pre-written
//! GraphQL documents loaded with [`load_query`] and executed with [`Client`];
//! response bodies decode into [`Set`] around the generated root types.

pub mod client;
pub mod pagination;
pub mod query;
pub mod types;

pub use client::{Client, ClientError, Set};
pub use pagination::{Connection, Edge};
pub use query::{QueryError, load_query};

/// The Storefront API version. This value should match that of the generated
/// types.
pub const API_VERSION: &str = "2022-01";
