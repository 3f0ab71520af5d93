//! Schema snapshot types for typegres.
//!
//! A snapshot is the JSON description of a database schema: tables with
//! columns, enumerated types, and foreign-key edges. Producing the snapshot
//! (connecting to a database and running an introspection query) happens
//! upstream; this crate only parses and exposes the structure.

mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Column, ForeignKey, SchemaDescription, Table};
