//! TypeScript declaration generation for schema snapshots.
//!
//! Two collaborating pieces: the [`Formatter`], a line-oriented builder that
//! owns indentation and newline bookkeeping, and the [`Generator`], which
//! maps a snapshot into declarations and drives the formatter. Data flows one
//! way: snapshot + config -> declarations -> text. Generation is a pure
//! function of its inputs and never fails; unusual input degrades into
//! omitted or dangling output rather than an error.

mod config;
mod decl;
mod formatter;
mod generator;
mod indent;
mod naming;

pub use config::{ColumnTransform, GeneratorConfig, RelationMode};
pub use decl::{EnumDecl, Field, Link, RecordDecl, RelationKind, UnionDecl};
pub use formatter::Formatter;
pub use generator::{Declarations, Generator};
pub use indent::Indent;
pub use naming::{camel_case, pascal_case, pluralize, remove_id, snake_case};
