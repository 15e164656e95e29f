//! Queryable hierarchical documents for the locale compiler.
//!
//! Documents are parsed once into a flat node arena ([`Document`]) and
//! queried with a small path language ([`Query`]). Where documents come
//! from is abstracted by [`MarkupSource`], with a filesystem and an
//! in-memory implementation.

mod document;
mod error;
mod query;
mod source;

pub use document::{Document, Node, NodeId};
pub use error::MarkupError;
pub use query::{Query, Step};
pub use source::{FsSource, MarkupSource, MemorySource};
