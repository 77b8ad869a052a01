//! Typed storage-array inventory records with API-text rendering
//!
//! Records are built from a generic markup tree (elements with attributes and
//! child elements) and rendered to a JSON-like wire text. Every record type
//! implements [`std::fmt::Display`]; `to_string()` is the render entry point.

pub mod domain;
pub use domain::{Collection, Config, Kind, Oid, Property, Record};

/// Markup-tree input boundary and record building.
pub mod markup;
pub use markup::{BuildError, Builder, Element};
