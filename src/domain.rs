//! Domain models for storage-array inventory.
//!
//! This module contains the typed record family built from a parsed markup
//! tree, and the hand-built serializer producing the API wire text.

mod config;
pub use config::Config;

/// Collection wrapper rendering an ordered result set.
pub mod collection;
pub use collection::Collection;

/// Object identifier type and validation.
pub mod oid;
pub use oid::{Error as OidError, Oid};

/// Name/value property leaf and fragment rendering.
pub mod property;
pub use property::Property;

/// The six inventory record kinds and their classification.
pub mod record;
pub use record::{
    Host, HostChild, HostGroup, HostGroupChild, Initiator, Kind, Record, Redundancy, Status,
    System, SystemChild,
};
