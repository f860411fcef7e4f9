//! Opaque identifier newtypes.

mod id_macro;

use serde::{Deserialize, Serialize};

/// Unique identifier of a catalog project.
///
/// Assigned once when the record enters the catalog and immutable
/// thereafter. Backed by a UUIDv4 so ids never collide within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(String);

id_macro::impl_id!(ProjectId);
