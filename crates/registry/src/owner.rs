//! Owners: named people who may hold zero or more plots.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub type OwnerId = i64;

/// A person in the village registry. Names are unique; the store enforces
/// that at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
    pub created_at_ms: i64,
}

/// All owners, ordered by name as delivered by the startup fetch. Search
/// relies on this ordering: the first textual match wins.
#[derive(Resource, Default, Debug, Clone)]
pub struct OwnerDirectory(pub Vec<Owner>);
