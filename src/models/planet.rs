use serde::{Deserialize, Serialize};

/// A single record in the seeded planet catalog.
///
/// Records are provisioned out-of-band and never written by this service.
/// `id` is the lookup key; uniqueness is not enforced at the storage layer
/// and the first match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub id: i32,
    pub description: String,
    pub image: String,
    pub velocity: String,
    pub distance: String,
}
