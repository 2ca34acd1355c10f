use serde::{Deserialize, Serialize};

/// A stored row: the identifier assigned by the repository together with the
/// entity data.
///
/// The data is flattened on serialization, so a country record reads as
/// `{"id": 1, "name": "Georgia", "code": "GE"}`.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<Id, T> {
    /// Identifier assigned on creation
    pub id: Id,
    /// The entity data
    #[serde(flatten)]
    pub data: T,
}

impl<Id, T> Record<Id, T> {
    /// Pair an identifier with its data.
    pub fn new(id: Id, data: T) -> Self {
        Self { id, data }
    }
}
