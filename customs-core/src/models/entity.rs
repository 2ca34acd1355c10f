use super::ValidationError;
use serde::{Serialize, de::DeserializeOwned};
use std::{fmt::Display, hash::Hash, str::FromStr};

/// Common behavior of every stored entity.
///
/// An entity is the data of one row, without its identifier. The identifier
/// type is fixed per entity so that repositories and routes can be written
/// once, generically, and still hand out typed ids.
pub trait Entity: Clone + Send + Sync + Unpin + Serialize + DeserializeOwned + 'static {
    /// The typed identifier of this entity's rows
    type Id: Copy
        + Eq
        + Hash
        + Display
        + FromStr
        + From<i64>
        + Into<i64>
        + Send
        + Sync
        + Unpin
        + Serialize
        + DeserializeOwned
        + 'static;

    /// Lowercase singular name used in messages, e.g. `"customs office"`
    const NAME: &'static str;

    /// Trim text fields, drop blank optional values and upper-case codes.
    fn normalize(&mut self) {}

    /// Check presence and range constraints.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Normalize, then validate.
    fn prepare(mut self) -> Result<Self, ValidationError> {
        self.normalize();
        self.validate()?;
        Ok(self)
    }
}
