//! Record identifiers.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;

/// Opaque unique identifier of a record within a store.
///
/// Entity crates wrap this in their own newtype (e.g. `ItemId`) so identifiers
/// from different stores cannot be mixed up at compile time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Create a fresh identifier.
    ///
    /// Uses UUIDv7 (time-ordered), so id order agrees with insertion order.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for RecordId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<RecordId> for Uuid {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl FromStr for RecordId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| StoreError::InvalidId(format!("RecordId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Implements the newtype boilerplate for a strongly-typed record id.
///
/// Entity crates declare their id as a tuple struct over [`RecordId`] (with
/// whatever derives they need) and invoke this for `Display` and the
/// [`RecordId`] conversions the store requires.
#[macro_export]
macro_rules! record_id_newtype {
    ($t:ty) => {
        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$crate::RecordId> for $t {
            fn from(value: $crate::RecordId) -> Self {
                Self(value)
            }
        }

        impl From<$t> for $crate::RecordId {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    struct WidgetId(RecordId);

    crate::record_id_newtype!(WidgetId);

    #[test]
    fn newtype_macro_wires_display_and_conversions() {
        let inner = RecordId::new();
        let id = WidgetId::from(inner);

        assert_eq!(id.to_string(), inner.to_string());
        assert_eq!(RecordId::from(id), inner);
    }
}
