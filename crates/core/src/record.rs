//! Records and entity schemas.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::id::RecordId;

/// Declaration of one entity kind managed by an [`EntityStore`].
///
/// A schema ties together the strongly-typed record id, the caller-supplied
/// field set, and the partial-update patch type. Implementors are zero-sized
/// markers; all data lives in `Fields`.
///
/// [`EntityStore`]: crate::store::EntityStore
pub trait EntitySchema: Sized + 'static {
    /// Strongly-typed record identifier (a newtype over [`RecordId`]).
    type Id: Copy
        + Eq
        + core::hash::Hash
        + core::fmt::Debug
        + core::fmt::Display
        + From<RecordId>
        + Into<RecordId>;

    /// Caller-supplied schema fields (everything except the system fields).
    type Fields: Clone + core::fmt::Debug;

    /// Partial update: every schema field optional, applied field by field.
    type Patch: core::fmt::Debug;

    /// Stable kind name, used in log events.
    const KIND: &'static str;

    /// Shallow-merge `patch` over `fields`.
    ///
    /// Fields absent from the patch must be left untouched.
    fn apply_patch(fields: &mut Self::Fields, patch: Self::Patch);
}

/// One managed record: system fields plus schema fields.
///
/// System fields are stamped by the store and read-only from the outside:
/// `id` never changes, `created_at` is fixed at creation, `updated_at` is
/// restamped on every mutation. `created_at <= updated_at` always holds.
///
/// Serializes flat (schema fields alongside the system fields), matching the
/// shape consumers render.
#[derive(Serialize)]
#[serde(bound(serialize = "S::Id: Serialize, S::Fields: Serialize"))]
pub struct Record<S: EntitySchema> {
    id: S::Id,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(flatten)]
    fields: S::Fields,
}

impl<S: EntitySchema> Record<S> {
    pub(crate) fn new(id: S::Id, stamped_at: DateTime<Utc>, fields: S::Fields) -> Self {
        Self {
            id,
            created_at: stamped_at,
            updated_at: stamped_at,
            fields,
        }
    }

    pub fn id(&self) -> S::Id {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn fields(&self) -> &S::Fields {
        &self.fields
    }

    pub(crate) fn apply(&mut self, patch: S::Patch, stamped_at: DateTime<Utc>) {
        S::apply_patch(&mut self.fields, patch);
        self.updated_at = stamped_at;
    }
}

impl<S: EntitySchema> Clone for Record<S> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            fields: self.fields.clone(),
        }
    }
}

impl<S: EntitySchema> core::fmt::Debug for Record<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Record")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("fields", &self.fields)
            .finish()
    }
}

impl<S: EntitySchema> PartialEq for Record<S>
where
    S::Fields: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.created_at == other.created_at
            && self.updated_at == other.updated_at
            && self.fields == other.fields
    }
}
