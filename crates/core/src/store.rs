//! The generic entity store.

use std::sync::Arc;

use crate::clock::Clock;
use crate::error::{StoreError, StoreResult};
use crate::record::{EntitySchema, Record};

/// Consumer notified after every mutation.
///
/// Notification is synchronous and total: listeners receive the whole new
/// collection snapshot, not a diff, before the mutating call returns.
pub trait ChangeListener<S: EntitySchema> {
    fn on_change(&self, records: &[Record<S>]);
}

/// In-memory, insertion-ordered collection of records of one schema.
///
/// The application constructs one store per entity kind at startup and passes
/// references to consumers explicitly; there is no ambient singleton.
///
/// The collection is held behind an `Arc` and replaced wholesale on each
/// mutation (copy-on-write), so snapshots taken before a mutation keep
/// observing the prior value and iteration is never invalidated.
///
/// Single-writer by construction: all mutating operations take `&mut self`
/// and run to completion synchronously, so no locking is involved.
pub struct EntityStore<S: EntitySchema> {
    records: Arc<Vec<Record<S>>>,
    clock: Arc<dyn Clock>,
    listeners: Vec<Arc<dyn ChangeListener<S>>>,
}

impl<S: EntitySchema> EntityStore<S> {
    /// Create an empty store.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Arc::new(Vec::new()),
            clock,
            listeners: Vec::new(),
        }
    }

    /// Create a store pre-populated with seed records.
    ///
    /// Seed records are stamped through the clock at construction and are
    /// otherwise identical in shape to user-created records.
    pub fn with_seed(clock: Arc<dyn Clock>, seed: impl IntoIterator<Item = S::Fields>) -> Self {
        let mut store = Self::new(clock);
        for fields in seed {
            store.add(fields);
        }
        store
    }

    /// Register a change listener.
    ///
    /// Listeners are invoked in subscription order on every subsequent
    /// mutation.
    pub fn subscribe(&mut self, listener: Arc<dyn ChangeListener<S>>) {
        self.listeners.push(listener);
    }

    /// Append a new record built from `fields`, returning its id.
    ///
    /// System fields are stamped here: a fresh unique id, and
    /// `created_at == updated_at == clock.now()`. Never fails; no uniqueness
    /// constraints are enforced on schema fields (duplicate SKUs/emails are
    /// accepted silently).
    pub fn add(&mut self, fields: S::Fields) -> S::Id {
        let id = S::Id::from(crate::id::RecordId::new());
        let record = Record::new(id, self.clock.now(), fields);

        let mut next = self.records.as_ref().clone();
        next.push(record);
        self.commit(next);

        tracing::debug!(kind = S::KIND, id = %id, total = self.records.len(), "record added");
        id
    }

    /// Merge `patch` into the record with `id` and restamp `updated_at`.
    ///
    /// Unknown id is a silent no-op; this is a documented contract of the
    /// lenient surface, not an accident. Use [`EntityStore::try_update`] to
    /// observe the miss.
    pub fn update(&mut self, id: S::Id, patch: S::Patch) {
        if self.try_update(id, patch).is_err() {
            tracing::debug!(kind = S::KIND, id = %id, "update for unknown id ignored");
        }
    }

    /// Strict variant of [`EntityStore::update`]: errors on unknown id.
    pub fn try_update(&mut self, id: S::Id, patch: S::Patch) -> StoreResult<()> {
        let Some(index) = self.position(id) else {
            return Err(StoreError::NotFound(id.into()));
        };

        let mut next = self.records.as_ref().clone();
        next[index].apply(patch, self.clock.now());
        self.commit(next);

        tracing::debug!(kind = S::KIND, id = %id, "record updated");
        Ok(())
    }

    /// Remove the record with `id`.
    ///
    /// Deletion is permanent and immediate. Unknown id is a silent no-op, so
    /// deleting twice has the same observable effect as deleting once.
    pub fn delete(&mut self, id: S::Id) {
        if self.try_delete(id).is_err() {
            tracing::debug!(kind = S::KIND, id = %id, "delete for unknown id ignored");
        }
    }

    /// Strict variant of [`EntityStore::delete`]: errors on unknown id.
    pub fn try_delete(&mut self, id: S::Id) -> StoreResult<()> {
        if self.position(id).is_none() {
            return Err(StoreError::NotFound(id.into()));
        }

        let next: Vec<Record<S>> = self
            .records
            .iter()
            .filter(|record| record.id() != id)
            .cloned()
            .collect();
        self.commit(next);

        tracing::debug!(kind = S::KIND, id = %id, total = self.records.len(), "record deleted");
        Ok(())
    }

    /// Look up one record by id.
    pub fn get(&self, id: S::Id) -> Option<&Record<S>> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// All records matching `predicate`, in insertion order.
    pub fn query(&self, predicate: impl Fn(&Record<S>) -> bool) -> Vec<Record<S>> {
        self.records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// The current collection value.
    ///
    /// The returned snapshot is immutable and unaffected by later mutations.
    pub fn snapshot(&self) -> Arc<Vec<Record<S>>> {
        Arc::clone(&self.records)
    }

    /// Borrow the current records, in insertion order.
    pub fn records(&self) -> &[Record<S>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: S::Id) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Swap in the new collection value and notify all listeners.
    fn commit(&mut self, next: Vec<Record<S>>) {
        self.records = Arc::new(next);
        for listener in &self.listeners {
            listener.on_change(&self.records);
        }
    }
}

impl<S: EntitySchema> core::fmt::Debug for EntityStore<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EntityStore")
            .field("kind", &S::KIND)
            .field("records", &self.records.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
