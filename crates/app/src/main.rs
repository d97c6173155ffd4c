//! Composition root: builds the three seeded entity stores at startup and
//! logs the dashboard summaries the pages would render.

use std::sync::Arc;

use anyhow::Result;

use backoffice_core::{ChangeListener, Clock, EntitySchema, Record, SystemClock};
use backoffice_inventory::{low_stock_items, seed_items, InventoryStore, ItemPatch};
use backoffice_staff::{seed_staff, StaffStore};
use backoffice_tasks::{seed_tasks, tasks_with_status, TaskPatch, TaskStatus, TaskStore};

/// Stand-in for the page re-render hook: logs every collection change.
struct ChangeLogger;

impl<S: EntitySchema> ChangeListener<S> for ChangeLogger {
    fn on_change(&self, records: &[Record<S>]) {
        tracing::debug!(kind = S::KIND, records = records.len(), "collection changed");
    }
}

fn main() -> Result<()> {
    backoffice_observability::init();

    // One store per entity kind, constructed once and passed explicitly;
    // session-scoped, no teardown.
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let mut inventory = InventoryStore::with_seed(clock.clone(), seed_items());
    let mut staff = StaffStore::with_seed(clock.clone(), seed_staff());
    let mut tasks = TaskStore::with_seed(clock, seed_tasks());

    inventory.subscribe(Arc::new(ChangeLogger));
    staff.subscribe(Arc::new(ChangeLogger));
    tasks.subscribe(Arc::new(ChangeLogger));

    // A short session: restock the low-stock item and pick up the pending task.
    let restock = low_stock_items(&inventory).first().map(|record| record.id());
    if let Some(id) = restock {
        inventory.update(id, ItemPatch::set_quantity(20));
    }

    let pick_up = tasks_with_status(&tasks, TaskStatus::Pending)
        .first()
        .map(|record| record.id());
    if let Some(id) = pick_up {
        tasks.update(
            id,
            TaskPatch {
                status: Some(TaskStatus::InProgress),
                ..TaskPatch::default()
            },
        );
    }

    let inventory_summary = serde_json::to_string(&backoffice_inventory::summary(&inventory))?;
    let staff_summary = serde_json::to_string(&backoffice_staff::summary(&staff))?;
    let task_summary = serde_json::to_string(&backoffice_tasks::summary(&tasks))?;

    tracing::info!(summary = %inventory_summary, "inventory dashboard");
    tracing::info!(summary = %staff_summary, "staff dashboard");
    tracing::info!(summary = %task_summary, "task board");

    Ok(())
}
