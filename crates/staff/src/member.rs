//! Staff member schema and derived views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use backoffice_core::{record_id_newtype, EntitySchema, EntityStore, Record, RecordId};

/// Staff member identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(pub RecordId);

record_id_newtype!(StaffId);

/// Employment status.
///
/// A plain settable field, not a governed state machine: any value may be set
/// at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaffStatus {
    Active,
    Inactive,
    OnLeave,
}

/// Schema fields of a staff member.
///
/// No uniqueness is enforced on `email`; duplicates are accepted silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub hire_date: NaiveDate,
    pub salary: f64,
    pub status: StaffStatus,
    pub manager: Option<String>,
}

/// Partial update of a staff member: every field optional.
///
/// `manager` is doubly optional: the outer level means "change it", the inner
/// level is the new value (including clearing it with `Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct StaffPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub salary: Option<f64>,
    pub status: Option<StaffStatus>,
    pub manager: Option<Option<String>>,
}

/// Schema marker for the staff store.
#[derive(Debug)]
pub enum Staff {}

impl EntitySchema for Staff {
    type Id = StaffId;
    type Fields = StaffFields;
    type Patch = StaffPatch;

    const KIND: &'static str = "staff_member";

    fn apply_patch(fields: &mut StaffFields, patch: StaffPatch) {
        if let Some(first_name) = patch.first_name {
            fields.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            fields.last_name = last_name;
        }
        if let Some(email) = patch.email {
            fields.email = email;
        }
        if let Some(phone) = patch.phone {
            fields.phone = phone;
        }
        if let Some(position) = patch.position {
            fields.position = position;
        }
        if let Some(department) = patch.department {
            fields.department = department;
        }
        if let Some(hire_date) = patch.hire_date {
            fields.hire_date = hire_date;
        }
        if let Some(salary) = patch.salary {
            fields.salary = salary;
        }
        if let Some(status) = patch.status {
            fields.status = status;
        }
        if let Some(manager) = patch.manager {
            fields.manager = manager;
        }
    }
}

pub type StaffStore = EntityStore<Staff>;
pub type StaffRecord = Record<Staff>;

/// Members with `Active` status, in insertion order.
pub fn active_staff(store: &StaffStore) -> Vec<StaffRecord> {
    store.query(|record| record.fields().status == StaffStatus::Active)
}

/// Members of the given department, in insertion order.
pub fn staff_in_department(store: &StaffStore, department: &str) -> Vec<StaffRecord> {
    store.query(|record| record.fields().department == department)
}

/// Members holding the given position, in insertion order.
pub fn staff_with_position(store: &StaffStore, position: &str) -> Vec<StaffRecord> {
    store.query(|record| record.fields().position == position)
}

/// Mean salary across `staff`; 0.0 for an empty collection, never NaN.
pub fn average_salary(staff: &[StaffRecord]) -> f64 {
    if staff.is_empty() {
        return 0.0;
    }
    let total: f64 = staff.iter().map(|record| record.fields().salary).sum();
    total / staff.len() as f64
}

/// Number of distinct departments present.
pub fn distinct_department_count(staff: &[StaffRecord]) -> usize {
    staff
        .iter()
        .map(|record| record.fields().department.as_str())
        .collect::<std::collections::BTreeSet<_>>()
        .len()
}

/// Dashboard summary of the staff collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffSummary {
    pub total_staff: usize,
    pub active_staff: usize,
    pub departments: usize,
    pub average_salary: f64,
}

pub fn summary(store: &StaffStore) -> StaffSummary {
    StaffSummary {
        total_staff: store.len(),
        active_staff: active_staff(store).len(),
        departments: distinct_department_count(store.records()),
        average_salary: average_salary(store.records()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_staff;

    use std::sync::Arc;

    use backoffice_core::SystemClock;

    fn seeded_store() -> StaffStore {
        StaffStore::with_seed(Arc::new(SystemClock), seed_staff())
    }

    #[test]
    fn average_salary_over_the_seed_and_after_a_delete() {
        let mut store = seeded_store();

        // 95000 + 110000 + 130000 + 180000 over 4.
        assert!((average_salary(store.records()) - 128_750.0).abs() < 1e-9);

        let cto = store
            .records()
            .iter()
            .find(|record| record.fields().salary == 180_000.0)
            .map(|record| record.id())
            .unwrap();
        store.delete(cto);

        assert!((average_salary(store.records()) - 335_000.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn average_salary_of_an_empty_collection_is_zero() {
        let store = StaffStore::new(Arc::new(SystemClock));
        assert_eq!(average_salary(store.records()), 0.0);
    }

    #[test]
    fn department_and_status_views_cover_the_seed() {
        let mut store = seeded_store();

        assert_eq!(staff_in_department(&store, "Engineering").len(), 3);
        assert_eq!(staff_in_department(&store, "Product").len(), 1);
        assert_eq!(staff_with_position(&store, "CTO").len(), 1);
        assert_eq!(active_staff(&store).len(), 4);

        let id = store.records()[0].id();
        store.update(
            id,
            StaffPatch {
                status: Some(StaffStatus::OnLeave),
                ..StaffPatch::default()
            },
        );
        assert_eq!(active_staff(&store).len(), 3);
    }

    #[test]
    fn clearing_the_manager_uses_the_double_option() {
        let mut store = seeded_store();
        let id = store.records()[0].id();
        assert!(store.get(id).unwrap().fields().manager.is_some());

        store.update(
            id,
            StaffPatch {
                manager: Some(None),
                ..StaffPatch::default()
            },
        );
        assert!(store.get(id).unwrap().fields().manager.is_none());

        // An absent manager field leaves the value untouched.
        store.update(
            id,
            StaffPatch {
                salary: Some(99_000.0),
                ..StaffPatch::default()
            },
        );
        assert!(store.get(id).unwrap().fields().manager.is_none());
    }

    #[test]
    fn summary_reflects_the_seed() {
        let store = seeded_store();
        let summary = summary(&store);

        assert_eq!(summary.total_staff, 4);
        assert_eq!(summary.active_staff, 4);
        assert_eq!(summary.departments, 2);
        assert!((summary.average_salary - 128_750.0).abs() < 1e-9);
    }
}
