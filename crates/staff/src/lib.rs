//! Staff entity kind: member schema, derived views, and seed data.

pub mod member;
pub mod seed;

pub use member::{
    active_staff, average_salary, distinct_department_count, staff_in_department,
    staff_with_position, summary, Staff, StaffFields, StaffId, StaffPatch, StaffRecord,
    StaffStatus, StaffStore, StaffSummary,
};
pub use seed::seed_staff;
