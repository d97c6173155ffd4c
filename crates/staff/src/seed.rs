//! Sample staff records loaded at store construction.

use chrono::NaiveDate;

use crate::member::{StaffFields, StaffStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// Initial staff collection shown on first launch.
pub fn seed_staff() -> Vec<StaffFields> {
    vec![
        StaffFields {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@company.com".to_string(),
            phone: "+1-555-0123".to_string(),
            position: "Senior Developer".to_string(),
            department: "Engineering".to_string(),
            hire_date: date(2023, 1, 15),
            salary: 95_000.0,
            status: StaffStatus::Active,
            manager: Some("Sarah Wilson".to_string()),
        },
        StaffFields {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane.smith@company.com".to_string(),
            phone: "+1-555-0124".to_string(),
            position: "Product Manager".to_string(),
            department: "Product".to_string(),
            hire_date: date(2023, 3, 20),
            salary: 110_000.0,
            status: StaffStatus::Active,
            manager: Some("Mike Johnson".to_string()),
        },
        StaffFields {
            first_name: "Mike".to_string(),
            last_name: "Johnson".to_string(),
            email: "mike.johnson@company.com".to_string(),
            phone: "+1-555-0125".to_string(),
            position: "Engineering Manager".to_string(),
            department: "Engineering".to_string(),
            hire_date: date(2022, 8, 10),
            salary: 130_000.0,
            status: StaffStatus::Active,
            manager: None,
        },
        StaffFields {
            first_name: "Sarah".to_string(),
            last_name: "Wilson".to_string(),
            email: "sarah.wilson@company.com".to_string(),
            phone: "+1-555-0126".to_string(),
            position: "CTO".to_string(),
            department: "Engineering".to_string(),
            hire_date: date(2021, 5, 1),
            salary: 180_000.0,
            status: StaffStatus::Active,
            manager: None,
        },
    ]
}
