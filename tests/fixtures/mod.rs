// Test fixtures - reusable devotee records
// Provides consistent test data across all test files
#![allow(dead_code)]

use chrono::NaiveDate;
use devotee_records::models::person::{Child, Person};

/// Reference dates used by the scenarios below
pub mod dates {
    use super::*;

    /// Reference date for the dashboard scenario
    pub fn jan_15_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    /// Feb 28 of a non-leap year, where Feb 29 birthdays are observed
    pub fn feb_28_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
    }
}

/// Sample devotee records
pub mod people {
    use super::*;

    /// Married devotee with one child, every occasion within 30 days of Jan 15.
    pub fn rama_krishna() -> Person {
        Person::new("1", "P. Rama Krishna / పి. రామ కృష్ణ", "1980-01-15")
            .unwrap()
            .with_phone("9848012345")
            .with_gothram("Bharadwaja")
            .with_marriage_date("2005-01-16")
            .with_spouse(Some("Lakshmi"), "1984-01-20")
            .with_child(Child::new("Anil", "2010-02-10"))
    }

    /// Devotee whose twins share a birthday on Jan 16.
    pub fn suresh_with_twins() -> Person {
        Person::new("2", "S. Suresh", "1990-05-05")
            .unwrap()
            .with_phone("9000011111")
            .with_gothram("Kausika")
            .with_child(Child::new("Ravi", "2015-01-16"))
            .with_child(Child::new("Ramu", "2015-01-16"))
    }

    /// Devotee born on a leap day.
    pub fn leap_day() -> Person {
        Person::new("3", "K. Padma", "2000-02-29")
            .unwrap()
            .with_gothram("Kausika")
    }

    pub fn all() -> Vec<Person> {
        vec![rama_krishna(), suresh_with_twins(), leap_day()]
    }
}
