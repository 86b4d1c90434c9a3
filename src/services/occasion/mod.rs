//! Recurring occasion engine.
//!
//! Derives birthdays, anniversaries, spouse and child birthdays from person
//! records, materializes them against a reference date or a date window, and
//! tracks which concrete occurrences have been completed.
//!
//! The string-typed methods at the bottom of this file are the boundary used
//! by the CLI and other callers; everything underneath works on validated
//! `NaiveDate` values.

use chrono::{DateTime, Local};

use crate::models::occasion::{Dashboard, OccasionError, OccasionInstance, OccasionKey, OccasionType};
use crate::models::person::Person;
use crate::models::settings::{Settings, DEFAULT_SPOUSE_PLACEHOLDER};
use crate::utils::date::parse_calendar_date;

pub mod bucketing;
pub mod engine;
pub mod extractor;
pub mod ledger;
pub mod range_search;

pub use bucketing::bucket;
pub use engine::sort_for_display;
pub use ledger::CompletionLedger;

/// Stateless occasion computations over snapshots of person records.
#[derive(Debug, Clone)]
pub struct OccasionService {
    spouse_placeholder: String,
}

impl Default for OccasionService {
    fn default() -> Self {
        Self::new()
    }
}

impl OccasionService {
    pub fn new() -> Self {
        Self::with_spouse_placeholder(DEFAULT_SPOUSE_PLACEHOLDER)
    }

    pub fn with_spouse_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            spouse_placeholder: placeholder.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_spouse_placeholder(settings.spouse_placeholder.clone())
    }

    /// Today / tomorrow / this week / next 30 days, relative to `reference`.
    pub fn get_dashboard(&self, people: &[Person], reference: &str) -> Result<Dashboard, OccasionError> {
        let reference = parse_calendar_date(reference)
            .map_err(|_| OccasionError::InvalidReferenceDate(reference.to_string()))?;
        Ok(bucket(self.compute_upcoming(people, reference)))
    }

    /// Dashboard relative to the local calendar day.
    pub fn get_dashboard_for_today(&self, people: &[Person]) -> Dashboard {
        bucket(self.compute_upcoming(people, Local::now().date_naive()))
    }

    /// Occasions whose month/day equals `date`, pinned to `date`'s year.
    pub fn search_single_day(&self, people: &[Person], date: &str) -> Result<Vec<OccasionInstance>, OccasionError> {
        let day = parse_calendar_date(date)
            .map_err(|_| OccasionError::InvalidReferenceDate(date.to_string()))?;
        Ok(self.search_on_day(people, day))
    }

    /// Every occurrence inside `[start, end]`. Bounds are never swapped.
    pub fn search_range(
        &self,
        people: &[Person],
        start: &str,
        end: &str,
    ) -> Result<Vec<OccasionInstance>, OccasionError> {
        let invalid = || OccasionError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        };
        let start_date = parse_calendar_date(start).map_err(|_| invalid())?;
        let end_date = parse_calendar_date(end).map_err(|_| invalid())?;
        self.search_between(people, start_date, end_date)
    }

    /// Flip completion of one occurrence and return the updated person for
    /// the caller to persist. The input snapshot is left untouched.
    ///
    /// Spouse and child birthdays must name the related person.
    pub fn toggle_completion(
        &self,
        person: &Person,
        occasion_type: OccasionType,
        concrete_date: &str,
        related_person: Option<&str>,
    ) -> Result<Person, OccasionError> {
        self.toggle_completion_at(person, occasion_type, concrete_date, related_person, Local::now())
    }

    /// Same as [`toggle_completion`](Self::toggle_completion) with an explicit timestamp.
    pub fn toggle_completion_at(
        &self,
        person: &Person,
        occasion_type: OccasionType,
        concrete_date: &str,
        related_person: Option<&str>,
        completed_at: DateTime<Local>,
    ) -> Result<Person, OccasionError> {
        let date = parse_calendar_date(concrete_date)
            .map_err(|_| OccasionError::InvalidReferenceDate(concrete_date.to_string()))?;
        // spouse and child occurrences are only identifiable by their label
        let unlabeled = related_person.map_or(true, |name| name.trim().is_empty());
        if occasion_type.carries_related_person() && unlabeled {
            return Err(OccasionError::MissingRelatedPerson(occasion_type));
        }
        let key = OccasionKey::new(occasion_type, date, related_person);

        let mut ledger = CompletionLedger::new(person.completion_log.clone());
        let completed = ledger.toggle(&key, completed_at);
        log::info!(
            "{} {} of person {} on {}",
            if completed { "Completed" } else { "Reset" },
            occasion_type,
            person.id,
            concrete_date
        );

        let mut updated = person.clone();
        updated.completion_log = ledger.into_records();
        Ok(updated)
    }
}
