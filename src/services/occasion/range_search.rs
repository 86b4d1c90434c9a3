use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};

use super::engine::materialize_instance;
use super::OccasionService;
use crate::models::occasion::{OccasionError, OccasionInstance};
use crate::models::person::Person;
use crate::utils::date::{all_occurrences_in_range, format_calendar_date, materialize};

impl OccasionService {
    /// Occasions falling on `day`, pinned to `day`'s own year.
    ///
    /// A source matches when its occurrence in that year lands on `day`, so a
    /// Feb 29 source shows up on Feb 28 of a non-leap year. The result equals
    /// `search_between(people, day, day)`.
    pub fn search_on_day(&self, people: &[Person], day: NaiveDate) -> Vec<OccasionInstance> {
        let mut results = Vec::new();

        for person in people {
            for source in self.extract(person) {
                if materialize(source.source_date, day.year()) == day {
                    results.push(materialize_instance(person, source, day));
                }
            }
        }

        results.sort_by(compare_by_date);
        log::debug!("Found {} occasions on {}", results.len(), day);
        results
    }

    /// Every yearly occurrence of every occasion inside `[start, end]`.
    ///
    /// Each occurrence carries its own completion state, so the same birthday
    /// in two different years can be completed independently.
    pub fn search_between(
        &self,
        people: &[Person],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<OccasionInstance>, OccasionError> {
        if start > end {
            return Err(OccasionError::InvalidRange {
                start: format_calendar_date(start),
                end: format_calendar_date(end),
            });
        }

        let mut results = Vec::new();

        for person in people {
            for source in self.extract(person) {
                for concrete_date in all_occurrences_in_range(source.source_date, start, end) {
                    results.push(materialize_instance(person, source.clone(), concrete_date));
                }
            }
        }

        results.sort_by(compare_by_date);
        log::debug!(
            "Found {} occasions between {} and {}",
            results.len(),
            start,
            end
        );
        Ok(results)
    }
}

fn compare_by_date(a: &OccasionInstance, b: &OccasionInstance) -> Ordering {
    a.concrete_date
        .cmp(&b.concrete_date)
        .then_with(|| a.person_name.cmp(&b.person_name))
        .then_with(|| a.occasion_type.cmp(&b.occasion_type))
        .then_with(|| a.related_person.cmp(&b.related_person))
}
