use chrono::NaiveDate;

use super::ledger::is_completed;
use super::OccasionService;
use crate::models::occasion::{OccasionInstance, OccasionKey, OccasionSource};
use crate::models::person::Person;
use crate::utils::date::{days_between, next_occurrence_on_or_after};

impl OccasionService {
    /// Next occurrence (on or after `reference`) of every occasion of every
    /// person, with completion looked up in each person's own log.
    ///
    /// One instance per source; the result is unsorted.
    pub fn compute_upcoming(&self, people: &[Person], reference: NaiveDate) -> Vec<OccasionInstance> {
        let mut instances = Vec::new();

        for person in people {
            for source in self.extract(person) {
                let concrete_date = next_occurrence_on_or_after(source.source_date, reference);
                let mut instance = materialize_instance(person, source, concrete_date);
                instance.days_from_reference = Some(days_between(reference, concrete_date));
                instances.push(instance);
            }
        }

        log::debug!(
            "Computed {} upcoming occasions for {} people as of {}",
            instances.len(),
            people.len(),
            reference
        );

        instances
    }
}

/// Pin `source` to `concrete_date` and attach its completion state.
pub(super) fn materialize_instance(
    person: &Person,
    source: OccasionSource,
    concrete_date: NaiveDate,
) -> OccasionInstance {
    let key = OccasionKey::new(
        source.occasion_type,
        concrete_date,
        source.related_person.as_deref(),
    );

    OccasionInstance {
        is_completed: is_completed(&person.completion_log, &key),
        person_id: source.person_id,
        person_name: person.full_name.clone(),
        occasion_type: source.occasion_type,
        related_person: source.related_person,
        concrete_date,
        days_from_reference: None,
    }
}

/// Stable display order for upcoming lists: nearest first, then person id.
pub fn sort_for_display(instances: &mut [OccasionInstance]) {
    instances.sort_by(|a, b| {
        a.days_from_reference
            .cmp(&b.days_from_reference)
            .then_with(|| a.person_id.cmp(&b.person_id))
    });
}
