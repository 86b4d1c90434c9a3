// Property-based tests for occasion materialization and completion toggling

use chrono::{Datelike, Local, NaiveDate};
use devotee_records::models::occasion::OccasionType;
use devotee_records::models::person::{Child, Person};
use devotee_records::services::occasion::OccasionService;
use devotee_records::utils::date::{
    all_occurrences_in_range, days_between, format_calendar_date, materialize,
    next_occurrence_on_or_after,
};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1950..2060i32, 1..=12u32, 1..=31u32).prop_filter_map("valid calendar date", |(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d)
    })
}

proptest! {
    /// Property: the next occurrence is never before the reference and never a year or more away
    #[test]
    fn prop_next_occurrence_within_a_year(source in any_date(), reference in any_date()) {
        let next = next_occurrence_on_or_after(source, reference);
        let days = days_between(reference, next);

        prop_assert!(days >= 0);
        prop_assert!(days <= 366);
        prop_assert_eq!(next, materialize(source, next.year()));
    }

    /// Property: a reference on the source's own month/day is zero days away
    #[test]
    fn prop_same_day_is_today(source in any_date(), year in 1950..2060i32) {
        let reference = materialize(source, year);
        prop_assert_eq!(next_occurrence_on_or_after(source, reference), reference);
    }

    /// Property: a range covering N whole calendar years yields exactly N occurrences
    #[test]
    fn prop_whole_years_yield_one_occurrence_each(
        source in any_date(),
        first_year in 1990..2040i32,
        span in 1..5i32,
    ) {
        let start = NaiveDate::from_ymd_opt(first_year, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(first_year + span - 1, 12, 31).unwrap();
        let dates = all_occurrences_in_range(source, start, end);

        prop_assert_eq!(dates.len(), span as usize);
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: every upcoming instance is on or after the reference date
    #[test]
    fn prop_upcoming_never_in_the_past(
        birth in any_date(),
        child_birth in any_date(),
        reference in any_date(),
    ) {
        let person = Person::new("1", "Sita", format_calendar_date(birth))
            .unwrap()
            .with_child(Child::new("Ravi", format_calendar_date(child_birth)));

        let instances = OccasionService::new().compute_upcoming(&[person], reference);
        prop_assert_eq!(instances.len(), 2);
        for instance in instances {
            prop_assert!(instance.concrete_date >= reference);
            prop_assert!(instance.days_from_reference.unwrap_or(-1) >= 0);
        }
    }

    /// Property: toggling the same occurrence twice restores the original log
    #[test]
    fn prop_double_toggle_is_identity(birth in any_date(), year in 2000..2040i32) {
        let service = OccasionService::new();
        let person = Person::new("1", "Sita", format_calendar_date(birth)).unwrap();
        let occurrence = format_calendar_date(materialize(birth, year));

        let once = service
            .toggle_completion_at(&person, OccasionType::Birthday, &occurrence, None, Local::now())
            .unwrap();
        prop_assert_eq!(once.completion_log.len(), 1);

        let twice = service
            .toggle_completion_at(&once, OccasionType::Birthday, &occurrence, None, Local::now())
            .unwrap();
        prop_assert_eq!(twice.completion_log, person.completion_log);
    }
}
