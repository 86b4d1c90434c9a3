use std::cmp::Ordering;

use crate::models::occasion::{Bucket, Dashboard, OccasionInstance};

/// Group upcoming instances into the dashboard horizons.
///
/// Instances without a day distance, or beyond 30 days, are dropped. Each
/// bucket is ordered by distance, then person name, then occasion type.
pub fn bucket(instances: Vec<OccasionInstance>) -> Dashboard {
    let mut dashboard = Dashboard::default();

    for instance in instances {
        let Some(bucket) = instance.days_from_reference.and_then(Bucket::for_days) else {
            continue;
        };
        dashboard.bucket_mut(bucket).push(instance);
    }

    for bucket in Bucket::ALL {
        dashboard.bucket_mut(bucket).sort_by(compare_for_bucket);
    }

    dashboard
}

fn compare_for_bucket(a: &OccasionInstance, b: &OccasionInstance) -> Ordering {
    a.days_from_reference
        .cmp(&b.days_from_reference)
        .then_with(|| a.person_name.cmp(&b.person_name))
        .then_with(|| a.occasion_type.cmp(&b.occasion_type))
        .then_with(|| a.related_person.cmp(&b.related_person))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::occasion::OccasionType;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn instance(name: &str, kind: OccasionType, days: i64) -> OccasionInstance {
        OccasionInstance {
            person_id: name.to_lowercase(),
            person_name: name.to_string(),
            occasion_type: kind,
            related_person: None,
            concrete_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            days_from_reference: Some(days),
            is_completed: false,
        }
    }

    #[test_case(0, Some(Bucket::Today) ; "zero days is today")]
    #[test_case(1, Some(Bucket::Tomorrow) ; "one day is tomorrow")]
    #[test_case(2, Some(Bucket::Next7Days) ; "two days is this week")]
    #[test_case(7, Some(Bucket::Next7Days) ; "seven days is this week")]
    #[test_case(8, Some(Bucket::Next30Days) ; "eight days is next thirty")]
    #[test_case(30, Some(Bucket::Next30Days) ; "thirty days is next thirty")]
    #[test_case(31, None ; "thirty one days is dropped")]
    #[test_case(-1, None ; "negative is dropped")]
    fn test_bucket_boundaries(days: i64, expected: Option<Bucket>) {
        let dashboard = bucket(vec![instance("Rama", OccasionType::Birthday, days)]);

        for candidate in Bucket::ALL {
            let expected_len = usize::from(expected == Some(candidate));
            assert_eq!(dashboard.bucket(candidate).len(), expected_len, "{:?}", candidate);
        }
    }

    #[test]
    fn test_search_results_without_distance_are_dropped() {
        let mut undated = instance("Rama", OccasionType::Birthday, 0);
        undated.days_from_reference = None;
        assert!(bucket(vec![undated]).is_empty());
    }

    #[test]
    fn test_bucket_ordering() {
        let dashboard = bucket(vec![
            instance("Venkatesh", OccasionType::Birthday, 5),
            instance("Anusuya", OccasionType::Anniversary, 5),
            instance("Anusuya", OccasionType::Birthday, 5),
            instance("Zarina", OccasionType::Birthday, 3),
        ]);

        let order: Vec<_> = dashboard
            .next_7_days
            .iter()
            .map(|i| (i.person_name.as_str(), i.occasion_type))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Zarina", OccasionType::Birthday),
                ("Anusuya", OccasionType::Birthday),
                ("Anusuya", OccasionType::Anniversary),
                ("Venkatesh", OccasionType::Birthday),
            ]
        );
    }
}
