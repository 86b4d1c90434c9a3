//! Occasion model.
//!
//! An occasion is a yearly event tied to a stored date on a person record:
//! their birthday, wedding anniversary, spouse's birthday or a child's
//! birthday. Sources are derived from the record on every query; instances
//! are sources pinned to a concrete calendar date with completion attached.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

mod error;

pub use error::OccasionError;

/// Kind of recurring occasion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OccasionType {
    Birthday,
    Anniversary,
    SpouseBirthday,
    ChildBirthday,
}

impl OccasionType {
    pub const ALL: [OccasionType; 4] = [
        OccasionType::Birthday,
        OccasionType::Anniversary,
        OccasionType::SpouseBirthday,
        OccasionType::ChildBirthday,
    ];

    /// Whether occurrences of this type are identified by a related person.
    pub fn carries_related_person(self) -> bool {
        matches!(self, OccasionType::SpouseBirthday | OccasionType::ChildBirthday)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OccasionType::Birthday => "Birthday",
            OccasionType::Anniversary => "Anniversary",
            OccasionType::SpouseBirthday => "SpouseBirthday",
            OccasionType::ChildBirthday => "ChildBirthday",
        }
    }
}

impl fmt::Display for OccasionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OccasionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OccasionType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown occasion type: {}", s))
    }
}

/// A recurring occasion definition, not yet pinned to a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccasionSource {
    pub person_id: String,
    pub occasion_type: OccasionType,
    pub source_date: NaiveDate,
    pub related_person: Option<String>,
}

/// Identity of one calendar occurrence within a single person's log.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OccasionKey {
    pub occasion_type: OccasionType,
    pub date: NaiveDate,
    pub related_person: Option<String>,
}

impl OccasionKey {
    /// Build a key. Birthday and anniversary keys never carry a related person,
    /// so any label passed for them is dropped.
    pub fn new(occasion_type: OccasionType, date: NaiveDate, related_person: Option<&str>) -> Self {
        let related_person = if occasion_type.carries_related_person() {
            related_person.map(str::to_string)
        } else {
            None
        };

        Self {
            occasion_type,
            date,
            related_person,
        }
    }
}

/// An occasion source materialized on a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccasionInstance {
    pub person_id: String,
    /// Opaque display label of the person; never parsed by the engine.
    pub person_name: String,
    pub occasion_type: OccasionType,
    pub related_person: Option<String>,
    pub concrete_date: NaiveDate,
    /// Distance from the reference date. `None` for search results.
    pub days_from_reference: Option<i64>,
    pub is_completed: bool,
}

impl OccasionInstance {
    pub fn key(&self) -> OccasionKey {
        OccasionKey::new(
            self.occasion_type,
            self.concrete_date,
            self.related_person.as_deref(),
        )
    }
}

/// Horizon buckets of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Today,
    Tomorrow,
    Next7Days,
    Next30Days,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [Bucket::Today, Bucket::Tomorrow, Bucket::Next7Days, Bucket::Next30Days];

    /// Bucket for a day distance, or `None` when outside the 30-day horizon.
    pub fn for_days(days: i64) -> Option<Bucket> {
        match days {
            0 => Some(Bucket::Today),
            1 => Some(Bucket::Tomorrow),
            2..=7 => Some(Bucket::Next7Days),
            8..=30 => Some(Bucket::Next30Days),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Bucket::Today => "Today",
            Bucket::Tomorrow => "Tomorrow",
            Bucket::Next7Days => "This Week",
            Bucket::Next30Days => "Next 30 Days",
        }
    }
}

/// Upcoming occasions grouped by horizon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub today: Vec<OccasionInstance>,
    pub tomorrow: Vec<OccasionInstance>,
    pub next_7_days: Vec<OccasionInstance>,
    pub next_30_days: Vec<OccasionInstance>,
}

impl Dashboard {
    pub fn bucket(&self, bucket: Bucket) -> &[OccasionInstance] {
        match bucket {
            Bucket::Today => &self.today,
            Bucket::Tomorrow => &self.tomorrow,
            Bucket::Next7Days => &self.next_7_days,
            Bucket::Next30Days => &self.next_30_days,
        }
    }

    pub(crate) fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<OccasionInstance> {
        match bucket {
            Bucket::Today => &mut self.today,
            Bucket::Tomorrow => &mut self.tomorrow,
            Bucket::Next7Days => &mut self.next_7_days,
            Bucket::Next30Days => &mut self.next_30_days,
        }
    }

    pub fn len(&self) -> usize {
        Bucket::ALL.iter().map(|b| self.bucket(*b).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
