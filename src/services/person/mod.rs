//! Person record storage.
//! The occasion engine only sees snapshots; this module owns loading and
//! persisting them, split across focused submodules.

use anyhow::{anyhow, Result};
use rusqlite::Connection;

use crate::models::occasion::OccasionType;
use crate::models::person::Person;
use crate::services::occasion::OccasionService;

pub mod crud;
pub mod persistence;
pub mod queries;
mod shared;

pub use queries::matches_directory_filter;

/// Source of person snapshots and sink for updated records.
#[cfg_attr(test, mockall::automock)]
pub trait PersonRepository {
    /// Full snapshot of every stored person.
    fn load_people(&self) -> Result<Vec<Person>>;

    /// Store `person`, replacing any previous version with the same id.
    fn persist(&self, person: &Person) -> Result<()>;
}

/// Service for managing person records stored in SQLite.
pub struct PersonService<'a> {
    pub(crate) conn: &'a Connection,
}

impl<'a> PersonService<'a> {
    /// Create a new PersonService with a database connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl PersonRepository for PersonService<'_> {
    fn load_people(&self) -> Result<Vec<Person>> {
        self.list_all()
    }

    fn persist(&self, person: &Person) -> Result<()> {
        self.upsert(person)
    }
}

/// Toggle one occurrence for a stored person and persist the updated record.
///
/// The snapshot is re-read from the repository first, so the toggle always
/// applies to the latest stored log.
pub fn toggle_and_persist<R: PersonRepository + ?Sized>(
    repository: &R,
    occasions: &OccasionService,
    person_id: &str,
    occasion_type: OccasionType,
    concrete_date: &str,
    related_person: Option<&str>,
) -> Result<Person> {
    let people = repository.load_people()?;
    let person = people
        .iter()
        .find(|person| person.id == person_id)
        .ok_or_else(|| anyhow!("Person with id {} not found", person_id))?;

    let updated = occasions.toggle_completion(person, occasion_type, concrete_date, related_person)?;
    repository.persist(&updated)?;
    Ok(updated)
}
