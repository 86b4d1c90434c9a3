use super::PersonService;
use crate::models::person::{CompletionRecord, Person};
use anyhow::{anyhow, Result};

impl<'a> PersonService<'a> {
    /// Directory search.
    ///
    /// `term` is matched case-insensitively against name, phone number and
    /// gothram; `gothram`, when given, must match exactly.
    pub fn search_directory(&self, term: &str, gothram: Option<&str>) -> Result<Vec<Person>> {
        let people = self.list_all()?;
        Ok(people
            .into_iter()
            .filter(|person| matches_directory_filter(person, term, gothram))
            .collect())
    }

    /// Completion log of one person, most recent first.
    pub fn completion_history(&self, id: &str) -> Result<Vec<CompletionRecord>> {
        if !self.exists(id)? {
            return Err(anyhow!("Person with id {} not found", id));
        }

        let mut records = self.load_completion_log(id)?;
        records.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(records)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM devotees", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

pub fn matches_directory_filter(person: &Person, term: &str, gothram: Option<&str>) -> bool {
    if let Some(gothram) = gothram {
        if person.gothram != gothram {
            return false;
        }
    }

    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    person.full_name.to_lowercase().contains(&term)
        || person.phone_number.contains(&term)
        || person.gothram.to_lowercase().contains(&term)
}
