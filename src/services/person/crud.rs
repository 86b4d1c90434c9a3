use super::shared::{to_calendar_date, to_local_datetime, to_occasion_type};
use super::PersonService;
use crate::models::person::{Child, CompletionRecord, Person};
use crate::utils::date::format_calendar_date;
use anyhow::{anyhow, Context, Result};
use rusqlite::{self, params, Connection, Row};

const PERSON_COLUMNS: &str = "id, full_name, phone_number, gothram, address, notes, date_of_birth,
     marriage_date, spouse_name, spouse_date_of_birth, created_at";

impl<'a> PersonService<'a> {
    /// Insert a new person together with children and completion log.
    pub fn create(&self, person: &Person) -> Result<()> {
        person.validate().map_err(|e| anyhow!(e))?;

        if self.exists(&person.id)? {
            return Err(anyhow!("Person with id {} already exists", person.id));
        }

        self.write(person)
            .with_context(|| format!("Failed to insert person {}", person.id))
    }

    /// Retrieve a person by id.
    pub fn get(&self, id: &str) -> Result<Option<Person>> {
        let result = self.conn.query_row(
            &format!("SELECT {} FROM devotees WHERE id = ?1", PERSON_COLUMNS),
            [id],
            row_to_person,
        );

        match result {
            Ok(person) => Ok(Some(self.with_details(person)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Update an existing person. Children and completion log are replaced.
    pub fn update(&self, person: &Person) -> Result<()> {
        person.validate().map_err(|e| anyhow!(e))?;

        if !self.exists(&person.id)? {
            return Err(anyhow!("Person with id {} not found", person.id));
        }

        self.write(person)
            .with_context(|| format!("Failed to update person {}", person.id))
    }

    /// Insert or replace a person.
    pub fn upsert(&self, person: &Person) -> Result<()> {
        person.validate().map_err(|e| anyhow!(e))?;
        self.write(person)
            .with_context(|| format!("Failed to save person {}", person.id))
    }

    /// Delete a person; children and completion records cascade.
    pub fn delete(&self, id: &str) -> Result<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM devotees WHERE id = ?1", [id])
            .context("Failed to delete person")?;

        if rows_affected == 0 {
            return Err(anyhow!("Person with id {} not found", id));
        }

        log::info!("Deleted person {}", id);
        Ok(())
    }

    /// All people ordered by name.
    pub fn list_all(&self) -> Result<Vec<Person>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM devotees ORDER BY full_name COLLATE NOCASE ASC, id ASC",
            PERSON_COLUMNS
        ))?;

        let people = stmt
            .query_map([], row_to_person)?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to fetch people")?;

        people
            .into_iter()
            .map(|person| self.with_details(person))
            .collect()
    }

    pub fn exists(&self, id: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM devotees WHERE id = ?1",
            [id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    fn write(&self, person: &Person) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        write_record(&tx, person)?;
        tx.commit()?;
        Ok(())
    }

    fn with_details(&self, mut person: Person) -> Result<Person> {
        person.children = self.load_children(&person.id)?;
        person.completion_log = self.load_completion_log(&person.id)?;
        Ok(person)
    }

    fn load_children(&self, id: &str) -> Result<Vec<Child>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, date_of_birth FROM devotee_children
             WHERE devotee_id = ?1 ORDER BY position ASC",
        )?;

        let children = stmt
            .query_map([id], |row| {
                Ok(Child {
                    name: row.get(0)?,
                    date_of_birth: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to fetch children")?;

        Ok(children)
    }

    pub(super) fn load_completion_log(&self, id: &str) -> Result<Vec<CompletionRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT occasion_date, occasion_type, related_person, completed_at
             FROM completion_records
             WHERE devotee_id = ?1 ORDER BY position ASC",
        )?;

        let records = stmt
            .query_map([id], |row| {
                Ok(CompletionRecord {
                    occasion_date: to_calendar_date(0, row.get(0)?)?,
                    occasion_type: to_occasion_type(1, row.get(1)?)?,
                    related_person: row.get(2)?,
                    completed_at: to_local_datetime(3, row.get(3)?)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to fetch completion records")?;

        Ok(records)
    }
}

fn row_to_person(row: &Row<'_>) -> rusqlite::Result<Person> {
    let created_at = row
        .get::<_, Option<String>>(10)?
        .map(|value| to_local_datetime(10, value))
        .transpose()?;

    Ok(Person {
        id: row.get(0)?,
        full_name: row.get(1)?,
        phone_number: row.get(2)?,
        gothram: row.get(3)?,
        address: row.get(4)?,
        notes: row.get(5)?,
        date_of_birth: row.get(6)?,
        marriage_date: row.get(7)?,
        spouse_name: row.get(8)?,
        spouse_date_of_birth: row.get(9)?,
        children: Vec::new(),
        completion_log: Vec::new(),
        created_at,
    })
}

/// Upsert the person row and rewrite children and completion log.
/// Runs on the caller's transaction.
pub(super) fn write_record(conn: &Connection, person: &Person) -> Result<()> {
    conn.execute(
        "INSERT INTO devotees (
            id, full_name, phone_number, gothram, address, notes, date_of_birth,
            marriage_date, spouse_name, spouse_date_of_birth, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
        ON CONFLICT(id) DO UPDATE SET
            full_name = excluded.full_name,
            phone_number = excluded.phone_number,
            gothram = excluded.gothram,
            address = excluded.address,
            notes = excluded.notes,
            date_of_birth = excluded.date_of_birth,
            marriage_date = excluded.marriage_date,
            spouse_name = excluded.spouse_name,
            spouse_date_of_birth = excluded.spouse_date_of_birth,
            created_at = excluded.created_at",
        params![
            person.id,
            person.full_name,
            person.phone_number,
            person.gothram,
            person.address,
            person.notes,
            person.date_of_birth,
            person.marriage_date,
            person.spouse_name,
            person.spouse_date_of_birth,
            person.created_at.map(|dt| dt.to_rfc3339()),
        ],
    )?;

    write_children(conn, person)?;
    write_completion_log(conn, person)?;

    log::debug!(
        "Saved person {} ({} children, {} completion records)",
        person.id,
        person.children.len(),
        person.completion_log.len()
    );
    Ok(())
}

fn write_children(conn: &Connection, person: &Person) -> Result<()> {
    conn.execute(
        "DELETE FROM devotee_children WHERE devotee_id = ?1",
        [&person.id],
    )?;

    let mut stmt = conn.prepare(
        "INSERT INTO devotee_children (devotee_id, position, name, date_of_birth)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    for (position, child) in person.children.iter().enumerate() {
        stmt.execute(params![person.id, position as i64, child.name, child.date_of_birth])?;
    }

    Ok(())
}

fn write_completion_log(conn: &Connection, person: &Person) -> Result<()> {
    conn.execute(
        "DELETE FROM completion_records WHERE devotee_id = ?1",
        [&person.id],
    )?;

    let mut stmt = conn.prepare(
        "INSERT INTO completion_records (
            devotee_id, position, occasion_date, occasion_type, related_person, completed_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    for (position, record) in person.completion_log.iter().enumerate() {
        stmt.execute(params![
            person.id,
            position as i64,
            format_calendar_date(record.occasion_date),
            record.occasion_type.as_str(),
            record.related_person,
            record.completed_at.to_rfc3339(),
        ])?;
    }

    Ok(())
}
