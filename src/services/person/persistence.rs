//! JSON snapshot import/export.
//!
//! The snapshot layout is the one the browser-based version kept in local
//! storage: a JSON array of person records with camelCase keys.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde_json::Value;

use super::crud::write_record;
use super::PersonService;
use crate::models::person::Person;

/// Read a snapshot file. A missing file is an empty snapshot.
///
/// Records are decoded one by one so a failure names the offending entry.
pub fn load_snapshot(path: &Path) -> Result<Vec<Person>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let entries: Vec<Value> = serde_json::from_str(&data)
        .with_context(|| format!("snapshot {} is not a JSON array of records", path.display()))?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let label = record_label(index, &entry);
            serde_json::from_value(entry)
                .with_context(|| format!("{} in {} is malformed", label, path.display()))
        })
        .collect()
}

pub fn save_snapshot(path: &Path, people: &[Person]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(people)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write snapshot {}", path.display()))?;
    Ok(())
}

fn record_label(index: usize, entry: &Value) -> String {
    match entry.get("id").and_then(Value::as_str) {
        Some(id) => format!("record #{} (id {})", index + 1, id),
        None => format!("record #{}", index + 1),
    }
}

impl<'a> PersonService<'a> {
    /// Upsert every record of a snapshot file. Returns the number imported.
    ///
    /// All or nothing: any invalid record aborts the import before a row is
    /// written, and a storage failure rolls the whole file back.
    pub fn import_snapshot(&self, path: &Path) -> Result<usize> {
        let people = load_snapshot(path)?;
        for (index, person) in people.iter().enumerate() {
            person.validate().map_err(|e| {
                anyhow!(
                    "record #{} (id {}) in {}: {}",
                    index + 1,
                    person.id,
                    path.display(),
                    e
                )
            })?;
        }

        let tx = self.conn.unchecked_transaction()?;
        for person in &people {
            write_record(&tx, person)
                .with_context(|| format!("Failed to import person {}", person.id))?;
        }
        tx.commit()?;

        log::info!("Imported {} people from {}", people.len(), path.display());
        Ok(people.len())
    }

    /// Write all stored records to a snapshot file. Returns the number exported.
    pub fn export_snapshot(&self, path: &Path) -> Result<usize> {
        let people = self.list_all()?;
        save_snapshot(path, &people)?;

        log::info!("Exported {} people to {}", people.len(), path.display());
        Ok(people.len())
    }
}
