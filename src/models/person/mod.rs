// Person module
// Devotee record with biographical dates and the blessing-call log

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::occasion::{OccasionKey, OccasionType};

/// A devotee record.
///
/// Dates are kept as the raw `YYYY-MM-DD` strings received from storage; they
/// are validated only when occasions are derived so that one malformed value
/// never hides the rest of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    /// Display label, possibly bilingual (`"English / Local"`).
    pub full_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub gothram: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub date_of_birth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriage_date: Option<String>,
    #[serde(default, alias = "wifeName", skip_serializing_if = "Option::is_none")]
    pub spouse_name: Option<String>,
    #[serde(
        default,
        rename = "spouseDOB",
        alias = "wifeDOB",
        alias = "spouseDateOfBirth",
        skip_serializing_if = "Option::is_none"
    )]
    pub spouse_date_of_birth: Option<String>,
    #[serde(default)]
    pub children: Vec<Child>,
    #[serde(default, rename = "callHistory")]
    pub completion_log: Vec<CompletionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Local>>,
}

/// A child listed on a person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub name: String,
    #[serde(default, rename = "dob", alias = "dateOfBirth")]
    pub date_of_birth: Option<String>,
}

impl Child {
    pub fn new(name: impl Into<String>, date_of_birth: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date_of_birth: Some(date_of_birth.into()),
        }
    }
}

/// One completed ("blessed") occurrence of an occasion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Concrete date of the occurrence that was acted on, not the source date.
    #[serde(rename = "date")]
    pub occasion_date: NaiveDate,
    #[serde(rename = "type")]
    pub occasion_type: OccasionType,
    #[serde(default, rename = "relatedPerson", skip_serializing_if = "Option::is_none")]
    pub related_person: Option<String>,
    #[serde(rename = "timestamp")]
    pub completed_at: DateTime<Local>,
}

impl CompletionRecord {
    pub fn new(key: &OccasionKey, completed_at: DateTime<Local>) -> Self {
        Self {
            occasion_date: key.date,
            occasion_type: key.occasion_type,
            related_person: key.related_person.clone(),
            completed_at,
        }
    }

    /// Exact identity match. An absent related person only matches absent.
    pub fn matches(&self, key: &OccasionKey) -> bool {
        self.occasion_type == key.occasion_type
            && self.occasion_date == key.date
            && self.related_person == key.related_person
    }
}

impl Person {
    /// Create a new person with the required fields.
    ///
    /// # Examples
    /// ```
    /// use devotee_records::models::person::Person;
    ///
    /// let person = Person::new("1", "P. Rama Krishna", "1985-06-10").unwrap();
    /// assert!(person.children.is_empty());
    /// ```
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Result<Self, String> {
        let person = Self {
            id: id.into(),
            full_name: full_name.into(),
            phone_number: String::new(),
            gothram: String::new(),
            address: String::new(),
            notes: None,
            date_of_birth: date_of_birth.into(),
            marriage_date: None,
            spouse_name: None,
            spouse_date_of_birth: None,
            children: Vec::new(),
            completion_log: Vec::new(),
            created_at: None,
        };

        person.validate()?;
        Ok(person)
    }

    /// Validate the identifying fields. Dates are checked later, per occasion.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Person id cannot be empty".to_string());
        }

        if self.full_name.trim().is_empty() {
            return Err("Person name cannot be empty".to_string());
        }

        Ok(())
    }

    pub fn with_phone(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn with_gothram(mut self, gothram: impl Into<String>) -> Self {
        self.gothram = gothram.into();
        self
    }

    pub fn with_marriage_date(mut self, marriage_date: impl Into<String>) -> Self {
        self.marriage_date = Some(marriage_date.into());
        self
    }

    pub fn with_spouse(mut self, name: Option<&str>, date_of_birth: impl Into<String>) -> Self {
        self.spouse_name = name.map(str::to_string);
        self.spouse_date_of_birth = Some(date_of_birth.into());
        self
    }

    pub fn with_child(mut self, child: Child) -> Self {
        self.children.push(child);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_person_requires_name() {
        assert!(Person::new("1", "  ", "1990-01-01").is_err());
        assert!(Person::new("", "Sita", "1990-01-01").is_err());
        assert!(Person::new("1", "Sita", "1990-01-01").is_ok());
    }

    #[test]
    fn test_deserialize_legacy_record() {
        let json = r#"{
            "id": "7",
            "fullName": "T. Anusuya / టి. అనసూయ",
            "phoneNumber": "9701231234",
            "gothram": "Kausika (కౌశిక)",
            "address": "Vijayawada",
            "dateOfBirth": "1970-03-02",
            "marriageDate": "",
            "wifeName": "Lakshmi",
            "wifeDOB": "1972-08-15",
            "children": [{ "name": "Ravi", "dob": "2001-05-05" }],
            "createdAt": "2024-01-01T10:00:00Z",
            "callHistory": [
                { "date": "2024-03-02", "type": "Birthday", "timestamp": "2024-03-02T09:30:00Z" }
            ]
        }"#;

        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.spouse_name.as_deref(), Some("Lakshmi"));
        assert_eq!(person.spouse_date_of_birth.as_deref(), Some("1972-08-15"));
        assert_eq!(person.marriage_date.as_deref(), Some(""));
        assert_eq!(person.children[0].date_of_birth.as_deref(), Some("2001-05-05"));
        assert_eq!(person.completion_log.len(), 1);
        assert_eq!(person.completion_log[0].occasion_type, OccasionType::Birthday);
        assert_eq!(person.completion_log[0].related_person, None);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let json = r#"{ "id": "1", "fullName": "Sita", "dateOfBirth": "1995-01-01" }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert!(person.children.is_empty());
        assert!(person.completion_log.is_empty());
    }

    #[test]
    fn test_record_match_distinguishes_absent_label() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let record = CompletionRecord::new(
            &OccasionKey::new(OccasionType::ChildBirthday, date, Some("Ravi")),
            Local::now(),
        );

        assert!(record.matches(&OccasionKey::new(OccasionType::ChildBirthday, date, Some("Ravi"))));
        assert!(!record.matches(&OccasionKey::new(OccasionType::ChildBirthday, date, None)));
        assert!(!record.matches(&OccasionKey::new(OccasionType::ChildBirthday, date, Some("Sita"))));
        assert!(!record.matches(&OccasionKey::new(OccasionType::Birthday, date, None)));
    }
}
