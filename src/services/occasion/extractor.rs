use super::OccasionService;
use crate::models::occasion::{OccasionSource, OccasionType};
use crate::models::person::Person;
use crate::utils::date::parse_optional_date;

impl OccasionService {
    /// Enumerate the occasion sources of one person.
    ///
    /// Order is fixed: birthday, anniversary, spouse birthday, then one child
    /// birthday per child in list order. Blank dates mean "not recorded";
    /// malformed dates drop only the affected source.
    pub fn extract(&self, person: &Person) -> Vec<OccasionSource> {
        let mut sources = Vec::with_capacity(3 + person.children.len());

        push_source(
            &mut sources,
            person,
            OccasionType::Birthday,
            Some(person.date_of_birth.as_str()),
            None,
        );
        push_source(
            &mut sources,
            person,
            OccasionType::Anniversary,
            person.marriage_date.as_deref(),
            None,
        );

        let spouse_label = person
            .spouse_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.spouse_placeholder)
            .to_string();
        push_source(
            &mut sources,
            person,
            OccasionType::SpouseBirthday,
            person.spouse_date_of_birth.as_deref(),
            Some(spouse_label),
        );

        for child in &person.children {
            push_source(
                &mut sources,
                person,
                OccasionType::ChildBirthday,
                child.date_of_birth.as_deref(),
                Some(child.name.clone()),
            );
        }

        sources
    }
}

fn push_source(
    sources: &mut Vec<OccasionSource>,
    person: &Person,
    occasion_type: OccasionType,
    raw_date: Option<&str>,
    related_person: Option<String>,
) {
    match parse_optional_date(raw_date) {
        Ok(Some(source_date)) => sources.push(OccasionSource {
            person_id: person.id.clone(),
            occasion_type,
            source_date,
            related_person,
        }),
        Ok(None) => {}
        Err(err) => {
            log::warn!(
                "Skipping {} of person {}: {}",
                occasion_type,
                person.id,
                err
            );
        }
    }
}
