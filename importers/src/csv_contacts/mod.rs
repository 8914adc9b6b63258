//! Contact CSV importer.
//!
//! Input format: comma-separated text, optional quoted fields, first
//! line is headers, one record per subsequent line. Recognized header
//! names (name parts, email/phone variants, address columns, birthday)
//! follow the Apple contact export layout.

mod date_parser;
mod field_mapping;
mod line_parser;

pub use field_mapping::RawCsvRow;

use shared_types::{ImportError, NewContact};

/// How many parsed records the pre-import confirmation shows.
pub const PREVIEW_LEN: usize = 3;

const IMPORT_RELATIONSHIP: &str = "iPhone Contact";
const IMPORT_GROUP: &str = "Imported";
const IMPORT_SOURCE: &str = "csv_import";

/// Parse an uploaded CSV export into normalized contact records.
///
/// Rows with fewer than 2 fields are skipped as malformed; rows shorter
/// than the header get empty-string defaults for the missing trailing
/// columns. Records without a usable name are dropped before they can
/// reach storage.
pub fn parse_contacts(csv_text: &str) -> Result<Vec<NewContact>, ImportError> {
    let lines = line_parser::split_lines(csv_text);
    if lines.len() < 2 {
        return Err(ImportError::EmptyInput);
    }

    let headers = line_parser::split_fields(lines[0]);
    let mut contacts = Vec::new();

    for line in &lines[1..] {
        let values = line_parser::split_fields(line);
        if values.len() < 2 {
            continue;
        }

        let mut row = RawCsvRow::new();
        for (index, header) in headers.iter().enumerate() {
            row.insert(
                header.clone(),
                values.get(index).cloned().unwrap_or_default(),
            );
        }

        let name = field_mapping::build_name(&row);
        if field_mapping::is_placeholder(&name) {
            continue;
        }

        contacts.push(NewContact {
            name,
            email: non_empty(field_mapping::extract_email(&row)),
            phone: non_empty(field_mapping::extract_phone(&row)),
            company: non_empty(row.get("Company").cloned().unwrap_or_default()),
            location: non_empty(field_mapping::extract_location(&row)),
            job_title: non_empty(row.get("Job title").cloned().unwrap_or_default()),
            birthday: field_mapping::extract_birthday(&row),
            notes: None,
            relationship: Some(IMPORT_RELATIONSHIP.to_string()),
            group_name: IMPORT_GROUP.to_string(),
            interests: Vec::new(),
            source: Some(IMPORT_SOURCE.to_string()),
        });
    }

    Ok(contacts)
}

/// First few parsed records, for user-facing confirmation before the
/// import is committed.
pub fn preview(contacts: &[NewContact]) -> &[NewContact] {
    &contacts[..contacts.len().min(PREVIEW_LEN)]
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
