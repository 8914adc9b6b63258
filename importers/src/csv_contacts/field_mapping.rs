use std::collections::HashMap;

use super::date_parser::parse_birthday;

/// Header -> cell mapping for one data line. Transient, lives only
/// during parse-to-record conversion.
pub type RawCsvRow = HashMap<String, String>;

const NAME_COLUMNS: [&str; 3] = ["First name", "Middle name", "Last name"];

const EMAIL_COLUMNS: [&str; 4] = [
    "Email : home",
    "Email : work",
    "Email : ",
    "Email : other",
];

const PHONE_COLUMNS: [&str; 6] = [
    "Phone : mobile",
    "Phone : iPhone",
    "Phone : home",
    "Phone : work",
    "Phone : ",
    "Phone : main",
];

const PLACEHOLDER_NAME: &str = "Unknown";

/// Join the non-empty name parts with single spaces. An empty result
/// becomes the placeholder so callers can drop the record.
pub fn build_name(row: &RawCsvRow) -> String {
    let name = NAME_COLUMNS
        .iter()
        .filter_map(|column| row.get(*column))
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        PLACEHOLDER_NAME.to_string()
    } else {
        name
    }
}

pub fn is_placeholder(name: &str) -> bool {
    name.trim().is_empty() || name == PLACEHOLDER_NAME
}

/// First value among the known email columns that looks like an address.
pub fn extract_email(row: &RawCsvRow) -> String {
    for column in EMAIL_COLUMNS {
        if let Some(value) = row.get(column) {
            if value.contains('@') {
                return value.clone();
            }
        }
    }
    String::new()
}

/// First value among the known phone columns with at least 7 digits.
pub fn extract_phone(row: &RawCsvRow) -> String {
    for column in PHONE_COLUMNS {
        if let Some(value) = row.get(column) {
            if value.chars().filter(|c| c.is_ascii_digit()).count() >= 7 {
                return value.clone();
            }
        }
    }
    String::new()
}

/// "City, State", home address columns win over work address columns.
pub fn extract_location(row: &RawCsvRow) -> String {
    let city = first_non_empty(row, &["Address : home : City", "Address : work : City"]);
    let state = first_non_empty(row, &["Address : home : State", "Address : work : State"]);

    [city, state]
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn extract_birthday(row: &RawCsvRow) -> Option<String> {
    row.get("Birthday").and_then(|value| parse_birthday(value))
}

fn first_non_empty(row: &RawCsvRow, columns: &[&str]) -> String {
    columns
        .iter()
        .filter_map(|column| row.get(*column))
        .find(|value| !value.is_empty())
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawCsvRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_build_name_joins_parts() {
        let row = row(&[
            ("First name", "Sarah"),
            ("Middle name", ""),
            ("Last name", "Jones"),
        ]);
        assert_eq!(build_name(&row), "Sarah Jones");
    }

    #[test]
    fn test_build_name_placeholder_when_empty() {
        let row = row(&[("First name", ""), ("Last name", "  ")]);
        assert!(is_placeholder(&build_name(&row)));
    }

    #[test]
    fn test_email_requires_at_sign() {
        let row = row(&[
            ("Email : home", "not-an-email"),
            ("Email : work", "sarah@work.example"),
        ]);
        assert_eq!(extract_email(&row), "sarah@work.example");
    }

    #[test]
    fn test_phone_requires_seven_digits() {
        let row = row(&[
            ("Phone : mobile", "555-12"),
            ("Phone : home", "(415) 555-1234"),
        ]);
        assert_eq!(extract_phone(&row), "(415) 555-1234");
    }

    #[test]
    fn test_location_prefers_home_address() {
        let row = row(&[
            ("Address : home : City", "Oakland"),
            ("Address : work : City", "San Francisco"),
            ("Address : work : State", "CA"),
        ]);
        assert_eq!(extract_location(&row), "Oakland, CA");
    }

    #[test]
    fn test_location_city_only() {
        let row = row(&[("Address : home : City", "Oakland")]);
        assert_eq!(extract_location(&row), "Oakland");
    }
}
