use chrono::NaiveDate;

const DATE_FORMATS: [&str; 3] = ["%m/%d/%y", "%m/%d/%Y", "%Y-%m-%d"];

/// Parse a birthday cell into `YYYY-MM-DD`.
///
/// Exports often carry a time component ("3/22/01 4:07 PM"); only the
/// part before the first space is considered. Unparseable input yields
/// None, never an error; birthday is a skippable field.
pub fn parse_birthday(raw: &str) -> Option<String> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return None;
    }

    let token = cleaned.split(' ').next().unwrap_or(cleaned);

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(token, format) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }

    None
}
