use regex::Regex;

/// Capitalized cue words the patterns keep matching by mistake.
const STOPLIST: [&str; 5] = ["Get", "For", "The", "What", "Should"];

/// Pull candidate contact names out of a free-text message.
///
/// Three patterns: a word following get/for/give, a word preceding
/// "for", and a word preceding "'s birthday". Matching is
/// case-insensitive while the stoplist comparison is not. This is a
/// heuristic with known false positives and negatives; callers treat
/// the result as hints, not facts.
pub fn extract_candidate_names(message: &str) -> Vec<String> {
    let patterns = [
        Regex::new(r"(?i)(?:get|for|give)\s+([A-Z][a-z]+)").unwrap(),
        Regex::new(r"(?i)([A-Z][a-z]+)\s+for").unwrap(),
        Regex::new(r"(?i)([A-Z][a-z]+)'s\s+birthday").unwrap(),
    ];

    let mut names: Vec<String> = Vec::new();

    for pattern in &patterns {
        for caps in pattern.captures_iter(message) {
            let name = &caps[1];
            if !STOPLIST.contains(&name) && !names.iter().any(|seen| seen == name) {
                names.push(name.to_string());
            }
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_after_cue_word() {
        let names = extract_candidate_names("What should I get Sarah for her birthday?");
        assert!(names.contains(&"Sarah".to_string()));
    }

    #[test]
    fn test_possessive_birthday_pattern() {
        let names = extract_candidate_names("Ideas for Maya's birthday");
        assert!(names.contains(&"Maya".to_string()));
    }

    #[test]
    fn test_no_cues_yields_nothing() {
        assert!(extract_candidate_names("help me find a gift").is_empty());
    }

    #[test]
    fn test_stoplist_words_dropped() {
        // "for The" would otherwise match pattern one
        let names = extract_candidate_names("What can I get for The party");
        assert!(!names.contains(&"The".to_string()));
        assert!(!names.contains(&"What".to_string()));
    }

    #[test]
    fn test_candidates_deduplicated() {
        let names = extract_candidate_names("get Sarah something, Sarah for sure");
        assert_eq!(
            names.iter().filter(|n| n.as_str() == "Sarah").count(),
            1
        );
    }
}
