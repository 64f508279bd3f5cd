//! Tag matching helpers shared by scoring and filtering.

/// True when any term is a case-insensitive substring of any tag
///
/// Empty term lists never match.
pub(crate) fn any_substring_match(terms: &[String], tags: &[String]) -> bool {
    terms.iter().any(|term| {
        let term = term.to_lowercase();
        tags.iter().any(|tag| tag.to_lowercase().contains(&term))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert!(any_substring_match(
            &strings(&["BREAD"]),
            &strings(&["sourdough bread"])
        ));
        assert!(any_substring_match(
            &strings(&["sour"]),
            &strings(&["Sourdough"])
        ));
    }

    #[test]
    fn test_no_match() {
        assert!(!any_substring_match(
            &strings(&["cake"]),
            &strings(&["sourdough"])
        ));
    }

    #[test]
    fn test_empty_terms_never_match() {
        assert!(!any_substring_match(&[], &strings(&["sourdough"])));
    }

    #[test]
    fn test_empty_tags_never_match() {
        assert!(!any_substring_match(&strings(&["bread"]), &[]));
    }
}
