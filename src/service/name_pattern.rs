//! Permitted-character check for employee names.
//!
//! The check runs over the family name immediately followed by the first
//! name, with no separator, and must match the whole string.

use std::sync::OnceLock;

use regex::Regex;

/// Anchored pattern with three positional classes:
/// an ASCII uppercase letter, then any non-digit, then zero or more
/// characters that are neither digits, nor one of `$@#^%§!*"`, nor
/// punctuation other than hyphen and apostrophe.
pub const NAME_PATTERN: &str = r#"^[A-Z][a-z\D\-'][^$@#^%§!*"\d[\p{P}&&[^\-']]]*$"#;

static NAME_RE: OnceLock<Regex> = OnceLock::new();

fn name_regex() -> &'static Regex {
    NAME_RE.get_or_init(|| {
        Regex::new(NAME_PATTERN)
            .unwrap_or_else(|error| panic!("name regex failed to compile: {error}"))
    })
}

/// Returns true if `name` followed by `first_name` uses only permitted
/// characters.
///
/// # Examples
///
/// ```
/// use personnel_manager::service::is_valid_full_name;
///
/// assert!(is_valid_full_name("DE-LATTREILLE", "Jean-Philippe"));
/// assert!(!is_valid_full_name("DUPONT", "F@bien"));
/// ```
pub fn is_valid_full_name(name: &str, first_name: &str) -> bool {
    let mut full = String::with_capacity(name.len() + first_name.len());
    full.push_str(name);
    full.push_str(first_name);
    name_regex().is_match(&full)
}
