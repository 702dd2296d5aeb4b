//! Alias generation and format checks.
//!
//! Generated aliases are short lowercase tokens; user-chosen aliases may use
//! any ASCII letters and digits.

use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Length of generated aliases.
pub const ALIAS_LENGTH: usize = 6;

/// Characters generated aliases are drawn from.
const ALIAS_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Format accepted for user-chosen aliases.
static CUSTOM_ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// Generates a random alias.
///
/// Each of the [`ALIAS_LENGTH`] characters is drawn independently and
/// uniformly from `[a-z0-9]`. Uniqueness is the caller's concern.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias();
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
/// ```
pub fn generate_alias() -> String {
    let mut rng = rand::rng();

    (0..ALIAS_LENGTH)
        .map(|_| ALIAS_ALPHABET[rng.random_range(0..ALIAS_ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `alias` is a non-empty run of ASCII letters and digits.
pub fn is_valid_alias(alias: &str) -> bool {
    CUSTOM_ALIAS_REGEX.is_match(alias)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_alias_has_correct_length() {
        assert_eq!(generate_alias().len(), ALIAS_LENGTH);
    }

    #[test]
    fn test_generate_alias_lowercase_alphanumeric() {
        for _ in 0..200 {
            let alias = generate_alias();
            assert!(
                alias
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "unexpected character in '{}'",
                alias
            );
        }
    }

    #[test]
    fn test_generated_aliases_are_valid_custom_aliases() {
        assert!(is_valid_alias(&generate_alias()));
    }

    #[test]
    fn test_generate_alias_rarely_repeats() {
        let aliases: HashSet<String> = (0..1000).map(|_| generate_alias()).collect();

        // 36^6 possibilities; a handful of birthday collisions at most.
        assert!(aliases.len() >= 995);
    }

    #[test]
    fn test_generator_covers_alphabet() {
        let seen: HashSet<char> = (0..500)
            .flat_map(|_| generate_alias().chars().collect::<Vec<_>>())
            .collect();

        assert_eq!(seen.len(), ALIAS_ALPHABET.len());
    }

    #[test]
    fn test_valid_aliases() {
        for alias in ["abc", "ABC", "a1B2c3", "0", "promo2026"] {
            assert!(is_valid_alias(alias), "'{}' should be valid", alias);
        }
    }

    #[test]
    fn test_invalid_aliases() {
        for alias in ["", "my-link", "my_link", "with space", "ünï", "a/b", "abc!"] {
            assert!(!is_valid_alias(alias), "'{}' should be invalid", alias);
        }
    }
}
