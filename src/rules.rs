// src/rules.rs

/// Maximum display-name length, in characters.
pub const NAME_MAX_CHARS: usize = 255;
/// Maximum avatar URL length, in characters.
pub const AVATAR_URL_MAX_CHARS: usize = 500;
/// Minimum new-password length, in characters.
pub const PASSWORD_MIN_CHARS: usize = 8;

/// True when the value is empty or contains only whitespace.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Lengths are measured in characters, not bytes.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_matches_empty_and_whitespace_only() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n "));
    }

    #[test]
    fn blank_rejects_values_with_visible_characters() {
        assert!(!is_blank("a"));
        assert!(!is_blank("  a  "));
    }

    #[test]
    fn char_len_counts_characters_not_bytes() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len("日本語"), 3);
        assert_eq!(char_len(""), 0);
    }
}
