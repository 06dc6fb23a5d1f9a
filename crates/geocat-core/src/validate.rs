// Shared pre-submit validation helpers. Messages are surfaced verbatim
// on the open form, so they stay short and user-facing.

use std::sync::LazyLock;

use regex::Regex;

static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z0-9-]+$").expect("valid slug pattern"));

/// Lowercase letters, digits, and hyphens only.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG.is_match(slug)
}

/// Reject a blank required field with a "{label} is required." message.
pub fn required(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{label} is required."))
    } else {
        Ok(())
    }
}

/// Validate an optional slug field; blank is allowed, malformed is not.
pub fn slug_if_present(slug: &str) -> Result<(), String> {
    if slug.is_empty() || is_valid_slug(slug) {
        Ok(())
    } else {
        Err("Slug may only contain lowercase letters, digits, and hyphens.".to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_lowercase_digits_hyphens() {
        assert!(is_valid_slug("widget-east-2"));
        assert!(!is_valid_slug("Widget"));
        assert!(!is_valid_slug("widget east"));
        assert!(!is_valid_slug(""));
    }

    #[test]
    fn required_rejects_whitespace_only() {
        assert!(required("Lyon", "Name").is_ok());
        assert_eq!(required("   ", "Name").unwrap_err(), "Name is required.");
    }

    #[test]
    fn blank_slug_is_tolerated_when_optional() {
        assert!(slug_if_present("").is_ok());
        assert!(slug_if_present("ok-slug").is_ok());
        assert!(slug_if_present("Bad Slug").is_err());
    }
}
