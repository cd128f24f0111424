//! Value normalization for comparison and output.
//!
//! Names and categorical answers compare trim-only; emails compare
//! trimmed and lower-cased. Both normalizations are idempotent.

/// Trim a raw cell value. Absent values are represented upstream as empty
/// strings, so an empty-after-trim value stays empty.
#[must_use]
pub fn norm_str(value: &str) -> &str {
    value.trim()
}

/// Name normalization: trim only.
#[must_use]
pub fn norm_name(value: &str) -> &str {
    norm_str(value)
}

/// Email normalization: trim, then lowercase.
#[must_use]
pub fn norm_email(value: &str) -> String {
    norm_str(value).to_lowercase()
}

/// Non-empty equality: true only when both sides normalize to non-empty
/// and equal strings. Two empty sides never count as equal.
pub fn equal_nonempty<'a, N, V>(a: &'a str, b: &'a str, norm: N) -> bool
where
    N: Fn(&'a str) -> V,
    V: AsRef<str>,
{
    let (na, nb) = (norm(a), norm(b));
    let (na, nb) = (na.as_ref(), nb.as_ref());
    !na.is_empty() && !nb.is_empty() && na == nb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_is_idempotent() {
        for raw in [" a@Test.com ", "A@TEST.COM", "", "  ", "王小美 "] {
            let once = norm_email(raw);
            assert_eq!(norm_email(&once), once);
            let name_once = norm_name(raw);
            assert_eq!(norm_name(name_once), name_once);
        }
    }

    #[test]
    fn email_normalization_folds_case_and_whitespace() {
        assert_eq!(norm_email(" User@Example.com "), "user@example.com");
    }

    #[test]
    fn empty_sides_never_compare_equal() {
        assert!(!equal_nonempty("", "", norm_name));
        assert!(!equal_nonempty("  ", "  ", norm_name));
        assert!(!equal_nonempty("", "王小美", norm_name));
        assert!(!equal_nonempty("  ", " ", norm_email));
    }

    #[test]
    fn equality_uses_the_supplied_normalization() {
        assert!(equal_nonempty("a@Test.com", "a@test.com ", norm_email));
        // Names keep their case, so the same inputs differ under norm_name.
        assert!(!equal_nonempty("a@Test.com", "a@test.com ", norm_name));
        assert!(equal_nonempty("王小美", "王小美", norm_name));
    }
}
