//! Email validation, normalization and domain extraction.

/// Maximum length of the local part (RFC 5321).
const LOCAL_PART_MAX: usize = 64;

/// Maximum length of the domain (RFC 1035).
const DOMAIN_MAX: usize = 253;

/// Validate an email address.
///
/// Requires the `local@domain.tld` shape (no whitespace, a single `@`, a
/// dotted domain) plus the usual structural rules on both sides: neither
/// part may start or end with a dot or contain consecutive dots, the local
/// part is capped at 64 characters and the domain at 253.
pub fn validate(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if email.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }

    local_part_ok(local) && domain_ok(domain)
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

/// The domain of a valid email address, `None` otherwise.
pub fn extract_domain(email: &str) -> Option<&str> {
    if !validate(email) {
        return None;
    }
    email.split_once('@').map(|(_, domain)| domain)
}

/// The local part of a valid email address, `None` otherwise.
pub fn extract_local_part(email: &str) -> Option<&str> {
    if !validate(email) {
        return None;
    }
    email.split_once('@').map(|(local, _)| local)
}

/// Whether a valid email address belongs to `domain`, either exactly or as
/// a subdomain. Comparison is case-insensitive; an empty target domain
/// never matches.
pub fn is_from_domain(email: &str, domain: &str) -> bool {
    if domain.is_empty() {
        return false;
    }
    let Some(email_domain) = extract_domain(email) else {
        return false;
    };

    let email_domain = email_domain.to_lowercase();
    let target = domain.to_lowercase();
    email_domain == target || email_domain.ends_with(&format!(".{target}"))
}

fn local_part_ok(local: &str) -> bool {
    !local.is_empty()
        && local.chars().count() <= LOCAL_PART_MAX
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
}

fn domain_ok(domain: &str) -> bool {
    domain.chars().count() <= DOMAIN_MAX
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- validate ---

    #[test]
    fn plain_address() {
        assert!(validate("maria@empresa.com"));
    }

    #[test]
    fn subdomain_address() {
        assert!(validate("joao.silva@mail.empresa.com.br"));
    }

    #[test]
    fn missing_at() {
        assert!(!validate("empresa.com"));
    }

    #[test]
    fn missing_domain_dot() {
        assert!(!validate("maria@localhost"));
    }

    #[test]
    fn double_at() {
        assert!(!validate("maria@@empresa.com"));
        assert!(!validate("maria@emp@resa.com"));
    }

    #[test]
    fn whitespace_rejected() {
        assert!(!validate("maria silva@empresa.com"));
        assert!(!validate(" maria@empresa.com"));
    }

    #[test]
    fn empty_local_part() {
        assert!(!validate("@empresa.com"));
    }

    #[test]
    fn dotted_edges_rejected() {
        assert!(!validate(".maria@empresa.com"));
        assert!(!validate("maria.@empresa.com"));
        assert!(!validate("maria@.empresa.com"));
        assert!(!validate("maria@empresa.com."));
    }

    #[test]
    fn consecutive_dots_rejected() {
        assert!(!validate("maria..silva@empresa.com"));
        assert!(!validate("maria@empresa..com"));
    }

    #[test]
    fn local_part_length_cap() {
        let local = "a".repeat(64);
        assert!(validate(&format!("{local}@empresa.com")));

        let local = "a".repeat(65);
        assert!(!validate(&format!("{local}@empresa.com")));
    }

    #[test]
    fn domain_length_cap() {
        let label = "a".repeat(250);
        assert!(!validate(&format!("maria@{label}.com")));
    }

    // --- normalize ---

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Maria.Silva@Empresa.COM  "), "maria.silva@empresa.com");
    }

    // --- extraction ---

    #[test]
    fn domain_of_valid_address() {
        assert_eq!(extract_domain("maria@empresa.com"), Some("empresa.com"));
    }

    #[test]
    fn local_part_of_valid_address() {
        assert_eq!(extract_local_part("maria@empresa.com"), Some("maria"));
    }

    #[test]
    fn extraction_refuses_invalid_address() {
        assert_eq!(extract_domain("not-an-email"), None);
        assert_eq!(extract_local_part("not-an-email"), None);
    }

    // --- is_from_domain ---

    #[test]
    fn exact_domain_match() {
        assert!(is_from_domain("maria@empresa.com", "empresa.com"));
    }

    #[test]
    fn subdomain_match() {
        assert!(is_from_domain("maria@mail.empresa.com", "empresa.com"));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(is_from_domain("maria@EMPRESA.com", "Empresa.COM"));
    }

    #[test]
    fn unrelated_domain() {
        assert!(!is_from_domain("maria@outra.com", "empresa.com"));
    }

    #[test]
    fn suffix_without_dot_boundary_is_not_a_match() {
        assert!(!is_from_domain("maria@minhaempresa.com", "empresa.com"));
    }

    #[test]
    fn empty_target_domain() {
        assert!(!is_from_domain("maria@empresa.com", ""));
    }

    #[test]
    fn invalid_email_never_matches() {
        assert!(!is_from_domain("not-an-email", "empresa.com"));
    }
}
