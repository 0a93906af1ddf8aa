//! Email shape validation

/// Local part length limit from RFC 5321
const MAX_LOCAL_LEN: usize = 64;

/// Domain length limit from RFC 5321
const MAX_DOMAIN_LEN: usize = 255;

/// Label length limit from RFC 1035
const MAX_LABEL_LEN: usize = 63;

/// Validates the `local-part "@" domain "." tld` shape of an address
///
/// The empty string is never a valid address.
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => is_valid_local_part(local) && is_valid_domain(domain),
        None => false,
    }
}

/// Dot-separated atoms of `[alnum . _ - + %]`: no leading, trailing or
/// doubled dots
fn is_valid_local_part(local: &str) -> bool {
    let atom_char = |c: char| c.is_alphanumeric() || matches!(c, '_' | '-' | '+' | '%');

    local.len() <= MAX_LOCAL_LEN
        && local
            .split('.')
            .all(|atom| !atom.is_empty() && atom.chars().all(atom_char))
}

/// At least two labels; each label is non-empty alphanumerics and hyphens,
/// not starting or ending with '-'; the last label is an alphabetic TLD of
/// two or more characters
fn is_valid_domain(domain: &str) -> bool {
    if domain.len() > MAX_DOMAIN_LEN {
        return false;
    }

    let labels: alloc::vec::Vec<&str> = domain.split('.').collect();
    let Some((tld, hosts)) = labels.split_last() else {
        return false;
    };

    !hosts.is_empty()
        && hosts.iter().all(|label| is_valid_label(label))
        && tld.chars().count() >= 2
        && tld.chars().all(char::is_alphabetic)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_alphanumeric() || c == '-')
}
