use regex::Regex;
use std::sync::LazyLock;

/// Local part, `@`, domain, dot, top-level segment; no whitespace and no
/// second `@` anywhere.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_RE is a valid regex pattern")
});

/// ASCII letters, digits and underscore, 3 to 20 of them.
static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]{3,20}$").expect("USERNAME_RE is a valid regex pattern")
});

/// Symbols allowed in a strong password besides letters and digits.
const PASSWORD_SYMBOLS: &str = "@$!%*?&";

const PASSWORD_MIN_LEN: usize = 6;
const STRONG_PASSWORD_MIN_LEN: usize = 8;

/// Shape check only: `local@domain.tld`, no whitespace, single `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// 3-20 characters, each an ASCII letter, digit, or underscore.
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_RE.is_match(username)
}

/// Minimum length only; no character-class requirement.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LEN
}

/// At least 8 characters with a lowercase letter, an uppercase letter and a
/// digit, drawn from ASCII letters, digits and `@$!%*?&`.
#[must_use]
pub fn is_strong_password(password: &str) -> bool {
    if password.chars().count() < STRONG_PASSWORD_MIN_LEN {
        return false;
    }

    password.chars().all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c))
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}
