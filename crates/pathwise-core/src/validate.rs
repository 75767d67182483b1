//! Client-side form validators.
//!
//! All functions are pure and total. Lengths are counted in characters,
//! not bytes.

use std::sync::LazyLock;

use pathwise_types::password::PasswordStrength;
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern is valid"));

/// Characters that count towards the "special character" check.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

const MIN_NAME_LEN: usize = 2;
const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 8;

/// Shape check only: something, an `@`, something, a dot, something.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least two characters, ASCII letters and whitespace only.
pub fn validate_name(name: &str) -> bool {
    name.chars().count() >= MIN_NAME_LEN && NAME_RE.is_match(name)
}

pub fn validate_username(username: &str) -> bool {
    username.chars().count() >= MIN_USERNAME_LEN
}

/// Score a password against five independent checks.
pub fn validate_password(password: &str) -> PasswordStrength {
    let min_length = password.chars().count() >= MIN_PASSWORD_LEN;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_number = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));

    let score = [min_length, has_upper, has_lower, has_number, has_special]
        .into_iter()
        .filter(|passed| *passed)
        .count() as u8;

    PasswordStrength {
        score,
        min_length,
        has_upper,
        has_lower,
        has_number,
        has_special,
    }
}
