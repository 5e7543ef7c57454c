//! Client-side form validation rules
//!
//! Every check returns `None` when the value is acceptable, or the inline
//! message to show next to the field. Checks are synchronous and run before
//! any simulated network call.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum password length accepted by the sign-in form
pub const LOGIN_PASSWORD_MIN_LEN: usize = 6;

/// Minimum length for any password being set (sign-up, reset, change)
pub const NEW_PASSWORD_MIN_LEN: usize = 8;

/// Minimum trimmed length of a full name on sign-up
pub const FULL_NAME_MIN_LEN: usize = 2;

/// Loose `text@text.text` shape; anything stricter belongs to a real backend.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid email regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some("Email is required")
    } else if !is_valid_email(email) {
        Some("Please enter a valid email")
    } else {
        None
    }
}

pub fn validate_login_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if password.chars().count() < LOGIN_PASSWORD_MIN_LEN {
        Some("Password must be at least 6 characters")
    } else {
        None
    }
}

/// Length-only rule used by the reset and change-password forms
pub fn validate_new_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if password.chars().count() < NEW_PASSWORD_MIN_LEN {
        Some("Password must be at least 8 characters")
    } else {
        None
    }
}

/// Sign-up rule: length plus lowercase, uppercase and digit
pub fn validate_signup_password(password: &str) -> Option<&'static str> {
    if let Some(err) = validate_new_password(password) {
        return Some(err);
    }
    let checks = PasswordChecks::of(password);
    if !(checks.lowercase && checks.uppercase && checks.digit) {
        return Some("Password must contain uppercase, lowercase, and number");
    }
    None
}

pub fn validate_full_name(full_name: &str) -> Option<&'static str> {
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        Some("Full name is required")
    } else if trimmed.chars().count() < FULL_NAME_MIN_LEN {
        Some("Full name must be at least 2 characters")
    } else {
        None
    }
}

pub fn validate_confirmation(password: &str, confirmation: &str) -> Option<&'static str> {
    if confirmation.is_empty() {
        Some("Please confirm your password")
    } else if password != confirmation {
        Some("Passwords do not match")
    } else {
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Password strength
// ─────────────────────────────────────────────────────────────────────────────

/// Individual password composition checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordChecks {
    pub min_length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl PasswordChecks {
    pub fn of(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= NEW_PASSWORD_MIN_LEN,
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    /// Number of satisfied checks (0-5)
    pub fn score(&self) -> u8 {
        [
            self.min_length,
            self.lowercase,
            self.uppercase,
            self.digit,
            self.symbol,
        ]
        .iter()
        .filter(|passed| **passed)
        .count() as u8
    }
}

/// Coarse strength bucket derived from the check score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => PasswordStrength::VeryWeak,
            2 => PasswordStrength::Weak,
            3 => PasswordStrength::Fair,
            4 => PasswordStrength::Good,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn of(password: &str) -> Self {
        Self::from_score(PasswordChecks::of(password).score())
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Fair => "Fair",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
        }
    }
}
