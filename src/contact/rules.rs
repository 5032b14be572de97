use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("valid email pattern"));

// Allows "+995 555 123 456", "555 (123) 45-67", ...
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9\s\-()]{7,}$").expect("valid phone pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Password,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Password,
        Field::Message,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A named check on one field's trimmed value, plus the text shown when it fails.
pub struct FieldRule {
    pub field: Field,
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

impl FieldRule {
    pub fn passes(&self, value: &str) -> bool {
        (self.check)(value.trim())
    }
}

fn valid_name(value: &str) -> bool {
    value.chars().count() >= 2
}

fn valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

fn valid_password(value: &str) -> bool {
    value.chars().count() >= 6
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
}

fn valid_message(value: &str) -> bool {
    value.chars().count() >= 5
}

/// Evaluated in this order on every submit.
pub static RULES: [FieldRule; 5] = [
    FieldRule {
        field: Field::Name,
        check: valid_name,
        message: "Please enter your name (min 2 characters).",
    },
    FieldRule {
        field: Field::Email,
        check: valid_email,
        message: "Please enter a valid email.",
    },
    FieldRule {
        field: Field::Phone,
        check: valid_phone,
        message: "Please enter a valid phone (e.g. +995 555 123 456).",
    },
    FieldRule {
        field: Field::Password,
        check: valid_password,
        message: "Password: min 6 chars, include letters and numbers.",
    },
    FieldRule {
        field: Field::Message,
        check: valid_message,
        message: "Message must be at least 5 characters.",
    },
];

pub fn rule_for(field: Field) -> &'static FieldRule {
    &RULES[field.index()]
}
