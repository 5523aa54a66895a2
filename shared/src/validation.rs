//! Permissive format checks for free-text form fields

use regex::Regex;
use std::sync::OnceLock;

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();
static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
static PHONE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    // Patterns are compile-time constants covered by the tests below
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern compiles"))
}

/// Optional scheme, a dotted host or IPv4 address, then optional port, path,
/// query and fragment
pub fn is_valid_url(url: &str) -> bool {
    compiled(
        &URL_PATTERN,
        concat!(
            r"(?i)^(https?://)?",
            r"((([a-z\d]([a-z\d-]*[a-z\d])*)\.)+[a-z]{2,}|((\d{1,3}\.){3}\d{1,3}))",
            r"(:\d+)?(/[-a-z\d%_.~+]*)*",
            r"(\?[;&a-z\d%_.~+=-]*)?",
            r"(#[-a-z\d_]*)?$",
        ),
    )
    .is_match(url)
}

pub fn is_valid_email(email: &str) -> bool {
    compiled(&EMAIL_PATTERN, r"^[^\s@]+@[^\s@]+\.[^\s@]+$").is_match(email)
}

/// 7 to 15 digits, spaces, dashes or parentheses with an optional leading `+`
pub fn is_valid_phone(phone: &str) -> bool {
    compiled(&PHONE_PATTERN, r"^\+?[\d\s()\-]{7,15}$").is_match(phone)
}

/// Contact details are accepted as either an email address or a phone number
pub fn is_valid_contact(contact: &str) -> bool {
    is_valid_email(contact) || is_valid_phone(contact)
}
