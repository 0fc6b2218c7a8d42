use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use regex::Regex;

use super::messages;
use super::verdict::{FailureKind, Verdict};

/// Minimum name length, in UTF-16 code units.
pub const MIN_NAME_LEN: usize = 6;

/// Minimum password length, in UTF-16 code units.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1920;

/// Letters only, including accented Latin letters.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ]+$").expect("Invalid name pattern"));

/// `local@domain.tld` with a TLD of at least two letters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("Invalid email pattern")
});

/// Year, or year and month, with nothing else.
static PARTIAL_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})(?:-(?:0[1-9]|1[0-2]))?$").expect("Invalid partial date pattern")
});

/// The password requirements besides length. A password must match all of them.
static PASSWORD_PATTERNS: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        r"^[^\n\r\x{2028}\x{2029}]+$",
        r"[a-z]",
        r"[A-Z]",
        r"[0-9]",
        r"[!@#$%\^&*]",
    ]
    .map(|p| Regex::new(p).expect("Invalid password pattern"))
});

fn is_empty(value: &str) -> bool {
    value.is_empty()
}

/// Length as a browser counts it: in UTF-16 code units.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Whitespace and line terminators as browsers strip them from input values.
///
/// Unlike [`char::is_whitespace`] this includes U+FEFF and excludes U+0085.
fn is_form_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{85}' => false,
        c => c.is_whitespace(),
    }
}

/// Strip leading and trailing whitespace from a raw input value.
pub fn trim_value(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Validate a first or last name.
pub fn name_is_valid(value: &str) -> Verdict {
    Verdict::check(
        !is_empty(value),
        FailureKind::Required,
        messages::NAME_REQUIRED,
    )
    .and_then(|| {
        Verdict::check(
            utf16_len(value) >= MIN_NAME_LEN,
            FailureKind::TooShort,
            messages::NAME_TOO_SHORT,
        )
    })
    .and_then(|| {
        Verdict::check(
            NAME_PATTERN.is_match(value),
            FailureKind::PatternMismatch,
            messages::NAME_LETTERS_ONLY,
        )
    })
}

/// Validate a birth date against the current local year.
pub fn date_is_valid(value: &str) -> Verdict {
    date_is_valid_in(value, Local::now().year())
}

/// Validate a birth date, accepting years from [`MIN_BIRTH_YEAR`] to `current_year`.
pub fn date_is_valid_in(value: &str, current_year: i32) -> Verdict {
    if is_empty(value) {
        return Verdict::invalid(FailureKind::Required, messages::BIRTHDATE_REQUIRED);
    }

    let in_range = parse_year(value)
        .is_some_and(|year| (MIN_BIRTH_YEAR..=current_year).contains(&year));
    Verdict::check(in_range, FailureKind::OutOfRange, messages::BIRTHDATE_INVALID)
}

/// Calendar year of a date or date-time string, if it parses.
fn parse_year(value: &str) -> Option<i32> {
    if let Some(caps) = PARTIAL_DATE_PATTERN.captures(value) {
        return caps[1].parse().ok();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.year());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.year());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|datetime| datetime.year())
}

pub fn email_is_valid(value: &str) -> Verdict {
    Verdict::check(
        !is_empty(value),
        FailureKind::Required,
        messages::EMAIL_REQUIRED,
    )
    .and_then(|| {
        Verdict::check(
            EMAIL_PATTERN.is_match(value),
            FailureKind::PatternMismatch,
            messages::EMAIL_INVALID,
        )
    })
}

/// Validate password strength. Length and character classes are one
/// combined check with a single message.
pub fn password_is_secure(value: &str) -> Verdict {
    Verdict::check(
        !is_empty(value),
        FailureKind::Required,
        messages::PASSWORD_REQUIRED,
    )
    .and_then(|| {
        Verdict::check(
            utf16_len(value) >= MIN_PASSWORD_LEN
                && PASSWORD_PATTERNS.iter().all(|re| re.is_match(value)),
            FailureKind::PatternMismatch,
            messages::PASSWORD_WEAK,
        )
    })
}

/// Compare the trimmed confirmation against the raw password value.
pub fn passwords_match(confirmation: &str, password: &str) -> Verdict {
    Verdict::check(
        confirmation == password,
        FailureKind::Mismatch,
        messages::PASSWORD_MISMATCH,
    )
}
