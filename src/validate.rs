//! Candidate-record validation: required fields and email format.

use crate::error::ValidationError;
use crate::user::UserDraft;
use lazy_static::lazy_static;
use regex::Regex;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Check a candidate record for required fields and email format.
///
/// All four form fields must be non-empty (whitespace-only counts as empty),
/// and the email must look like `local@domain.tld`. Pure function; the first
/// failing check wins.
pub fn validate(candidate: &UserDraft) -> Result<(), ValidationError> {
    let required: [(&'static str, &str); 4] = [
        ("name", &candidate.name),
        ("email", &candidate.email),
        ("username", &candidate.username),
        ("phone", &candidate.phone),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }
    if !is_valid_email(&candidate.email) {
        return Err(ValidationError::InvalidEmailFormat(candidate.email.clone()));
    }
    Ok(())
}
