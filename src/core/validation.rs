//! Validation module for sign-in and sign-up fields
//!
//! Replaces the browser's `required` / `pattern` attributes with explicit checks
//! that run before a submission is accepted.

use super::form::{CredentialDraft, Field, FormMode};

/// Minimum length of a sign-up password
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Special characters allowed anywhere in a sign-up password
pub const ALLOWED_SPECIAL_CHARACTERS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

/// Special characters that satisfy the "one special character" rule
///
/// `.` counts here but is not in [`ALLOWED_SPECIAL_CHARACTERS`], so a password
/// containing it is still rejected.
pub const QUALIFYING_SPECIAL_CHARACTERS: &[char] = &['@', '$', '!', '%', '*', '?', '&', '.'];

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty
    MissingRequiredField { field: Field },
    /// The value does not satisfy the field's pattern
    PatternMismatch { field: Field },
}

impl ValidationError {
    /// The field the feedback should be attached to
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingRequiredField { field }
            | ValidationError::PatternMismatch { field } => *field,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingRequiredField { field } => {
                write!(f, "{} is required", field.label())
            }
            ValidationError::PatternMismatch {
                field: Field::Password,
            } => write!(
                f,
                "Password must be at least {} characters long and include a lowercase letter, \
                 an uppercase letter, a number and a special character",
                MIN_PASSWORD_LENGTH
            ),
            ValidationError::PatternMismatch { field } => {
                write!(f, "{} has an invalid format", field.label())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validation result containing every failing field of a form
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Errors in tree order
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// The error reported to the user
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Convert to Result, returning first error if any
    pub fn to_result(&self) -> Result<(), ValidationError> {
        match self.first_error() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    pub fn all_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

/// Required-field check: the empty string is missing, whitespace is not
pub fn validate_required(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::MissingRequiredField { field })
    } else {
        Ok(())
    }
}

/// Sign-up password pattern
///
/// Equivalent to `^(?=.*[a-z])(?=.*[A-Z])(?=.*\d)(?=.*[@$!%*?&.])[A-Za-z\d@$!%*?&]{8,}$`.
pub fn is_valid_sign_up_password(value: &str) -> bool {
    let mut length = 0;
    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in value.chars() {
        if !c.is_ascii_alphanumeric() && !ALLOWED_SPECIAL_CHARACTERS.contains(&c) {
            return false;
        }
        length += 1;
        has_lower |= c.is_ascii_lowercase();
        has_upper |= c.is_ascii_uppercase();
        has_digit |= c.is_ascii_digit();
        has_special |= QUALIFYING_SPECIAL_CHARACTERS.contains(&c);
    }

    length >= MIN_PASSWORD_LENGTH && has_lower && has_upper && has_digit && has_special
}

pub fn validate_sign_up_password(value: &str) -> Result<(), ValidationError> {
    if is_valid_sign_up_password(value) {
        Ok(())
    } else {
        Err(ValidationError::PatternMismatch {
            field: Field::Password,
        })
    }
}

/// Validates one field of the given form
///
/// The pattern is only evaluated on non-empty values.
pub fn validate_field(form: FormMode, field: Field, value: &str) -> Result<(), ValidationError> {
    validate_required(field, value)?;
    match (form, field) {
        (FormMode::SignUp, Field::Password) => validate_sign_up_password(value),
        _ => Ok(()),
    }
}

/// Validates every field of a form in tree order
pub fn validate_form(form: FormMode, draft: &CredentialDraft) -> ValidationResult {
    let mut result = ValidationResult::new();
    for &field in form.fields() {
        if let Err(error) = validate_field(form, field, draft.get(field)) {
            result.add_error(error);
        }
    }
    result
}
