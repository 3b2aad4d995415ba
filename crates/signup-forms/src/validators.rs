//! Full name and email validators
//!
//! Both validators treat the empty string as valid: a field that has not
//! been filled in yet is not an error. The patterns are deliberately loose
//! syntactic checks and must stay exactly as written here.

use crate::field::{FieldError, FieldResult};
use regex::Regex;
use std::sync::LazyLock;

// ASCII letters and spaces only; the empty string matches.
static FULL_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z ]*$").expect("FULL_NAME_REGEX: invalid regex pattern")
});

// One or more non-space characters, `@`, non-space, `.`, non-space.
//
// No domain or deliverability check.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\S+@\S+\.\S+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Result of feeding raw input through a [`FieldValidator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
	/// Value the form should store after this input
	pub value: String,
	pub valid: bool,
}

/// A synchronous per-field validation rule.
pub trait FieldValidator {
	/// Checks `value` against the rule.
	fn validate(&self, value: &str) -> FieldResult<()>;

	/// Whether rejected input still replaces the stored value.
	fn stores_invalid_input(&self) -> bool;

	/// Maps raw input onto the next stored value and its validity.
	///
	/// `stored` is the value currently held by the form; it is kept when the
	/// input is rejected and the validator does not store invalid input.
	fn apply(&self, stored: &str, raw: &str) -> FieldUpdate {
		match self.validate(raw) {
			Ok(()) => FieldUpdate {
				value: raw.to_string(),
				valid: true,
			},
			Err(_) if self.stores_invalid_input() => FieldUpdate {
				value: raw.to_string(),
				valid: false,
			},
			Err(_) => FieldUpdate {
				value: stored.to_string(),
				valid: false,
			},
		}
	}
}

/// Accepts names made of ASCII letters and spaces.
///
/// Rejected input is never stored, so the form keeps showing the last
/// accepted name.
///
/// # Examples
///
/// ```
/// use signup_forms::validators::{FieldValidator, FullNameValidator};
///
/// let validator = FullNameValidator::new();
/// assert!(validator.validate("Jane Doe").is_ok());
/// assert!(validator.validate("").is_ok());
/// assert!(validator.validate("John3").is_err());
///
/// let update = validator.apply("John", "John3");
/// assert_eq!(update.value, "John");
/// assert!(!update.valid);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FullNameValidator;

impl FullNameValidator {
	pub fn new() -> Self {
		Self
	}
}

impl FieldValidator for FullNameValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if value.is_empty() || FULL_NAME_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(FieldError::InvalidFullName)
		}
	}

	fn stores_invalid_input(&self) -> bool {
		false
	}
}

/// Loose syntactic email check.
///
/// The typed text is always stored, valid or not.
///
/// # Examples
///
/// ```
/// use signup_forms::validators::{EmailValidator, FieldValidator};
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("jane@x.co").is_ok());
/// assert!(validator.validate("").is_ok());
/// assert!(validator.validate("not-an-email").is_err());
///
/// let update = validator.apply("", "not-an-email");
/// assert_eq!(update.value, "not-an-email");
/// assert!(!update.valid);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
	pub fn new() -> Self {
		Self
	}
}

impl FieldValidator for EmailValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if value.is_empty() || EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(FieldError::InvalidEmail)
		}
	}

	fn stores_invalid_input(&self) -> bool {
		true
	}
}
