//! Password strength classification
//!
//! A password is classified from three character signals (lowercase ASCII
//! letter, ASCII digit, special character) and its length:
//!
//! 1. `Strong` when it reaches the strong length and has all three signals
//! 2. `Moderate` when it reaches the moderate length and has any signal
//! 3. `Weak` otherwise
//!
//! Only `Moderate` and `Strong` passwords are valid. Strength and validity are
//! always derived together from the current text.

use crate::field::{FieldError, FieldResult};
use crate::settings::PasswordSettings;
use serde::{Deserialize, Serialize};

/// Strength of the current password.
///
/// `None` is only held by a form whose password field has never been edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
	#[default]
	None,
	Weak,
	Moderate,
	Strong,
}

impl PasswordStrength {
	/// Banner label for this strength, `None` has no banner.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::PasswordStrength;
	///
	/// assert_eq!(PasswordStrength::Moderate.label(), Some("Moderate"));
	/// assert_eq!(PasswordStrength::None.label(), None);
	/// ```
	pub fn label(&self) -> Option<&'static str> {
		match self {
			PasswordStrength::None => None,
			PasswordStrength::Weak => Some("Weak"),
			PasswordStrength::Moderate => Some("Moderate"),
			PasswordStrength::Strong => Some("Strong"),
		}
	}

	pub fn status(&self) -> Option<AlertStatus> {
		match self {
			PasswordStrength::None => None,
			PasswordStrength::Weak => Some(AlertStatus::Error),
			PasswordStrength::Moderate => Some(AlertStatus::Warning),
			PasswordStrength::Strong => Some(AlertStatus::Success),
		}
	}

	pub fn is_acceptable(&self) -> bool {
		matches!(self, PasswordStrength::Moderate | PasswordStrength::Strong)
	}
}

/// Severity used when rendering a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
	Error,
	Warning,
	Success,
}

/// Character classes found in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordSignals {
	pub has_lower: bool,
	pub has_digit: bool,
	pub has_special: bool,
}

impl PasswordSignals {
	pub fn all(&self) -> bool {
		self.has_lower && self.has_digit && self.has_special
	}

	pub fn any(&self) -> bool {
		self.has_lower || self.has_digit || self.has_special
	}
}

/// Outcome of classifying one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordAssessment {
	pub strength: PasswordStrength,
	pub signals: PasswordSignals,
	/// Length in characters
	pub length: usize,
	pub valid: bool,
}

impl PasswordAssessment {
	/// Converts the assessment into a field result.
	pub fn into_result(self) -> FieldResult<PasswordStrength> {
		if self.valid {
			Ok(self.strength)
		} else {
			Err(FieldError::InvalidPassword {
				strength: self.strength,
			})
		}
	}
}

/// Classifies passwords against configurable length thresholds and special
/// character set.
///
/// # Examples
///
/// ```
/// use signup_forms::{PasswordClassifier, PasswordStrength};
///
/// let classifier = PasswordClassifier::default();
///
/// assert_eq!(classifier.classify("abcDEF123!").strength, PasswordStrength::Strong);
/// assert_eq!(classifier.classify("abc12345").strength, PasswordStrength::Moderate);
///
/// let weak = classifier.classify("abc");
/// assert_eq!(weak.strength, PasswordStrength::Weak);
/// assert!(!weak.valid);
/// ```
#[derive(Debug, Clone)]
pub struct PasswordClassifier {
	strong_min_length: usize,
	moderate_min_length: usize,
	special_characters: Vec<char>,
}

impl PasswordClassifier {
	pub fn new(settings: &PasswordSettings) -> Self {
		Self {
			strong_min_length: settings.strong_min_length,
			moderate_min_length: settings.moderate_min_length,
			special_characters: settings.special_characters.chars().collect(),
		}
	}

	pub fn signals(&self, password: &str) -> PasswordSignals {
		let mut signals = PasswordSignals::default();
		for c in password.chars() {
			signals.has_lower |= c.is_ascii_lowercase();
			signals.has_digit |= c.is_ascii_digit();
			signals.has_special |= self.special_characters.contains(&c);
		}
		signals
	}

	/// Classifies `password`. The result depends on nothing but its text.
	pub fn classify(&self, password: &str) -> PasswordAssessment {
		let signals = self.signals(password);
		let length = password.chars().count();

		let strength = if length >= self.strong_min_length && signals.all() {
			PasswordStrength::Strong
		} else if length >= self.moderate_min_length && signals.any() {
			PasswordStrength::Moderate
		} else {
			PasswordStrength::Weak
		};

		PasswordAssessment {
			strength,
			signals,
			length,
			valid: strength.is_acceptable(),
		}
	}

	pub fn validate(&self, password: &str) -> FieldResult<PasswordStrength> {
		self.classify(password).into_result()
	}
}

impl Default for PasswordClassifier {
	fn default() -> Self {
		Self::new(&PasswordSettings::default())
	}
}
