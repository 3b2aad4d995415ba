//! Field identifiers, widgets and field-level validation errors

use crate::password::PasswordStrength;
use serde::{Deserialize, Serialize};

/// The three inputs collected by the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
	FullName,
	Email,
	Password,
}

impl FieldKind {
	/// All fields in display order.
	pub const ALL: [FieldKind; 3] = [FieldKind::FullName, FieldKind::Email, FieldKind::Password];

	/// Form data key of the field
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::FieldKind;
	///
	/// assert_eq!(FieldKind::FullName.name(), "full_name");
	/// assert_eq!(FieldKind::Password.name(), "password");
	/// ```
	pub fn name(&self) -> &'static str {
		match self {
			FieldKind::FullName => "full_name",
			FieldKind::Email => "email",
			FieldKind::Password => "password",
		}
	}

	/// Human-readable label shown next to the input.
	pub fn label(&self) -> &'static str {
		match self {
			FieldKind::FullName => "Full Name",
			FieldKind::Email => "Email",
			FieldKind::Password => "Password",
		}
	}

	pub fn widget(&self) -> Widget {
		match self {
			FieldKind::FullName => Widget::TextInput,
			FieldKind::Email => Widget::EmailInput,
			FieldKind::Password => Widget::PasswordInput,
		}
	}
}

/// Input widget used to render a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Widget {
	TextInput,
	EmailInput,
	PasswordInput,
}

impl Widget {
	/// Value of the HTML `type` attribute for this widget.
	pub fn input_type(&self) -> &'static str {
		match self {
			Widget::TextInput => "text",
			Widget::EmailInput => "email",
			Widget::PasswordInput => "password",
		}
	}
}

/// Validity failure of a single field.
///
/// These are input states, not failures of the library: the form turns them
/// into validity flags and helper text and never propagates them further.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("Invalid characters")]
	InvalidFullName,
	#[error("Invalid email format")]
	InvalidEmail,
	#[error("Password requirements not met")]
	InvalidPassword { strength: PasswordStrength },
}

impl FieldError {
	/// The field this error belongs to
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FieldError, FieldKind};
	///
	/// assert_eq!(FieldError::InvalidEmail.field(), FieldKind::Email);
	/// ```
	pub fn field(&self) -> FieldKind {
		match self {
			FieldError::InvalidFullName => FieldKind::FullName,
			FieldError::InvalidEmail => FieldKind::Email,
			FieldError::InvalidPassword { .. } => FieldKind::Password,
		}
	}
}

pub type FieldResult<T> = Result<T, FieldError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(FieldKind::FullName, "full_name", "Full Name", "text")]
	#[case(FieldKind::Email, "email", "Email", "email")]
	#[case(FieldKind::Password, "password", "Password", "password")]
	fn test_field_kind_metadata(
		#[case] kind: FieldKind,
		#[case] name: &str,
		#[case] label: &str,
		#[case] input_type: &str,
	) {
		// Act & Assert
		assert_eq!(kind.name(), name);
		assert_eq!(kind.label(), label);
		assert_eq!(kind.widget().input_type(), input_type);
	}

	#[rstest]
	fn test_field_error_messages() {
		// Arrange
		let weak = FieldError::InvalidPassword {
			strength: PasswordStrength::Weak,
		};

		// Act & Assert
		assert_eq!(FieldError::InvalidFullName.to_string(), "Invalid characters");
		assert_eq!(FieldError::InvalidEmail.to_string(), "Invalid email format");
		assert_eq!(weak.to_string(), "Password requirements not met");
		assert_eq!(weak.field(), FieldKind::Password);
	}

	#[rstest]
	fn test_field_kind_serializes_snake_case() {
		// Act
		let json = serde_json::to_string(&FieldKind::FullName).unwrap();

		// Assert
		assert_eq!(json, "\"full_name\"");
	}
}
