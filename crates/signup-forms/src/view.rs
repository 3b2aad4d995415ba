//! Serializable view of a signup form
//!
//! [`SignupView`] is plain data describing everything a renderer needs to
//! draw the form: field values, helper text, the password strength banner,
//! whether the register button is enabled and the success banner.
//!
//! ```
//! use signup_forms::SignupForm;
//!
//! let mut form = SignupForm::new();
//! form.set_full_name("Jane Doe");
//! form.set_email("jane@x.co");
//! form.set_password("abcDEF123!");
//! form.register();
//!
//! let view = form.view();
//! assert!(view.submit_enabled);
//! assert_eq!(
//!     view.success_banner.unwrap().message,
//!     "Registration successful! Welcome, Jane Doe!"
//! );
//!
//! // Hand off to a renderer
//! let json = serde_json::to_string(&form.view()).unwrap();
//! assert!(json.contains("\"title\":\"Signup\""));
//! ```

use crate::field::{FieldKind, Widget};
use crate::form::SignupForm;
use crate::password::AlertStatus;
use crate::submission::SubmissionState;
use serde::{Deserialize, Serialize};

/// Everything rendered for one form instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupView {
	pub title: String,

	/// Field views in display order
	pub fields: Vec<FieldView>,

	/// Absent until the password has been edited
	pub strength_banner: Option<Banner>,

	pub submit_enabled: bool,

	/// Present while the registration acknowledgement is shown
	pub success_banner: Option<Banner>,
}

impl SignupView {
	pub fn field(&self, kind: FieldKind) -> Option<&FieldView> {
		self.fields.iter().find(|f| f.kind == kind)
	}
}

/// Rendering data for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldView {
	pub kind: FieldKind,

	/// Form data key
	pub name: String,

	pub label: String,

	pub widget: Widget,

	pub required: bool,

	/// Current value; always `None` for the password field
	pub value: Option<String>,

	pub invalid: bool,

	/// Helper text shown under the input
	pub helper_text: Option<String>,
}

/// An alert line with a severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
	pub status: AlertStatus,
	pub message: String,
	/// Whether the banner offers a close affordance
	pub dismissible: bool,
}

impl SignupForm {
	/// Build the view for the current state.
	pub fn view(&self) -> SignupView {
		let messages = &self.settings().messages;

		let fields = FieldKind::ALL
			.iter()
			.map(|&kind| {
				let valid = self.is_field_valid(kind);
				let (value, helper_text) = match kind {
					FieldKind::FullName => (
						Some(self.full_name().to_string()),
						(!valid).then(|| messages.invalid_full_name.clone()),
					),
					FieldKind::Email => (
						Some(self.email().to_string()),
						(!valid).then(|| messages.invalid_email.clone()),
					),
					FieldKind::Password => (
						None,
						Some(if valid {
							messages.password_requirements.clone()
						} else {
							messages.invalid_password.clone()
						}),
					),
				};
				FieldView {
					kind,
					name: kind.name().to_string(),
					label: kind.label().to_string(),
					widget: kind.widget(),
					required: true,
					value,
					invalid: !valid,
					helper_text,
				}
			})
			.collect();

		let strength = self.password_strength();
		let strength_banner = match (strength.label(), strength.status()) {
			(Some(label), Some(status)) => Some(Banner {
				status,
				message: format!("{} {}", label, messages.strength_suffix),
				dismissible: false,
			}),
			_ => None,
		};

		let success_banner = match self.submission_state() {
			SubmissionState::Success { full_name } => Some(Banner {
				status: AlertStatus::Success,
				message: messages.success_for(full_name),
				dismissible: true,
			}),
			SubmissionState::Idle => None,
		};

		SignupView {
			title: messages.title.clone(),
			fields,
			strength_banner,
			submit_enabled: self.is_valid(),
			success_banner,
		}
	}
}
