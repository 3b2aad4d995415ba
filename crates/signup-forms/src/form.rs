use crate::field::{FieldError, FieldKind};
use crate::password::{PasswordClassifier, PasswordStrength};
use crate::settings::SignupSettings;
use crate::submission::{SubmissionHandler, SubmissionState};
use crate::validators::{EmailValidator, FieldValidator, FullNameValidator};

/// One user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
	FullNameChanged(String),
	EmailChanged(String),
	PasswordChanged(String),
	Register,
	Dismiss,
}

/// Aggregate validity of the form: every field must be valid.
///
/// # Examples
///
/// ```
/// use signup_forms::form::aggregate_validity;
///
/// assert!(aggregate_validity(true, true, true));
/// assert!(!aggregate_validity(true, false, true));
/// ```
pub fn aggregate_validity(full_name_valid: bool, email_valid: bool, password_valid: bool) -> bool {
	full_name_valid && email_valid && password_valid
}

/// State of a signup form.
///
/// Each field setter replaces exactly one field's value and validity and
/// re-derives the aggregate before returning, so [`is_valid`](Self::is_valid)
/// always agrees with the three per-field flags.
#[derive(Debug, Clone)]
pub struct SignupForm {
	full_name: String,
	email: String,
	password: String,
	full_name_valid: bool,
	email_valid: bool,
	password_valid: bool,
	password_strength: PasswordStrength,
	form_valid: bool,
	submission: SubmissionHandler,
	full_name_validator: FullNameValidator,
	email_validator: EmailValidator,
	classifier: PasswordClassifier,
	settings: SignupSettings,
}

impl SignupForm {
	/// Create an empty form with default settings
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{PasswordStrength, SignupForm};
	///
	/// let form = SignupForm::new();
	/// assert_eq!(form.full_name(), "");
	/// assert!(!form.is_full_name_valid());
	/// assert_eq!(form.password_strength(), PasswordStrength::None);
	/// assert!(!form.is_valid());
	/// assert!(!form.is_submitted());
	/// ```
	pub fn new() -> Self {
		Self::with_settings(SignupSettings::default())
	}

	/// Create an empty form using custom settings.
	pub fn with_settings(settings: SignupSettings) -> Self {
		Self {
			full_name: String::new(),
			email: String::new(),
			password: String::new(),
			full_name_valid: false,
			email_valid: false,
			password_valid: false,
			password_strength: PasswordStrength::None,
			form_valid: false,
			submission: SubmissionHandler::new(),
			full_name_validator: FullNameValidator::new(),
			email_validator: EmailValidator::new(),
			classifier: PasswordClassifier::new(&settings.password),
			settings,
		}
	}

	pub fn full_name(&self) -> &str {
		&self.full_name
	}
	pub fn email(&self) -> &str {
		&self.email
	}
	pub fn password(&self) -> &str {
		&self.password
	}
	pub fn is_full_name_valid(&self) -> bool {
		self.full_name_valid
	}
	pub fn is_email_valid(&self) -> bool {
		self.email_valid
	}
	pub fn is_password_valid(&self) -> bool {
		self.password_valid
	}
	pub fn password_strength(&self) -> PasswordStrength {
		self.password_strength
	}
	/// Whether the register action is enabled.
	pub fn is_valid(&self) -> bool {
		self.form_valid
	}
	pub fn is_submitted(&self) -> bool {
		self.submission.is_success()
	}
	pub fn submission_state(&self) -> &SubmissionState {
		self.submission.state()
	}
	pub fn settings(&self) -> &SignupSettings {
		&self.settings
	}

	pub fn is_field_valid(&self, field: FieldKind) -> bool {
		match field {
			FieldKind::FullName => self.full_name_valid,
			FieldKind::Email => self.email_valid,
			FieldKind::Password => self.password_valid,
		}
	}

	/// Errors for every field that is currently invalid, in display order
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FieldError, PasswordStrength, SignupForm};
	///
	/// let mut form = SignupForm::new();
	/// form.set_full_name("Jane");
	/// form.set_email("jane@x.co");
	/// form.set_password("abc");
	///
	/// assert_eq!(
	///     form.errors(),
	///     vec![FieldError::InvalidPassword { strength: PasswordStrength::Weak }]
	/// );
	/// ```
	pub fn errors(&self) -> Vec<FieldError> {
		let mut errors = Vec::new();
		if !self.full_name_valid {
			errors.push(FieldError::InvalidFullName);
		}
		if !self.email_valid {
			errors.push(FieldError::InvalidEmail);
		}
		if !self.password_valid {
			errors.push(FieldError::InvalidPassword {
				strength: self.password_strength,
			});
		}
		errors
	}

	/// Apply a single event and re-derive the aggregate validity.
	pub fn handle(&mut self, event: FormEvent) {
		match event {
			FormEvent::FullNameChanged(value) => self.set_full_name(&value),
			FormEvent::EmailChanged(value) => self.set_email(&value),
			FormEvent::PasswordChanged(value) => self.set_password(&value),
			FormEvent::Register => {
				self.register();
			}
			FormEvent::Dismiss => self.dismiss(),
		}
	}

	/// Update the full name
	///
	/// Rejected input leaves the stored name at its last accepted value.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::SignupForm;
	///
	/// let mut form = SignupForm::new();
	/// form.set_full_name("John");
	/// form.set_full_name("John3");
	///
	/// assert_eq!(form.full_name(), "John");
	/// assert!(!form.is_full_name_valid());
	/// ```
	pub fn set_full_name(&mut self, value: &str) {
		let update = self.full_name_validator.apply(&self.full_name, value);
		self.full_name = update.value;
		self.full_name_valid = update.valid;
		tracing::debug!(
			field = FieldKind::FullName.name(),
			valid = update.valid,
			"field updated"
		);
		self.refresh_validity();
	}

	/// Update the email; the typed text is stored even when invalid.
	pub fn set_email(&mut self, value: &str) {
		let update = self.email_validator.apply(&self.email, value);
		self.email = update.value;
		self.email_valid = update.valid;
		tracing::debug!(
			field = FieldKind::Email.name(),
			valid = update.valid,
			length = self.email.chars().count(),
			"field updated"
		);
		self.refresh_validity();
	}

	/// Update the password and reclassify its strength
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{PasswordStrength, SignupForm};
	///
	/// let mut form = SignupForm::new();
	/// form.set_password("abc12345");
	///
	/// assert_eq!(form.password_strength(), PasswordStrength::Moderate);
	/// assert!(form.is_password_valid());
	/// ```
	pub fn set_password(&mut self, value: &str) {
		let assessment = self.classifier.classify(value);
		self.password = value.to_string();
		self.password_strength = assessment.strength;
		self.password_valid = assessment.valid;
		tracing::debug!(
			field = FieldKind::Password.name(),
			valid = assessment.valid,
			strength = ?assessment.strength,
			length = assessment.length,
			"field updated"
		);
		self.refresh_validity();
	}

	/// Show the success acknowledgement if the form is valid
	///
	/// Returns whether registration happened; on an invalid form this is a
	/// no-op.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::SignupForm;
	///
	/// let mut form = SignupForm::new();
	/// assert!(!form.register());
	///
	/// form.set_full_name("Jane Doe");
	/// form.set_email("jane@x.co");
	/// form.set_password("abcDEF123!");
	/// assert!(form.register());
	/// assert!(form.is_submitted());
	/// ```
	pub fn register(&mut self) -> bool {
		let registered = self.submission.register(self.form_valid, &self.full_name);
		if registered {
			tracing::info!(
				name_length = self.full_name.chars().count(),
				"registration accepted"
			);
		} else {
			let invalid: Vec<&str> = self.errors().iter().map(|e| e.field().name()).collect();
			tracing::debug!(invalid_fields = ?invalid, "registration refused");
		}
		registered
	}

	/// Hide the success acknowledgement.
	pub fn dismiss(&mut self) {
		self.submission.dismiss();
		tracing::debug!("acknowledgement dismissed");
	}

	fn refresh_validity(&mut self) {
		self.form_valid =
			aggregate_validity(self.full_name_valid, self.email_valid, self.password_valid);
	}
}

impl Default for SignupForm {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn valid_form() -> SignupForm {
		let mut form = SignupForm::new();
		form.set_full_name("Jane Doe");
		form.set_email("jane@x.co");
		form.set_password("abcDEF123!");
		form
	}

	#[rstest]
	fn test_initial_state() {
		// Act
		let form = SignupForm::new();

		// Assert
		assert_eq!(form.full_name(), "");
		assert_eq!(form.email(), "");
		assert_eq!(form.password(), "");
		assert!(!form.is_full_name_valid());
		assert!(!form.is_email_valid());
		assert!(!form.is_password_valid());
		assert_eq!(form.password_strength(), PasswordStrength::None);
		assert!(!form.is_valid());
		assert!(!form.is_submitted());
		assert_eq!(form.errors().len(), 3);
	}

	#[rstest]
	fn test_valid_form(valid_form: SignupForm) {
		// Assert
		assert!(valid_form.is_valid());
		assert_eq!(valid_form.password_strength(), PasswordStrength::Strong);
		assert!(valid_form.errors().is_empty());
	}

	#[rstest]
	#[case::full_name(FormEvent::FullNameChanged("Jane9".to_string()))]
	#[case::email(FormEvent::EmailChanged("jane".to_string()))]
	#[case::password(FormEvent::PasswordChanged("abc".to_string()))]
	fn test_any_invalid_field_invalidates_form(mut valid_form: SignupForm, #[case] event: FormEvent) {
		// Act
		valid_form.handle(event);

		// Assert
		assert!(!valid_form.is_valid());
		assert_eq!(valid_form.errors().len(), 1);
	}

	#[rstest]
	fn test_empty_name_and_email_are_valid() {
		// Arrange
		let mut form = SignupForm::new();

		// Act
		form.set_full_name("");
		form.set_email("");
		form.set_password("abc12345");

		// Assert
		assert!(form.is_full_name_valid());
		assert!(form.is_email_valid());
		assert!(form.is_valid());
	}

	#[rstest]
	fn test_empty_password_is_weak() {
		// Arrange
		let mut form = SignupForm::new();

		// Act
		form.set_password("");

		// Assert
		assert_eq!(form.password_strength(), PasswordStrength::Weak);
		assert!(!form.is_password_valid());
	}

	#[rstest]
	fn test_rejected_name_recovers_on_valid_input() {
		// Arrange
		let mut form = SignupForm::new();
		form.set_full_name("John");
		form.set_full_name("John3");

		// Act
		form.set_full_name("Johnny");

		// Assert
		assert_eq!(form.full_name(), "Johnny");
		assert!(form.is_full_name_valid());
	}

	#[rstest]
	fn test_register_snapshots_name(mut valid_form: SignupForm) {
		// Arrange
		assert!(valid_form.register());

		// Act
		valid_form.set_full_name("Someone Else");

		// Assert
		assert!(valid_form.is_submitted());
		assert_eq!(
			valid_form.submission_state(),
			&SubmissionState::Success {
				full_name: "Jane Doe".to_string()
			}
		);
	}

	#[rstest]
	fn test_register_noop_when_invalid(mut valid_form: SignupForm) {
		// Arrange
		valid_form.set_email("broken");

		// Act
		let registered = valid_form.register();

		// Assert
		assert!(!registered);
		assert!(!valid_form.is_submitted());
	}

	#[rstest]
	fn test_dismiss_returns_to_idle(mut valid_form: SignupForm) {
		// Arrange
		valid_form.handle(FormEvent::Register);

		// Act
		valid_form.handle(FormEvent::Dismiss);

		// Assert
		assert!(!valid_form.is_submitted());
		assert_eq!(valid_form.submission_state(), &SubmissionState::Idle);
		assert!(valid_form.is_valid());
	}

	#[rstest]
	fn test_custom_settings_change_classification() {
		// Arrange
		let mut settings = SignupSettings::default();
		settings.password.moderate_min_length = 8;
		let mut form = SignupForm::with_settings(settings);

		// Act
		form.set_password("abc123");

		// Assert
		assert_eq!(form.password_strength(), PasswordStrength::Weak);
		assert!(!form.is_password_valid());
	}

	#[rstest]
	#[case(false, false, false, false)]
	#[case(true, false, false, false)]
	#[case(false, true, false, false)]
	#[case(false, false, true, false)]
	#[case(true, true, false, false)]
	#[case(true, false, true, false)]
	#[case(false, true, true, false)]
	#[case(true, true, true, true)]
	fn test_aggregate_validity(
		#[case] full_name: bool,
		#[case] email: bool,
		#[case] password: bool,
		#[case] expected: bool,
	) {
		// Act & Assert
		assert_eq!(aggregate_validity(full_name, email, password), expected);
	}
}
