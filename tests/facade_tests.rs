//! Facade re-export tests

#![cfg(feature = "forms")]

use rstest::rstest;
use signup::prelude::*;

#[rstest]
fn test_prelude_drives_full_flow() {
	// Arrange
	let mut form = SignupForm::new();

	// Act
	form.handle(FormEvent::FullNameChanged("Jane Doe".to_string()));
	form.handle(FormEvent::EmailChanged("jane@x.co".to_string()));
	form.handle(FormEvent::PasswordChanged("abcDEF123!".to_string()));
	form.handle(FormEvent::Register);

	// Assert
	assert_eq!(form.password_strength(), PasswordStrength::Strong);
	assert_eq!(
		form.submission_state(),
		&SubmissionState::Success {
			full_name: "Jane Doe".to_string()
		}
	);
}

#[rstest]
fn test_forms_module_exposes_crate() {
	// Arrange
	let classifier = signup::forms::PasswordClassifier::default();

	// Act
	let assessment = classifier.classify("abc12345");

	// Assert
	assert_eq!(assessment.strength, signup::forms::PasswordStrength::Moderate);
}
