//! Signup form validation
//!
//! This crate holds the state machine behind a registration form:
//! - Full name and email validators with "empty is not an error" semantics
//! - Password strength classification (weak / moderate / strong)
//! - Aggregate form validity, re-derived after every field change
//! - A submission gate that shows a success acknowledgement
//! - A serializable view model for any renderer
//!
//! Everything is synchronous and local; nothing is persisted or sent.
//!
//! ```
//! use signup_forms::{FormEvent, PasswordStrength, SignupForm};
//!
//! let mut form = SignupForm::new();
//! form.handle(FormEvent::FullNameChanged("Jane Doe".to_string()));
//! form.handle(FormEvent::EmailChanged("jane@x.co".to_string()));
//! form.handle(FormEvent::PasswordChanged("abcDEF123!".to_string()));
//!
//! assert_eq!(form.password_strength(), PasswordStrength::Strong);
//! assert!(form.is_valid());
//!
//! form.handle(FormEvent::Register);
//! assert!(form.is_submitted());
//! ```

pub mod field;
pub mod form;
pub mod password;
pub mod settings;
pub mod submission;
pub mod validators;
pub mod view;

pub use field::{FieldError, FieldKind, FieldResult, Widget};
pub use form::{FormEvent, SignupForm, aggregate_validity};
pub use password::{
	AlertStatus, PasswordAssessment, PasswordClassifier, PasswordSignals, PasswordStrength,
};
pub use settings::{
	PasswordSettings, SettingsError, SettingsResult, SignupMessages, SignupSettings,
};
pub use submission::{SubmissionHandler, SubmissionState};
pub use validators::{EmailValidator, FieldUpdate, FieldValidator, FullNameValidator};
pub use view::{Banner, FieldView, SignupView};
