//! # Signup
//!
//! Client-side registration form logic: field validation, password strength
//! classification, aggregate form validity and a simulated registration
//! acknowledgement.
//!
//! All behavior is synchronous and local. Rendering is left to the caller,
//! which receives a serializable [`SignupView`] describing what to draw.
//!
//! ## Feature Flags
//!
//! - `forms` (default) - The signup form state machine
//! - `full` - All features enabled
//!
//! ## Quick Example
//!
//! ```rust
//! use signup::prelude::*;
//!
//! let mut form = SignupForm::new();
//! form.set_full_name("Jane Doe");
//! form.set_email("jane@x.co");
//! form.set_password("abcDEF123!");
//!
//! assert_eq!(form.password_strength(), PasswordStrength::Strong);
//! assert!(form.register());
//!
//! let view = form.view();
//! assert_eq!(
//!     view.success_banner.map(|b| b.message),
//!     Some("Registration successful! Welcome, Jane Doe!".to_string())
//! );
//! ```

#[cfg(feature = "forms")]
pub mod forms;

// Re-export forms (forms feature)
#[cfg(feature = "forms")]
pub use signup_forms::{
	FieldError, FieldKind, FormEvent, PasswordClassifier, PasswordStrength, SettingsError,
	SignupForm, SignupSettings, SignupView, SubmissionState,
};

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "forms")]
	pub use crate::{
		FieldError, FieldKind, FormEvent, PasswordClassifier, PasswordStrength, SettingsError,
		SignupForm, SignupSettings, SignupView, SubmissionState,
	};
}
