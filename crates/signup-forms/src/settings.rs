//! Configuration for the signup form.
//!
//! Every value has a default matching the stock form, so an empty TOML
//! document yields the standard behavior. Supports TOML files and strings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for a signup form.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupSettings {
	/// Password classification thresholds
	pub password: PasswordSettings,

	/// User-visible texts
	pub messages: SignupMessages,
}

impl SignupSettings {
	/// Replace the password settings.
	pub fn with_password(mut self, password: PasswordSettings) -> Self {
		self.password = password;
		self
	}

	/// Replace the user-visible texts.
	pub fn with_messages(mut self, messages: SignupMessages) -> Self {
		self.messages = messages;
		self
	}

	/// Load configuration from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if the file cannot be read, parsed, or fails
	/// [`validate`](Self::validate).
	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let content =
			std::fs::read_to_string(path.as_ref()).map_err(|e| SettingsError::Io {
				path: path.as_ref().to_path_buf(),
				source: e,
			})?;

		Self::from_toml(&content)
	}

	/// Parse configuration from a TOML string.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::SignupSettings;
	///
	/// let settings = SignupSettings::from_toml(
	///     r#"
	///     [password]
	///     strong_min_length = 12
	///     "#,
	/// )
	/// .unwrap();
	/// assert_eq!(settings.password.strong_min_length, 12);
	/// assert_eq!(settings.password.moderate_min_length, 6);
	/// ```
	pub fn from_toml(content: &str) -> SettingsResult<Self> {
		let settings: Self = toml::from_str(content).map_err(|e| SettingsError::Parse {
			message: e.to_string(),
		})?;
		settings.validate()?;
		Ok(settings)
	}

	/// Check that the thresholds are consistent.
	pub fn validate(&self) -> SettingsResult<()> {
		let password = &self.password;
		if password.moderate_min_length > password.strong_min_length {
			return Err(SettingsError::Invalid {
				message: format!(
					"moderate_min_length ({}) must not exceed strong_min_length ({})",
					password.moderate_min_length, password.strong_min_length
				),
			});
		}
		if password.special_characters.is_empty() {
			return Err(SettingsError::Invalid {
				message: "special_characters must not be empty".to_string(),
			});
		}
		Ok(())
	}
}

/// Password classification configuration.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordSettings {
	/// Minimum length of a strong password (all signals required)
	pub strong_min_length: usize,

	/// Minimum length of a moderate password (any signal suffices)
	pub moderate_min_length: usize,

	/// Characters counted as special
	pub special_characters: String,
}

impl Default for PasswordSettings {
	fn default() -> Self {
		Self {
			strong_min_length: 10,
			moderate_min_length: 6,
			special_characters: "!@#$%^&*".to_string(),
		}
	}
}

/// Texts rendered by the form.
///
/// `success` may contain a `{name}` placeholder that is replaced with the
/// registered full name.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupMessages {
	pub title: String,
	pub invalid_full_name: String,
	pub invalid_email: String,
	pub password_requirements: String,
	pub invalid_password: String,
	/// Suffix appended to the strength label in the strength banner
	pub strength_suffix: String,
	pub success: String,
}

impl SignupMessages {
	/// Render the success acknowledgement for `name`.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::SignupMessages;
	///
	/// let messages = SignupMessages::default();
	/// assert_eq!(
	///     messages.success_for("Jane Doe"),
	///     "Registration successful! Welcome, Jane Doe!"
	/// );
	/// ```
	pub fn success_for(&self, name: &str) -> String {
		self.success.replace("{name}", name)
	}
}

impl Default for SignupMessages {
	fn default() -> Self {
		Self {
			title: "Signup".to_string(),
			invalid_full_name: "Invalid characters".to_string(),
			invalid_email: "Invalid email format".to_string(),
			password_requirements: "Minimum 10 characters with at least one lowercase letter, \
			                        one digit, and one special character"
				.to_string(),
			invalid_password: "Password requirements not met".to_string(),
			strength_suffix: "password".to_string(),
			success: "Registration successful! Welcome, {name}!".to_string(),
		}
	}
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to read settings file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse settings: {message}")]
	Parse { message: String },

	#[error("Invalid settings: {message}")]
	Invalid { message: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;
