use serde::{Deserialize, Serialize};

/// Display state of the registration acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionState {
	#[default]
	Idle,
	/// Registration accepted. `full_name` is the name at the moment of
	/// registering and is not affected by later edits.
	Success { full_name: String },
}

/// SubmissionHandler gates the transition into the success state.
///
/// Only two transitions exist: `register` (guarded by form validity) and
/// `dismiss` (unconditional).
#[derive(Debug, Clone, Default)]
pub struct SubmissionHandler {
	state: SubmissionState,
}

impl SubmissionHandler {
	/// Create a handler in the idle state
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::submission::{SubmissionHandler, SubmissionState};
	///
	/// let handler = SubmissionHandler::new();
	/// assert_eq!(handler.state(), &SubmissionState::Idle);
	/// assert!(!handler.is_success());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> &SubmissionState {
		&self.state
	}

	pub fn is_success(&self) -> bool {
		matches!(self.state, SubmissionState::Success { .. })
	}

	/// Name shown in the acknowledgement, if one is displayed.
	pub fn acknowledged_name(&self) -> Option<&str> {
		match &self.state {
			SubmissionState::Success { full_name } => Some(full_name),
			SubmissionState::Idle => None,
		}
	}

	/// Move to the success state when `form_valid` holds
	///
	/// Returns whether the transition happened. An invalid form leaves the
	/// state untouched.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::submission::SubmissionHandler;
	///
	/// let mut handler = SubmissionHandler::new();
	/// assert!(!handler.register(false, "Jane"));
	/// assert!(!handler.is_success());
	///
	/// assert!(handler.register(true, "Jane"));
	/// assert_eq!(handler.acknowledged_name(), Some("Jane"));
	/// ```
	pub fn register(&mut self, form_valid: bool, full_name: &str) -> bool {
		if !form_valid {
			return false;
		}
		self.state = SubmissionState::Success {
			full_name: full_name.to_string(),
		};
		true
	}

	/// Return to the idle state.
	pub fn dismiss(&mut self) {
		self.state = SubmissionState::Idle;
	}
}
