//! Signup form validation and state
//!
//! See [`signup_forms`] for the full API.

pub use signup_forms::*;
