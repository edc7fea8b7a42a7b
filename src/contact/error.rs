//! Contact form errors.

/// Validation failures, shown inline under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingField,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// The backend rejected or failed to deliver a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Message could not be sent: {0}")]
    Rejected(String),

    #[error("A message is already being sent")]
    Busy,
}
