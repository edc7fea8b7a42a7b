//! Contact form
//!
//! Field state and validation live in [`form`]. [`ContactFlow`] adds the
//! submit button lifecycle and the timed validation message on top. It
//! never sleeps: the session schedules the delays and calls back into the
//! flow when they elapse.

pub mod error;
pub mod form;
pub mod submit;

pub use error::{FormError, SubmitError};
pub use form::{is_valid_email, ContactForm, ContactMessage, Field};
pub use submit::{ScriptedSubmitter, SimulatedSubmitter, Submitter};

/// Submit button appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    /// Waiting on the backend; the button is disabled
    Loading,
    Success,
    Error,
}

impl ButtonState {
    pub fn label(&self) -> &'static str {
        match self {
            ButtonState::Idle => "Send Message",
            ButtonState::Loading => "Sending...",
            ButtonState::Success => "Message Sent!",
            ButtonState::Error => "Failed, try again",
        }
    }

    /// Whether pressing the button does anything.
    pub fn is_enabled(&self) -> bool {
        *self == ButtonState::Idle
    }
}

/// Result of pressing the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation failed. The message stays up until `expire_error` is
    /// called with this generation.
    Invalid { error: FormError, generation: u64 },
    /// Message accepted; call `complete` once the send delay elapses.
    Sending,
    /// Button disabled, nothing happened.
    Ignored,
}

/// Form plus submit lifecycle.
#[derive(Debug, Clone, Default)]
pub struct ContactFlow {
    form: ContactForm,
    button: ButtonState,
    error: Option<FormError>,
    error_generation: u64,
    pending: Option<ContactMessage>,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn button(&self) -> ButtonState {
        self.button
    }

    /// Validation message currently shown, if any.
    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    pub fn is_sending(&self) -> bool {
        self.pending.is_some()
    }

    /// Press the submit button.
    pub fn submit(&mut self) -> SubmitAttempt {
        if !self.button.is_enabled() {
            return SubmitAttempt::Ignored;
        }
        match self.form.validate() {
            Err(error) => {
                // A newer message outlives the expiry timer of an older one.
                self.error_generation += 1;
                self.error = Some(error);
                tracing::debug!(%error, "contact form rejected");
                SubmitAttempt::Invalid {
                    error,
                    generation: self.error_generation,
                }
            }
            Ok(message) => {
                self.error = None;
                self.pending = Some(message);
                self.button = ButtonState::Loading;
                SubmitAttempt::Sending
            }
        }
    }

    /// Hand the pending message to `submitter` and settle the button.
    ///
    /// On success the form is cleared. Returns `None` when nothing was
    /// pending.
    pub fn complete(
        &mut self,
        submitter: &mut dyn Submitter,
    ) -> Option<Result<(), SubmitError>> {
        let message = self.pending.take()?;
        let result = submitter.submit(&message);
        match &result {
            Ok(()) => {
                tracing::info!(email = %message.email, "contact message sent");
                self.button = ButtonState::Success;
                self.form.reset();
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact message failed");
                self.button = ButtonState::Error;
            }
        }
        Some(result)
    }

    /// Return the button to idle after a success or error display.
    pub fn reset_button(&mut self) {
        if matches!(self.button, ButtonState::Success | ButtonState::Error) {
            self.button = ButtonState::Idle;
        }
    }

    /// Hide the validation message if it is still the one from
    /// `generation`. Returns whether it was hidden.
    pub fn expire_error(&mut self, generation: u64) -> bool {
        if generation == self.error_generation && self.error.is_some() {
            self.error = None;
            true
        } else {
            false
        }
    }

    /// Drop any in-flight message and return to a clean form.
    pub fn abort(&mut self) {
        self.pending = None;
        self.button = ButtonState::Idle;
        self.error = None;
    }
}
