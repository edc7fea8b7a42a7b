//! Message delivery backends.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::SubmitError;
use super::form::ContactMessage;

/// Something that can deliver a contact message.
pub trait Submitter {
    fn submit(&mut self, message: &ContactMessage) -> Result<(), SubmitError>;
}

/// Stand-in backend that succeeds with a fixed probability.
///
/// Nothing leaves the machine; the payload is only logged.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    success_rate: f64,
    rng: StdRng,
}

impl SimulatedSubmitter {
    pub fn new(success_rate: f64) -> Self {
        Self {
            success_rate: success_rate.clamp(0.0, 1.0),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic outcomes for tests.
    pub fn with_seed(success_rate: f64, seed: u64) -> Self {
        Self {
            success_rate: success_rate.clamp(0.0, 1.0),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&mut self, message: &ContactMessage) -> Result<(), SubmitError> {
        let payload = serde_json::to_string(message).unwrap_or_default();
        tracing::info!(%payload, "submitting contact message");

        if self.rng.random_bool(self.success_rate) {
            Ok(())
        } else {
            Err(SubmitError::Rejected("simulated network failure".to_string()))
        }
    }
}

/// Backend with a scripted sequence of outcomes. Once the script runs out
/// every submission succeeds.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSubmitter {
    outcomes: std::collections::VecDeque<bool>,
    pub sent: Vec<ContactMessage>,
}

impl ScriptedSubmitter {
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            sent: Vec::new(),
        }
    }
}

impl Submitter for ScriptedSubmitter {
    fn submit(&mut self, message: &ContactMessage) -> Result<(), SubmitError> {
        self.sent.push(message.clone());
        if self.outcomes.pop_front().unwrap_or(true) {
            Ok(())
        } else {
            Err(SubmitError::Rejected("scripted failure".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn certain_success_and_failure() {
        let mut always = SimulatedSubmitter::with_seed(1.0, 7);
        let mut never = SimulatedSubmitter::with_seed(0.0, 7);
        for _ in 0..20 {
            assert!(always.submit(&message()).is_ok());
            assert!(never.submit(&message()).is_err());
        }
    }

    #[test]
    fn rate_is_clamped() {
        assert_eq!(SimulatedSubmitter::new(3.0).success_rate(), 1.0);
        assert_eq!(SimulatedSubmitter::new(-1.0).success_rate(), 0.0);
    }

    #[test]
    fn seeded_outcomes_repeat() {
        let run = |seed| {
            let mut s = SimulatedSubmitter::with_seed(0.5, seed);
            (0..32).map(|_| s.submit(&message()).is_ok()).collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn scripted_outcomes_then_success() {
        let mut s = ScriptedSubmitter::new([false]);
        assert!(s.submit(&message()).is_err());
        assert!(s.submit(&message()).is_ok());
        assert_eq!(s.sent.len(), 2);
    }
}
