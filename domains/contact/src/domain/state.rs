//! Contact submission state machine
//!
//! Idle -> Submitting -> {Success, Failure} -> Idle. A failed client-side
//! validation goes straight to Failure without ever reaching Submitting.

pub use portfolio_common::StateError;

/// Submission status states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

impl SubmissionState {
    /// Whether a result banner is showing
    pub fn has_banner(&self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }

    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [SubmissionState] {
        match self {
            Self::Idle => &[Self::Submitting, Self::Failure],
            Self::Submitting => &[Self::Success, Self::Failure, Self::Idle],
            Self::Success | Self::Failure => &[Self::Idle, Self::Submitting, Self::Failure],
        }
    }
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Submitting => write!(f, "submitting"),
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// Events that trigger submission state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// Valid input was sent
    Submit,
    /// Client-side validation refused the input
    Rejected,
    /// The relay answered 2xx
    Succeeded,
    /// The relay answered non-2xx or could not be reached
    Failed,
    /// A field was edited
    Edit,
    /// The containing panel was collapsed
    Collapse,
}

impl std::fmt::Display for SubmissionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Submit => write!(f, "submit"),
            Self::Rejected => write!(f, "rejected"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
            Self::Edit => write!(f, "edit"),
            Self::Collapse => write!(f, "collapse"),
        }
    }
}

/// Submission state machine
pub struct SubmissionStateMachine;

impl SubmissionStateMachine {
    /// Attempt a state transition
    pub fn transition(
        current: SubmissionState,
        event: SubmissionEvent,
    ) -> Result<SubmissionState, StateError> {
        use self::SubmissionEvent as E;
        use self::SubmissionState as S;

        let next = match (current, event) {
            // Starting a submission; refused while one is in flight
            (S::Idle | S::Success | S::Failure, E::Submit) => S::Submitting,
            (S::Idle | S::Success | S::Failure, E::Rejected) => S::Failure,

            // Relay response
            (S::Submitting, E::Succeeded) => S::Success,
            (S::Submitting, E::Failed) => S::Failure,

            // Editing clears a banner but never interrupts a submission
            (S::Success | S::Failure, E::Edit) => S::Idle,
            (state, E::Edit) => state,

            (_, E::Collapse) => S::Idle,

            // Invalid transitions
            _ => {
                return Err(StateError::InvalidTransition {
                    from: current.to_string(),
                    event: event.to_string(),
                });
            }
        };

        Ok(next)
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: SubmissionState, event: SubmissionEvent) -> bool {
        Self::transition(current, event).is_ok()
    }
}
