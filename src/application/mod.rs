//! Application layer - Use cases and ports

pub mod clarification;
pub mod ports;
pub mod session;

pub use clarification::{
    AbandonedUtterance, ClarificationCoordinator, ClarificationError, ClarificationOutcome,
    ResolvedBatch,
};
pub use session::{ClarifiedSave, RecordingSessionUseCase, SessionError, SessionOutcome};
