//! Recording session state machine

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// How long the transient success state is displayed before the session
/// returns to idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(1500);

/// How long the transient error state is displayed before the session
/// returns to idle.
pub const ERROR_DISPLAY: Duration = Duration::from_millis(2000);

/// Per-utterance session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordingState {
    #[default]
    Idle,
    Recording,
    Processing,
    Success,
    Error,
}

impl RecordingState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Processing => "processing",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for RecordingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: RecordingState,
    pub action: String,
}

/// Recording session entity.
/// Manages state transitions for one utterance at a time.
///
/// State machine:
///   IDLE -> RECORDING (start_recording)
///   RECORDING -> PROCESSING (stop_recording)
///   RECORDING -> IDLE (cancel_recording)
///   IDLE -> PROCESSING (begin_reprocessing, clarification answer)
///   PROCESSING -> IDLE (await_clarification)
///   PROCESSING -> SUCCESS (finish_success)
///   RECORDING | PROCESSING -> ERROR (finish_error)
///   SUCCESS | ERROR -> IDLE (reset, after a display delay)
#[derive(Debug, Default)]
pub struct RecordingSession {
    state: RecordingState,
}

impl RecordingSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self {
            state: RecordingState::Idle,
        }
    }

    /// Get the current state
    pub fn state(&self) -> RecordingState {
        self.state
    }

    /// Check if currently idle
    pub fn is_idle(&self) -> bool {
        self.state == RecordingState::Idle
    }

    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        self.state == RecordingState::Recording
    }

    fn invalid(&self, action: &str) -> InvalidStateTransition {
        InvalidStateTransition {
            current_state: self.state,
            action: action.to_string(),
        }
    }

    /// Transition from IDLE to RECORDING
    pub fn start_recording(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != RecordingState::Idle {
            return Err(self.invalid("start recording"));
        }
        self.state = RecordingState::Recording;
        Ok(())
    }

    /// Transition from RECORDING to PROCESSING
    pub fn stop_recording(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != RecordingState::Recording {
            return Err(self.invalid("stop recording"));
        }
        self.state = RecordingState::Processing;
        Ok(())
    }

    /// Transition from RECORDING to IDLE (discard without processing)
    pub fn cancel_recording(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != RecordingState::Recording {
            return Err(self.invalid("cancel recording"));
        }
        self.state = RecordingState::Idle;
        Ok(())
    }

    /// Transition from IDLE to PROCESSING without a new recording.
    /// Used when reprocessing a held transcript with a clarification answer.
    pub fn begin_reprocessing(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != RecordingState::Idle {
            return Err(self.invalid("reprocess"));
        }
        self.state = RecordingState::Processing;
        Ok(())
    }

    /// Transition from PROCESSING back to IDLE without persisting.
    /// The utterance now waits on a clarification answer.
    pub fn await_clarification(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != RecordingState::Processing {
            return Err(self.invalid("await clarification"));
        }
        self.state = RecordingState::Idle;
        Ok(())
    }

    /// Transition from PROCESSING to SUCCESS
    pub fn finish_success(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != RecordingState::Processing {
            return Err(self.invalid("finish"));
        }
        self.state = RecordingState::Success;
        Ok(())
    }

    /// Transition from RECORDING or PROCESSING to ERROR
    pub fn finish_error(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != RecordingState::Recording && self.state != RecordingState::Processing {
            return Err(self.invalid("fail"));
        }
        self.state = RecordingState::Error;
        Ok(())
    }

    /// Return from a transient SUCCESS or ERROR state to IDLE
    pub fn reset(&mut self) {
        if self.state == RecordingState::Success || self.state == RecordingState::Error {
            self.state = RecordingState::Idle;
        }
    }
}
