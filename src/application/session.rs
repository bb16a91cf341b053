//! Recording session use case
//!
//! Orchestrates the per-utterance lifecycle: capture audio, transcribe,
//! extract, route through the clarification coordinator, and persist the
//! finalized items as one batch. One utterance is active at a time; the
//! session state machine rejects overlapping start/stop calls.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::extraction::ClarificationRequest;
use crate::domain::log::{BatchMeta, HealthLog};
use crate::domain::session::{
    InvalidStateTransition, RecordingSession, RecordingState, ERROR_DISPLAY, SUCCESS_DISPLAY,
};

use super::clarification::{ClarificationCoordinator, ClarificationError, ClarificationOutcome};
use super::ports::{
    AudioRecorder, ExtractionError, Extractor, LogStore, RecordingError, StorageError,
    Transcriber, TranscriptionError,
};

/// Errors from the recording session use case
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Recording failed: {0}")]
    Recording(#[from] RecordingError),

    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Could not save logs: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid state transition: {0}")]
    InvalidState(#[from] InvalidStateTransition),

    #[error("Clarification failed: {0}")]
    Clarification(String),
}

impl From<ClarificationError> for SessionError {
    fn from(e: ClarificationError) -> Self {
        match e {
            ClarificationError::Extraction(inner) => Self::Extraction(inner),
            other => Self::Clarification(other.to_string()),
        }
    }
}

/// Outcome of stopping a recording
#[derive(Debug, Clone)]
pub enum SessionOutcome {
    /// The utterance resolved immediately; all items were persisted
    Saved(Vec<HealthLog>),
    /// The utterance needs a clarification answer before persisting
    NeedsClarification(ClarificationRequest),
}

/// Result of resolving a pending clarification with an answer
#[derive(Debug, Clone)]
pub struct ClarifiedSave {
    /// The persisted batch: held items first, re-extraction items after
    pub logs: Vec<HealthLog>,
    /// A nested clarification request the re-extraction raised; not
    /// supported, surfaced so the caller can mention it
    pub ignored_followup: Option<ClarificationRequest>,
}

/// Per-utterance orchestration over the audio, transcription, extraction,
/// and persistence collaborators
pub struct RecordingSessionUseCase<R, T, E, S>
where
    R: AudioRecorder,
    T: Transcriber,
    E: Extractor,
    S: LogStore,
{
    recorder: R,
    transcriber: T,
    extractor: Arc<E>,
    store: S,
    coordinator: ClarificationCoordinator<E>,
    session: Arc<Mutex<RecordingSession>>,
    last_error: Mutex<Option<String>>,
}

impl<R, T, E, S> RecordingSessionUseCase<R, T, E, S>
where
    R: AudioRecorder,
    T: Transcriber,
    E: Extractor + 'static,
    S: LogStore,
{
    /// Create a new use case instance
    pub fn new(recorder: R, transcriber: T, extractor: E, store: S) -> Self {
        let extractor = Arc::new(extractor);
        Self {
            recorder,
            transcriber,
            extractor: Arc::clone(&extractor),
            store,
            coordinator: ClarificationCoordinator::new(extractor),
            session: Arc::new(Mutex::new(RecordingSession::new())),
            last_error: Mutex::new(None),
        }
    }

    /// Get the current session state
    pub async fn state(&self) -> RecordingState {
        self.session.lock().await.state()
    }

    /// The message of the most recent failure, if the session is showing
    /// its transient error state
    pub async fn last_error(&self) -> Option<String> {
        self.last_error.lock().await.clone()
    }

    /// The outstanding clarification question, if any
    pub async fn pending_question(&self) -> Option<ClarificationRequest> {
        self.coordinator.pending_question().await
    }

    /// Start recording a new utterance.
    ///
    /// An unanswered clarification from a previous utterance is abandoned
    /// first: its held items are persisted (skip-equivalent) so they are
    /// never silently lost.
    pub async fn start(&self) -> Result<(), SessionError> {
        if let Some(held) = self.coordinator.abandon().await {
            if !held.items.is_empty() {
                let meta = BatchMeta::now(held.transcript.clone(), None);
                if let Err(e) = self.store.create_batch(held.items.clone(), &meta).await {
                    // Failed flush puts the utterance back, same as a
                    // failed re-extraction on the answer path
                    self.coordinator.reinstate(held).await;
                    return Err(e.into());
                }
            }
        }

        self.session.lock().await.start_recording()?;

        if let Err(e) = self.recorder.start().await {
            self.fail(&e.to_string()).await;
            return Err(e.into());
        }
        Ok(())
    }

    /// Stop recording and run the utterance through the pipeline.
    ///
    /// Persistence is all-or-nothing: nothing is stored unless the whole
    /// pipeline reached a resolution.
    pub async fn stop(&self) -> Result<SessionOutcome, SessionError> {
        self.session.lock().await.stop_recording()?;

        match self.process_utterance().await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                self.fail(&e.to_string()).await;
                Err(e)
            }
        }
    }

    async fn process_utterance(&self) -> Result<SessionOutcome, SessionError> {
        let clip = self.recorder.stop().await?;
        let audio_duration_ms = clip.duration_ms();

        let transcript = self.transcriber.transcribe(&clip).await?;
        let result = self.extractor.extract(&transcript.text, None).await?;

        match self.coordinator.observe(&transcript.text, result).await? {
            ClarificationOutcome::Final(items) => {
                let meta = BatchMeta::now(transcript.text, audio_duration_ms);
                let logs = if items.is_empty() {
                    Vec::new()
                } else {
                    self.store.create_batch(items, &meta).await?
                };
                self.succeed().await?;
                Ok(SessionOutcome::Saved(logs))
            }
            ClarificationOutcome::Question(question) => {
                // Held items are persisted later, together with the answer
                self.session.lock().await.await_clarification()?;
                Ok(SessionOutcome::NeedsClarification(question))
            }
        }
    }

    /// Cancel an in-progress recording, discarding its audio
    pub async fn cancel(&self) -> Result<(), SessionError> {
        self.session.lock().await.cancel_recording()?;
        self.recorder.cancel().await?;
        Ok(())
    }

    /// Resolve the pending clarification with the user's answer and
    /// persist the merged batch
    pub async fn submit_clarification(&self, answer: &str) -> Result<ClarifiedSave, SessionError> {
        self.session.lock().await.begin_reprocessing()?;

        match self.resolve_with_answer(answer).await {
            Ok(saved) => Ok(saved),
            Err(e) => {
                self.fail(&e.to_string()).await;
                Err(e)
            }
        }
    }

    async fn resolve_with_answer(&self, answer: &str) -> Result<ClarifiedSave, SessionError> {
        let batch = self.coordinator.answer(answer).await?;

        // Audio duration is unknown by the time the answer arrives
        let meta = BatchMeta::now(batch.transcript.clone(), None);
        let logs = if batch.items.is_empty() {
            Vec::new()
        } else {
            self.store.create_batch(batch.items, &meta).await?
        };
        self.succeed().await?;

        Ok(ClarifiedSave {
            logs,
            ignored_followup: batch.ignored_followup,
        })
    }

    /// Resolve the pending clarification without an answer, persisting
    /// the held items as they are
    pub async fn skip_clarification(&self) -> Result<Vec<HealthLog>, SessionError> {
        let batch = self.coordinator.skip().await?;
        if batch.items.is_empty() {
            return Ok(Vec::new());
        }

        let meta = BatchMeta::now(batch.transcript.clone(), None);
        Ok(self.store.create_batch(batch.items, &meta).await?)
    }

    async fn succeed(&self) -> Result<(), SessionError> {
        self.session.lock().await.finish_success()?;
        self.last_error.lock().await.take();
        self.schedule_reset(SUCCESS_DISPLAY);
        Ok(())
    }

    async fn fail(&self, message: &str) {
        // Best effort: a failure before any transition leaves the state alone
        let failed = self.session.lock().await.finish_error().is_ok();
        if failed {
            *self.last_error.lock().await = Some(message.to_string());
            self.schedule_reset(ERROR_DISPLAY);
        }
    }

    fn schedule_reset(&self, delay: std::time::Duration) {
        let session = Arc::clone(&self.session);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            session.lock().await.reset();
        });
    }
}
