//! Research orchestrator
//!
//! Owns the single [`RequestState`] and drives it through
//! `Idle -> Loading -> Success | Failure` for each submission.
//!
//! Overlapping submissions are allowed. Each one takes a monotonically
//! increasing token and only the latest token may write a resolution, so a
//! slow earlier response can never overwrite the state of a newer submission.

use crate::research::client::GenerationClient;
use crate::research::constants::EMPTY_IDEA_MESSAGE;
use crate::research::types::RequestState;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Token identifying one submission
pub type RequestToken = u64;

/// Outcome of one call to [`ResearchOrchestrator::submit`]
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// This submission wrote the contained state
    Resolved(RequestState),
    /// A newer submission or a reset took over before this one resolved
    Superseded,
}

#[derive(Debug, Default)]
struct Slot {
    state: RequestState,
    latest: RequestToken,
}

/// Validate a product idea before dispatch
///
/// # Returns
/// * `Ok(())` - Idea is valid
/// * `Err(String)` - User-facing message explaining the rejection
pub fn validate_idea(idea: &str, max_length: usize) -> Result<(), String> {
    let trimmed = idea.trim();
    if trimmed.is_empty() {
        return Err(EMPTY_IDEA_MESSAGE.to_string());
    }
    if trimmed.chars().count() > max_length {
        return Err(format!(
            "Product idea exceeds maximum length of {} characters.",
            max_length
        ));
    }
    Ok(())
}

/// Drives research requests and owns their state
pub struct ResearchOrchestrator {
    client: Arc<dyn GenerationClient>,
    max_idea_length: usize,
    slot: RwLock<Slot>,
}

impl ResearchOrchestrator {
    /// Create an orchestrator around an already-configured client
    pub fn new(client: Arc<dyn GenerationClient>, max_idea_length: usize) -> Self {
        Self {
            client,
            max_idea_length,
            slot: RwLock::new(Slot::default()),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> RequestState {
        self.read().state.clone()
    }

    /// Whether a submission is in flight
    pub fn is_loading(&self) -> bool {
        self.read().state.is_loading()
    }

    /// Return to `Idle`, superseding any in-flight submission
    pub fn reset(&self) {
        let mut slot = self.write();
        slot.latest += 1;
        slot.state = RequestState::Idle;
    }

    /// Submit a product idea
    ///
    /// Rejected ideas set a failure state without calling the client. Accepted
    /// ideas move to `Loading`, call the client once, and store the outcome
    /// unchanged on success or the generic failure message on any error.
    ///
    /// # Returns
    /// * `Submission::Resolved` - The state written by this submission
    /// * `Submission::Superseded` - A newer submission or a reset took over
    ///   first, so this one wrote nothing
    pub async fn submit(&self, idea: &str) -> Submission {
        if let Err(message) = validate_idea(idea, self.max_idea_length) {
            tracing::debug!(idea_len = idea.len(), "Rejected product idea");
            let mut slot = self.write();
            slot.latest += 1;
            slot.state = RequestState::invalid_input(message);
            return Submission::Resolved(slot.state.clone());
        }

        let guard = self.begin();
        tracing::info!(
            token = guard.token,
            idea_len = idea.len(),
            "Research request started"
        );

        let next = match self.client.fetch_research(idea).await {
            Ok(result) => {
                tracing::info!(
                    token = guard.token,
                    competitors = result.competitive_landscape.len(),
                    features = result.feature_suggestions.len(),
                    "Research request succeeded"
                );
                RequestState::Success(result)
            }
            Err(e) => {
                tracing::error!(
                    token = guard.token,
                    error = %e,
                    "Research request failed"
                );
                RequestState::generation_failure()
            }
        };

        guard.resolve(next)
    }

    fn begin(&self) -> LoadingGuard<'_> {
        let mut slot = self.write();
        slot.latest += 1;
        slot.state = RequestState::Loading;
        LoadingGuard {
            slot: &self.slot,
            token: slot.latest,
            armed: true,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Slot> {
        self.slot.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Slot> {
        self.slot.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears `Loading` when a submission ends
///
/// `resolve` writes the outcome. If the submission future is dropped first,
/// `Drop` puts the state back to `Idle` as long as no newer submission has
/// taken over.
struct LoadingGuard<'a> {
    slot: &'a RwLock<Slot>,
    token: RequestToken,
    armed: bool,
}

impl LoadingGuard<'_> {
    fn resolve(mut self, next: RequestState) -> Submission {
        self.armed = false;
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if slot.latest != self.token {
            tracing::debug!(
                token = self.token,
                latest = slot.latest,
                "Discarding stale research response"
            );
            return Submission::Superseded;
        }
        slot.state = next.clone();
        Submission::Resolved(next)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if slot.latest == self.token && slot.state.is_loading() {
            tracing::warn!(token = self.token, "Research request abandoned");
            slot.state = RequestState::Idle;
        }
    }
}
