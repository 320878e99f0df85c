//! Submission state for a random-pick front end.
//!
//! ```text
//! Idle ──submit──▶ Loading ──ok──▶ Ready(entry)
//!   ▲  (blank)        └────err──▶ Failed(message)
//!   └──▶ Failed
//! ```
//!
//! `Ready` and `Failed` both accept the next submission. There is no
//! cancellation: while `Loading`, further submissions are refused.

use omikuji_api::anilist::types::ListEntry;
use omikuji_api::ListSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PickError;
use crate::picker::{fetch_random_entry, validate_username};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum PickerState {
    #[default]
    Idle,
    Loading,
    Ready(Box<ListEntry>),
    Failed(String),
}

impl PickerState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[cfg(test)]
    pub fn entry(&self) -> Option<&ListEntry> {
        match self {
            Self::Ready(entry) => Some(&**entry),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Owns the list source, the random source, and the current state.
pub struct Randomizer<S, R = StdRng> {
    source: S,
    rng: R,
    state: PickerState,
}

impl<S> Randomizer<S, StdRng>
where
    S: ListSource,
    PickError: From<S::Error>,
{
    /// Randomizer seeded from OS entropy, or from `seed` when given.
    pub fn new(source: S, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(source, rng)
    }
}

impl<S, R> Randomizer<S, R>
where
    S: ListSource,
    PickError: From<S::Error>,
    R: Rng,
{
    pub fn with_rng(source: S, rng: R) -> Self {
        Self {
            source,
            rng,
            state: PickerState::Idle,
        }
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    #[cfg(test)]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether a new submission would be accepted.
    pub fn can_submit(&self) -> bool {
        !self.state.is_loading()
    }

    /// Start a submission. Returns the trimmed username to fetch, or
    /// `None` when the submission was refused or failed validation.
    pub fn begin(&mut self, input: &str) -> Option<String> {
        if !self.can_submit() {
            tracing::debug!("submission ignored while a request is in flight");
            return None;
        }

        match validate_username(input) {
            Ok(username) => {
                self.state = PickerState::Loading;
                Some(username.to_string())
            }
            Err(e) => {
                self.state = PickerState::Failed(e.to_string());
                None
            }
        }
    }

    /// Settle a submission started by [`begin`](Self::begin).
    pub fn finish(&mut self, result: Result<ListEntry, PickError>) {
        self.state = match result {
            Ok(entry) => {
                tracing::info!(title = entry.media.title.preferred(), "picked anime");
                PickerState::Ready(Box::new(entry))
            }
            Err(e) => {
                tracing::warn!(error = %e, "pick failed");
                PickerState::Failed(e.to_string())
            }
        };
    }

    /// Run one full submission: validate, fetch once, pick, settle.
    pub async fn submit(&mut self, input: &str) -> &PickerState {
        let Some(username) = self.begin(input) else {
            return &self.state;
        };

        let result = fetch_random_entry(&self.source, &username, &mut self.rng).await;
        self.finish(result);
        &self.state
    }
}
