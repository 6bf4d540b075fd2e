//! Classification Session
//!
//! Owns the display state shown to the user and drives one request per
//! accepted submission through a [`Classifier`].
//!
//! Every submission takes a new request token, rejected ones included. When a
//! response arrives for a token that is no longer the latest, it is dropped,
//! so a slow earlier request can never overwrite a newer submission: neither
//! a newer request's results nor a rejection alert shown after it was sent.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use crate::core::classifier::{ClassificationResult, Classifier};
use crate::core::text_normalizer::{self, Rejection};
use crate::display::{self, DisplayRow};
use crate::error::JumuResult;
use crate::i18n::Lang;

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The latest request returned a decodable response
    Settled,
}

/// Blocking, user-level message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    /// Input refused locally, nothing was sent
    Rejected(Rejection),
    /// Transport failure or undecodable response
    Connectivity,
}

impl Alert {
    pub fn message(&self, lang: Lang) -> &'static str {
        match self {
            Alert::Rejected(rejection) => rejection.message(lang),
            Alert::Connectivity => crate::i18n::lookup(lang, "alert.connectivity")
                .unwrap_or("An error occurred while contacting the server."),
        }
    }
}

/// Snapshot read by the rendering layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    pub phase: Phase,
    pub results: Vec<ClassificationResult>,
    pub notice: Option<String>,
    pub alert: Option<Alert>,
}

impl DisplayState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Table rows in submission order
    pub fn rows(&self) -> Vec<DisplayRow> {
        display::rows(&self.results)
    }
}

/// What a call to [`ClassificationSession::submit`] ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(Rejection),
    /// Results (possibly with per-word errors) are on display
    Displayed,
    ConnectivityError,
    /// A newer submission was issued while this one was in flight
    Superseded,
}

/// Single-user classification session
pub struct ClassificationSession {
    classifier: Arc<dyn Classifier>,
    state: Mutex<DisplayState>,
    latest_token: AtomicU64,
}

impl ClassificationSession {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            classifier,
            state: Mutex::new(DisplayState::default()),
            latest_token: AtomicU64::new(0),
        }
    }

    /// Current display state
    pub fn display(&self) -> JumuResult<DisplayState> {
        Ok(self.state.lock()?.clone())
    }

    /// Whether the rendering layer should disable resubmission
    pub fn is_loading(&self) -> JumuResult<bool> {
        Ok(self.state.lock()?.is_loading())
    }

    /// Validate `raw` and, if accepted, classify it.
    ///
    /// A rejected submission still replaces whatever is on display, including
    /// a pending request, whose response will be dropped.
    ///
    /// Rejections and transport failures are reported through the returned
    /// outcome and the display state's alert, never as `Err`. `Err` is only
    /// returned if the state lock is poisoned.
    pub async fn submit(&self, raw: &str) -> JumuResult<SubmitOutcome> {
        let words = match text_normalizer::normalize(raw) {
            Ok(words) => words,
            Err(rejection) => {
                info!("🚫 Input rejected: {}", rejection);
                // Supersedes any request still in flight
                self.latest_token.fetch_add(1, Ordering::SeqCst);
                let mut state = self.state.lock()?;
                state.phase = Phase::Idle;
                state.results.clear();
                state.notice = None;
                state.alert = Some(Alert::Rejected(rejection));
                return Ok(SubmitOutcome::Rejected(rejection));
            }
        };

        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock()?;
            state.phase = Phase::Loading;
            state.results.clear();
            state.notice = None;
            state.alert = None;
        }

        info!(
            "🔍 Classifying {} word(s) via {} (request #{})",
            words.len(),
            self.classifier.name(),
            token
        );
        let response = self.classifier.classify(&words).await;

        let mut state = self.state.lock()?;
        let latest = self.latest_token.load(Ordering::SeqCst);
        if latest != token {
            warn!(
                "⚠️ Dropping stale response: request #{} superseded by #{}",
                token, latest
            );
            return Ok(SubmitOutcome::Superseded);
        }

        match response {
            Ok(envelope) => {
                let failures = envelope.results.iter().filter(|r| r.is_failure()).count();
                debug!(
                    "✅ Request #{} settled: {} result(s), {} per-word failure(s)",
                    token,
                    envelope.results.len(),
                    failures
                );
                if let Some(ref notice) = envelope.notice {
                    info!("📢 Service notice: {}", notice);
                }
                state.phase = Phase::Settled;
                state.results = envelope.results;
                state.notice = envelope.notice;
                state.alert = None;
                Ok(SubmitOutcome::Displayed)
            }
            Err(e) => {
                warn!("❌ Classification request #{} failed: {}", token, e);
                state.phase = Phase::Idle;
                state.results.clear();
                state.notice = None;
                state.alert = Some(Alert::Connectivity);
                Ok(SubmitOutcome::ConnectivityError)
            }
        }
    }
}
