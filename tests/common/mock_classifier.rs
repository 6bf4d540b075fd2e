//! Mock Classification Backend for Testing
//!
//! Returns scripted envelopes and records every request it receives.

use async_trait::async_trait;
use jumu::core::{ClassificationResult, Classifier, ClassifyError, PluralLabel, ResponseEnvelope};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock classifier with per-word scripted results
pub struct MockClassifier {
    /// Result template per word; unknown words are classified as broken
    pub scripted: HashMap<String, ClassificationResult>,
    /// Delay before answering a request whose first word matches
    pub delays: HashMap<String, Duration>,
    /// Notice attached to every response
    pub notice: Option<String>,
    /// Fail every request at the transport level
    pub fail: AtomicBool,
    /// Record all word lists received (for verification)
    pub requests: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self {
            scripted: HashMap::new(),
            delays: HashMap::new(),
            notice: None,
            fail: AtomicBool::new(false),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn classify_as(mut self, word: &str, label: PluralLabel, confidence: f64) -> Self {
        self.scripted.insert(
            word.to_string(),
            ClassificationResult::Classified {
                word: word.to_string(),
                label,
                confidence,
            },
        );
        self
    }

    pub fn fail_word(mut self, word: &str, error: &str) -> Self {
        self.scripted.insert(
            word.to_string(),
            ClassificationResult::Failed {
                word: word.to_string(),
                error: error.to_string(),
            },
        );
        self
    }

    pub fn with_delay(mut self, first_word: &str, delay: Duration) -> Self {
        self.delays.insert(first_word.to_string(), delay);
        self
    }

    pub fn with_notice(mut self, notice: &str) -> Self {
        self.notice = Some(notice.to_string());
        self
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn classify(&self, words: &[String]) -> Result<ResponseEnvelope, ClassifyError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(words.to_vec());

        if let Some(delay) = words.first().and_then(|w| self.delays.get(w)) {
            tokio::time::sleep(*delay).await;
        }

        if self.fail.load(Ordering::SeqCst) {
            let err = serde_json::from_str::<ResponseEnvelope>("<html>502</html>").unwrap_err();
            return Err(ClassifyError::Decode(err));
        }

        let results = words
            .iter()
            .map(|w| {
                self.scripted
                    .get(w)
                    .cloned()
                    .unwrap_or_else(|| ClassificationResult::Classified {
                        word: w.clone(),
                        label: PluralLabel::Broken,
                        confidence: 50.0,
                    })
            })
            .collect();

        Ok(ResponseEnvelope {
            results,
            notice: self.notice.clone(),
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
