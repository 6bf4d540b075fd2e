//! Classification Service Client
//!
//! Wire types for `POST {base}/classify` and the [`Classifier`] trait the
//! session talks to. [`HttpClassifier`] is the reqwest implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Morphological plural class reported by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PluralLabel {
    /// جمع التكسير
    Broken,
    /// جمع المؤنث السالم
    SoundFeminine,
    /// جمع المذكر السالم
    SoundMasculine,
    /// Any other tag, passed through uninterpreted
    Other(String),
}

impl PluralLabel {
    pub fn as_str(&self) -> &str {
        match self {
            PluralLabel::Broken => "broken",
            PluralLabel::SoundFeminine => "sound_feminine",
            PluralLabel::SoundMasculine => "sound_masculine",
            PluralLabel::Other(tag) => tag,
        }
    }

    /// Tag with the first underscore shown as a space (`sound feminine`)
    pub fn display_name(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }

    /// Marker shown next to the label
    pub fn glyph(&self) -> Option<&'static str> {
        match self {
            PluralLabel::Broken => Some("🧩"),
            PluralLabel::SoundFeminine => Some("👩‍🏫"),
            PluralLabel::SoundMasculine => Some("👨‍💼"),
            PluralLabel::Other(_) => None,
        }
    }
}

impl From<String> for PluralLabel {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "broken" => PluralLabel::Broken,
            "sound_feminine" => PluralLabel::SoundFeminine,
            "sound_masculine" => PluralLabel::SoundMasculine,
            _ => PluralLabel::Other(tag),
        }
    }
}

impl From<PluralLabel> for String {
    fn from(label: PluralLabel) -> Self {
        match label {
            PluralLabel::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PluralLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome for one submitted word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassificationResult {
    /// The service could not classify this word; siblings are unaffected
    Failed { word: String, error: String },
    Classified {
        word: String,
        label: PluralLabel,
        /// Percentage in [0, 100]
        confidence: f64,
    },
}

impl ClassificationResult {
    pub fn word(&self) -> &str {
        match self {
            ClassificationResult::Failed { word, .. } => word,
            ClassificationResult::Classified { word, .. } => word,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ClassificationResult::Failed { .. })
    }
}

/// Request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub words: Vec<String>,
}

/// Response body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Ordered like the submitted words
    #[serde(default)]
    pub results: Vec<ClassificationResult>,
    /// Advisory message, e.g. that some words were skipped server-side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Transport-level failures. Per-word failures are data, not errors.
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Undecodable response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Trait for classification backends
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify an ordered list of already validated words
    async fn classify(&self, words: &[String]) -> Result<ResponseEnvelope, ClassifyError>;

    /// Get the backend name
    fn name(&self) -> &str;
}

/// Classifier backed by the HTTP service
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClassifier {
    /// Create a client for the given API base, e.g. `http://127.0.0.1:5000/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a classifier on a preconfigured reqwest client
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Create new HTTP classifier from config
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.api_base.clone())
    }

    /// Full endpoint URL
    pub fn endpoint(&self) -> String {
        format!("{}/classify", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, words: &[String]) -> Result<ResponseEnvelope, ClassifyError> {
        let url = self.endpoint();
        debug!("📤 POST {} ({} words)", url, words.len());

        // Single attempt, no timeout
        let response = self
            .client
            .post(&url)
            .json(&ClassifyRequest {
                words: words.to_vec(),
            })
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            warn!("❌ Classification API Error ({}): {}", status, body_text);
            return Err(ClassifyError::Status {
                status,
                body: body_text,
            });
        }

        debug!("📥 Classification raw body: {}", body_text);
        parse_envelope(&body_text)
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Decode a response body
pub fn parse_envelope(body: &str) -> Result<ResponseEnvelope, ClassifyError> {
    serde_json::from_str(body).map_err(|e| {
        warn!("❌ Failed to deserialize classification response: {}", e);
        ClassifyError::Decode(e)
    })
}
