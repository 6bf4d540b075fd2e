//! Core processing modules
//!
//! Input normalization, the stop word table and the classification service
//! client.

pub mod classifier;
pub mod stopwords;
pub mod text_normalizer;

pub use classifier::{
    ClassificationResult, Classifier, ClassifyError, HttpClassifier, PluralLabel,
    ResponseEnvelope,
};
pub use text_normalizer::{normalize, Rejection};
