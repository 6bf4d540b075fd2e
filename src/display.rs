//! Result table model
//!
//! Derives what the rendering layer shows for each classification result.

use serde::Serialize;

use crate::core::classifier::{ClassificationResult, PluralLabel};

/// One row of the results table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub word: String,
    pub cell: DisplayCell,
}

/// Label and confidence columns of a row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayCell {
    Classified {
        label: PluralLabel,
        /// Two decimals with a percent sign, e.g. `97.50%`
        confidence_text: String,
        /// Progress bar fill, 0..=100
        bar_percent: u8,
    },
    /// Inline per-word error
    Error { message: String },
}

impl From<&ClassificationResult> for DisplayRow {
    fn from(result: &ClassificationResult) -> Self {
        let cell = match result {
            ClassificationResult::Failed { error, .. } => DisplayCell::Error {
                message: error.clone(),
            },
            ClassificationResult::Classified {
                label, confidence, ..
            } => DisplayCell::Classified {
                label: label.clone(),
                confidence_text: format!("{:.2}%", confidence),
                bar_percent: bar_percent(*confidence),
            },
        };
        Self {
            word: result.word().to_string(),
            cell,
        }
    }
}

/// Rows in result order
pub fn rows(results: &[ClassificationResult]) -> Vec<DisplayRow> {
    results.iter().map(DisplayRow::from).collect()
}

fn bar_percent(confidence: f64) -> u8 {
    if confidence.is_nan() {
        return 0;
    }
    confidence.round().clamp(0.0, 100.0) as u8
}

/// Render a text progress bar of `width` cells
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
