//! Internationalization (i18n) Support
//!
//! User-facing messages in Arabic and English. Arabic is the default, matching
//! the audience of the classifier.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use tracing::info;

/// Supported message languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ar,
    En,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Ar => "ar",
            Lang::En => "en",
        }
    }
}

/// Current active language
static CURRENT_LANG: RwLock<Lang> = RwLock::new(Lang::Ar);

const AR_MESSAGES: &[(&str, &str)] = &[
    (
        "rejection.ambiguous_delimiter",
        "⚠️ يرجى الفصل بين الكلمات باستخدام فواصل فقط وليس فراغات.",
    ),
    ("rejection.no_valid_words", "يرجى إدخال كلمات صالحة للتصنيف."),
    ("alert.connectivity", "حدث خطأ أثناء الاتصال بالخادم."),
    ("status.loading", "...يتم التصنيف"),
    ("results.title", "📊 النتائج:"),
    ("column.word", "الكلمة"),
    ("column.label", "التصنيف"),
    ("column.confidence", "نسبة الثقة"),
    ("cell.unavailable", "غير متوفر"),
];

const EN_MESSAGES: &[(&str, &str)] = &[
    (
        "rejection.ambiguous_delimiter",
        "⚠️ Please separate words with commas only, not spaces.",
    ),
    ("rejection.no_valid_words", "Please enter valid words to classify."),
    ("alert.connectivity", "An error occurred while contacting the server."),
    ("status.loading", "Classifying..."),
    ("results.title", "📊 Results:"),
    ("column.word", "Word"),
    ("column.label", "Label"),
    ("column.confidence", "Confidence"),
    ("cell.unavailable", "unavailable"),
];

/// Set the active language
pub fn set_language(lang: Lang) {
    let mut current = CURRENT_LANG.write().expect("i18n lock poisoned");
    *current = lang;
    info!("🌐 Language set to: {}", lang.code());
}

/// Get the current language
pub fn current_language() -> Lang {
    *CURRENT_LANG.read().expect("i18n lock poisoned")
}

/// Look up a message in a specific language
pub fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    let catalog = match lang {
        Lang::Ar => AR_MESSAGES,
        Lang::En => EN_MESSAGES,
    };
    catalog
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, message)| *message)
}

/// Translate a key in the current language (gettext-style)
pub fn tr(key: &str) -> String {
    // Fallback to key itself
    lookup(current_language(), key)
        .unwrap_or(key)
        .to_string()
}
