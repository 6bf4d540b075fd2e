//! Arabic Stop Words
//!
//! Particles, prepositions, pronouns and conjunctions that are never sent
//! for plural classification.

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Raw stop word table
const STOP_WORDS: &[&str] = &[
    "إلى", "من", "عن", "على", "في", "ب", "ك", "ل",
    "حتى", "ثم", "إن", "أن", "لكن", "لا", "لم", "لن",
    "ما", "هل", "لما", "إذا", "كلما", "أو", "بل", "و",
    "ف", "نحو", "مثلاً", "كذا", "مع", "عند", "قبل", "بعد",
    "أمام", "خلف", "إذ", "إذما", "إذن", "آه", "آها", "إلي",
    "إليك", "إليكم", "إليكما", "إليكن", "أم", "أما", "إما", "إنا",
    "أنا", "أنتم", "أنتما", "أنتن", "أنى", "أولئك", "أولاء", "إي",
    "إياك", "إياكم", "إياكما", "إياكن", "إياه", "إياها", "إياهم", "إياهما",
    "إياهن", "إياي", "إيانا", "إذًا", "بخٍ", "بس", "بعض", "بك",
    "بكم", "بكما", "بكن", "به", "بها", "بهم", "بهما", "بهن",
    "بي", "بنا", "بين", "بيد", "تلك", "تلكم", "تلكما", "ثمة",
    "حاشا", "حبذا", "حيث", "حيثما", "حين", "خلا", "دون", "ذا",
    "ذات", "ذاك", "ذو", "ذي", "ذين", "ذلك", "ذلكم", "ذلكما",
    "ذه", "هذه", "هكذا", "هلا", "هم", "هما", "هن", "هو",
    "هي", "هيا", "هيت", "هيهات", "وا", "وإذا", "وإن", "والذي",
    "والتي", "ولا", "ولكن", "ولو", "وما", "ومن", "وهو", "يا",
    "أجل", "أجمع", "أخ", "أخا", "أخو", "أف", "أقل", "أمس",
    "أول", "أين", "أي", "أيا", "بخ", "تحت", "جلل", "خلال",
    "رغم", "سوف", "سوى", "شبه", "صه", "ضد", "ضمن", "طرا",
    "عدا", "عدد", "عسى", "عل", "عليك", "غير", "فإذا", "فإن",
    "فقط", "قد", "كأن", "كأنما", "كأي", "كأين", "كاد", "كان",
    "كذلك", "كل", "كلا", "كلتا", "كلم", "كم", "كي", "كيف",
    "كيفما", "لاسيما", "لات", "لدى", "لست", "لعل", "لكي", "لو",
    "لولا", "لوما", "ليت", "ليس", "ماذا", "مازال", "متى", "مثل",
    "مثلا", "مد", "مذ", "معاذ", "مما", "منذ", "مه", "مهما",
    "نحن", "نعم", "ها", "هاتان", "هاته", "هاتي", "هاتهما", "هاتيكم",
    "هاك", "هاكم", "هانا", "هؤلاء", "هاهنا", "واحد", "وراء", "وسط",
    "وهي", "ربما",
];

lazy_static! {
    static ref STOP_WORD_SET: HashSet<&'static str> = STOP_WORDS.iter().copied().collect();
}

/// Exact-match membership test. No diacritic or hamza folding is applied.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Number of distinct stop words
pub fn len() -> usize {
    STOP_WORD_SET.len()
}

/// Iterate the distinct stop words in unspecified order
pub fn iter() -> impl Iterator<Item = &'static str> {
    STOP_WORD_SET.iter().copied()
}
