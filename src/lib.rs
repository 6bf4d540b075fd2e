//! Jumu Library
//!
//! Input validation and request orchestration for classifying Arabic plurals
//! as broken, sound feminine or sound masculine.

pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod session;
