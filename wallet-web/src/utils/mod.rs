//! Formatting and request-ordering helpers for the pages

pub mod format;
pub mod latest;
