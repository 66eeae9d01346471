//! Reactive state shared with the page components

pub mod blockchain;
