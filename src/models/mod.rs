//! Data model for monitored targets

pub mod target;

pub use target::{ParsedLine, Target};
