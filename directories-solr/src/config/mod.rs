//! Runtime configuration and dependency wiring.

mod dependencies;

pub use dependencies::{AppSettings, Dependencies};
