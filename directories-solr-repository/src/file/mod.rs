//! File-backed entity source.

mod json_source;

pub use json_source::JsonFileEntitySource;
