//! Style loading.
//!
//! - config.rs: JSON style files via serde_json

pub mod config;

pub use config::{load_style, parse_style};
