pub mod changelog;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod release;
pub mod ui;
pub mod version;
pub mod walker;

pub use error::{CommitlogError, Result};
