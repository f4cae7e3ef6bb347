pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod git;
pub mod release;
pub mod render;
pub mod ui;

pub use analyzer::{ChangelogAnalyzer, ChangelogReport};
pub use error::{ChangelogError, Result};
