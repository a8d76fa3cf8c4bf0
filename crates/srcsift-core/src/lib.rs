//! srcsift-core: Source-file classification and exclusion matching for tree scanners.

pub mod classify;
pub mod config;
pub mod error;
pub mod exclude;
pub mod logging;

pub use classify::{is_go_file, FileInfo, SourceFileClassifier};
pub use config::Config;
pub use error::{Error, Result};
pub use exclude::{ExclusionRule, ExclusionSet};
