//! Harness error taxonomy.
//!
//! Every variant here is recovered before it can reach the process
//! boundary: a filter pattern that fails to compile degrades to literal
//! substring matching, and an unwritable XML report is skipped. The only
//! outcome visible to the host process is the run's exit code.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MtError {
    /// The translated filter pattern did not compile as a regular
    /// expression. The matcher falls back to substring containment.
    #[error("invalid filter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The XML report file could not be created or written.
    #[error("cannot write XML report: {0}")]
    ReportWrite(#[from] std::io::Error),
}
