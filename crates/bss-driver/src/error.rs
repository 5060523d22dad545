//! Error types for bss-driver.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for demo runs.
pub type Result<T> = std::result::Result<T, DemoError>;

/// Errors that can occur while running the demo.
///
/// Storage and formatting cannot fail; only emitting the report can.
#[derive(Error, Diagnostic, Debug)]
pub enum DemoError {
    /// Writing a report line to the output stream failed.
    #[error("Failed to write report: {0}")]
    #[diagnostic(
        code(bss::output),
        help("the output stream was probably closed before the report was written")
    )]
    Output(#[from] std::io::Error),
}
