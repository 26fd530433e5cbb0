//! Enhanced error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Proper exit codes for CI/CD
//!
//! Measurement-side failures (missing directories, unreadable manifests) are
//! deliberately NOT errors; they degrade into placeholder report content.
//! Only report persistence failures and unusable invocations surface here.

use std::path::PathBuf;
use thiserror::Error;

use crate::report::store::StoreError;

/// Enhanced depsize errors with contextual suggestions
#[derive(Error, Debug)]
pub enum DepsizeError {
    /// Project root directory does not exist or is not a directory
    #[error("Project root not found: {path}")]
    ProjectRootNotFound {
        /// Path that was requested as the project root
        path: PathBuf,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Report persistence failed (current slot or backup slot)
    #[error("report store error: {0}")]
    Store(#[from] StoreError),
}

impl DepsizeError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// Returns a user-friendly suggestion for how to fix the error, if
    /// available.
    ///
    /// # Examples
    ///
    /// ```
    /// use depsize::error::DepsizeError;
    /// use std::path::PathBuf;
    ///
    /// let error = DepsizeError::ProjectRootNotFound {
    ///     path: PathBuf::from("/missing"),
    /// };
    ///
    /// let suggestion = error.suggestion();
    /// assert!(suggestion.is_some());
    /// assert!(suggestion.unwrap().contains("--project-root"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ProjectRootNotFound { path } => Some(format!(
                "Ensure {} exists, or pass a different directory with --project-root",
                path.display()
            )),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
            Self::Store(e) => Some(match e {
                StoreError::Backup { path, .. } => format!(
                    "Check write permissions for the backup slot at {}",
                    path.display()
                ),
                StoreError::Write { path, .. } => format!(
                    "Check write permissions for the report file at {}",
                    path.display()
                ),
            }),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes following sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use depsize::error::DepsizeError;
    /// use std::path::PathBuf;
    ///
    /// let error = DepsizeError::ProjectRootNotFound {
    ///     path: PathBuf::from("/missing"),
    /// };
    ///
    /// assert_eq!(error.exit_code(), 66); // EX_NOINPUT
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ProjectRootNotFound { .. } => 66, // EX_NOINPUT (sysexits.h)
            Self::Io { .. } => 74,                  // EX_IOERR
            Self::Store(_) => 74,                   // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        // Main error message
        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        // Try to downcast to DepsizeError for suggestions
        if let Some(ds_error) = error.downcast_ref::<DepsizeError>() {
            if let Some(suggestion) = ds_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(ds_error) = error.downcast_ref::<DepsizeError>() {
            ds_error.exit_code()
        } else {
            1 // Generic error
        }
    }
}
