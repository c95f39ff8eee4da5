//! Parse errors and non-fatal notices
//!
//! Every diagnostic carries an [`ErrorContext`] so a message can point at the
//! file, the material being built and the offending line.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Where in the input a diagnostic was raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Source label, usually the file name
    pub source: Option<String>,
    /// Name of the current material, `None` if no material exists yet
    pub material: Option<String>,
    /// 1-based line number
    pub line: usize,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "File: {}  ", source)?;
        }
        write!(
            f,
            "Material: {}  Line: {}",
            self.material.as_deref().unwrap_or("none"),
            self.line
        )
    }
}

/// Fatal MTL parse errors
#[derive(Error, Debug)]
pub enum MtlError {
    /// Keyword is not part of the MTL statement set
    #[error("MTL file format error ({context}): Unrecognized statement: {keyword}")]
    UnrecognizedStatement {
        /// Keyword as written in the file
        keyword: String,
        /// Location
        context: ErrorContext,
    },

    /// Supported statement without its required arguments
    #[error("MTL file format error ({context}): too few arguments for {statement} (found {found}, expected {expected}), usage: {usage}")]
    MissingArguments {
        /// Statement keyword
        statement: &'static str,
        /// Required argument count
        expected: usize,
        /// Arguments present
        found: usize,
        /// Usage hint
        usage: &'static str,
        /// Location
        context: ErrorContext,
    },

    /// Argument that should be a number could not be converted
    #[error("MTL file format error ({context}): invalid numeric value '{token}' for {statement}")]
    InvalidNumber {
        /// Statement keyword
        statement: &'static str,
        /// Offending token
        token: String,
        /// Location
        context: ErrorContext,
    },

    /// MTL file could not be read
    #[error("Failed to read MTL file {}: {source}", .path.display())]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl MtlError {
    /// Location of the error, `None` for IO failures
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::UnrecognizedStatement { context, .. }
            | Self::MissingArguments { context, .. }
            | Self::InvalidNumber { context, .. } => Some(context),
            Self::Io { .. } => None,
        }
    }
}

/// Non-fatal diagnostic for a recognized statement the parser does not evaluate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Statement keyword
    pub statement: &'static str,
    /// Which form was skipped
    pub message: String,
    /// Location
    pub context: ErrorContext,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MTL file statement not implemented ({}): {}",
            self.context, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(source: Option<&str>, material: Option<&str>, line: usize) -> ErrorContext {
        ErrorContext {
            source: source.map(str::to_string),
            material: material.map(str::to_string),
            line,
        }
    }

    #[test]
    fn test_context_display_with_source() {
        let ctx = context(Some("walls.mtl"), Some("Brick"), 7);
        assert_eq!(ctx.to_string(), "File: walls.mtl  Material: Brick  Line: 7");
    }

    #[test]
    fn test_context_display_without_material() {
        let ctx = context(None, None, 1);
        assert_eq!(ctx.to_string(), "Material: none  Line: 1");
    }

    #[test]
    fn test_unrecognized_statement_message() {
        let error = MtlError::UnrecognizedStatement {
            keyword: "foobar".to_string(),
            context: context(None, Some("default"), 3),
        };
        assert_eq!(
            error.to_string(),
            "MTL file format error (Material: default  Line: 3): Unrecognized statement: foobar"
        );
        assert_eq!(error.context().map(|c| c.line), Some(3));
    }

    #[test]
    fn test_notice_message() {
        let notice = Notice {
            statement: "Kd",
            message: "Kd".to_string(),
            context: context(None, Some("default"), 2),
        };
        assert!(notice.to_string().ends_with("): Kd"));
    }
}
