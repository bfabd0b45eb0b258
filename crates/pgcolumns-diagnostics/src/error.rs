//! Diagnostics and error types

use crate::{ErrorCode, PGC0001, PGC0002, PGC0200, PGC0201, PGC0402};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - generation cannot proceed
    Error,
    /// Warning - potential issue but generation continues
    Warning,
    /// Information - informational message
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message attached to a schema object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Schema object the diagnostic is about, usually a quoted table name
    pub subject: Option<String>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            subject: None,
            help: None,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            subject: None,
            help: None,
        }
    }

    /// Set the subject
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(help) = &self.help {
            write!(f, " ({})", help)?;
        }
        Ok(())
    }
}

/// Main pgcolumns error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// A semantic type name was registered twice
    #[error("{code}: duplicate column type registration: {name}", code = PGC0001)]
    DuplicateColumnType { name: String },

    /// Registration was attempted after the registry was frozen
    #[error("{code}: column type registry is frozen, cannot register {name}", code = PGC0002)]
    RegistryFrozen { name: String },

    /// A column references a semantic type name the registry does not know
    #[error(
        "{code}: unknown column type '{type_name}' for column \"{column}\" in {table}",
        code = PGC0200
    )]
    UnknownColumnType {
        table: String,
        column: String,
        type_name: String,
    },

    /// A statement was requested for a table without columns
    #[error("{code}: table {table} has no columns", code = PGC0201)]
    EmptyTable { table: String },

    /// A declarative column type definition could not be read
    #[error("{code}: invalid column type definition '{name}': {message}", code = PGC0402)]
    InvalidDefinition { name: String, message: String },
}

impl SchemaError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::DuplicateColumnType { .. } => PGC0001,
            Self::RegistryFrozen { .. } => PGC0002,
            Self::UnknownColumnType { .. } => PGC0200,
            Self::EmptyTable { .. } => PGC0201,
            Self::InvalidDefinition { .. } => PGC0402,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code(), self.to_string());
        match self {
            Self::UnknownColumnType { table, .. } | Self::EmptyTable { table } => {
                diag.with_subject(table.clone())
            }
            _ => match self.code().info().help {
                Some(help) => diag.with_help(help),
                None => diag,
            },
        }
    }
}
