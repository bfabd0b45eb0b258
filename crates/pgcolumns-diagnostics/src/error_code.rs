//! Error codes following a structured numbering system
//!
//! Error code ranges:
//! - PGC0001-PGC0099: Registry errors (registration, lookup)
//! - PGC0100-PGC0199: Generation diagnostics (SQL rendering)
//! - PGC0200-PGC0299: Schema description errors (table and column specs)
//! - PGC0400-PGC0499: System errors (configuration, invalid definitions)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a registry error (0001-0099)
    pub const fn is_registry_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a generation diagnostic (0100-0199)
    pub const fn is_generation_diagnostic(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a schema description error (0200-0299)
    pub const fn is_schema_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is a system error (0400-0499)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PGC{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Registry errors (0001-0099)
    map.insert(1, ErrorInfo::new("Duplicate column type registration")
        .with_help("Every semantic type name can be registered only once"));
    map.insert(2, ErrorInfo::new("Registry is frozen")
        .with_help("Register all column types before freezing the registry"));

    // Generation diagnostics (0100-0199)
    map.insert(100, ErrorInfo::new("Validated geometry on non-polygon source")
        .with_help("validated_geometry always produces polygon geometries"));

    // Schema description errors (0200-0299)
    map.insert(200, ErrorInfo::new("Unknown column type"));
    map.insert(201, ErrorInfo::new("Table has no columns"));

    // System errors (0400-0499)
    map.insert(400, ErrorInfo::new("Internal error"));
    map.insert(402, ErrorInfo::new("Invalid column type definition"));

    map
});

// Registry errors
pub const PGC0001: ErrorCode = ErrorCode::new(1);
pub const PGC0002: ErrorCode = ErrorCode::new(2);

// Generation diagnostics
pub const PGC0100: ErrorCode = ErrorCode::new(100);

// Schema description errors
pub const PGC0200: ErrorCode = ErrorCode::new(200);
pub const PGC0201: ErrorCode = ErrorCode::new(201);

// System errors
pub const PGC0400: ErrorCode = ErrorCode::new(400);
pub const PGC0402: ErrorCode = ErrorCode::new(402);
