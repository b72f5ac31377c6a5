//! Diagnostics and error reporting for scenarios
//!
//! This module provides utilities for collecting analyzer findings and
//! rendering configuration and runtime errors for users.

use crate::error::SimError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A single finding, optionally tied to a named body
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub message: String,
    pub body: Option<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, body: Option<&str>) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            message: message.into(),
            body: body.map(str::to_string),
        }
    }

    pub fn warning(message: impl Into<String>, body: Option<&str>) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            message: message.into(),
            body: body.map(str::to_string),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
        };
        match &self.body {
            Some(body) => write!(f, "{}: {} (body '{}')", label, self.message, body),
            None => write!(f, "{}: {}", label, self.message),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| !d.is_error())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Format a scenario loading error, naming the file when known
pub fn format_config_error(error: &SimError, path: Option<&str>) -> String {
    match path {
        Some(path) => format!("Configuration error in {}: {}", path, error),
        None => format!("Configuration error: {}", error),
    }
}

/// Format a runtime error with context
pub fn format_runtime_error(error: &dyn std::error::Error) -> String {
    format!("Runtime error: {}", error)
}
