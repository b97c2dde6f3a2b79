use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// A structured, non-fatal report surfaced to the host for troubleshooting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Category, e.g. `"credential-injection"` or `"compositor"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub level: DiagnosticLevel,
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Diagnostic {
    pub fn new(
        kind: impl Into<String>,
        level: DiagnosticLevel,
        message: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            kind: kind.into(),
            level,
            message: message.into(),
            data,
        }
    }

    /// Mirror the record into the `tracing` pipeline at its own level.
    pub fn log(&self) {
        let kind = self.kind.as_str();
        let data = &self.data;
        match self.level {
            DiagnosticLevel::Debug => tracing::debug!(kind, %data, "{}", self.message),
            DiagnosticLevel::Info => tracing::info!(kind, %data, "{}", self.message),
            DiagnosticLevel::Warn => tracing::warn!(kind, %data, "{}", self.message),
            DiagnosticLevel::Error => tracing::error!(kind, %data, "{}", self.message),
        }
    }
}

/// A bounded queue of recent diagnostics. The oldest entry is dropped when full.
#[derive(Debug)]
pub struct DiagnosticQueue {
    items: VecDeque<Diagnostic>,
    capacity: usize,
}

impl DiagnosticQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        if self.capacity == 0 {
            return;
        }
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(diagnostic);
    }

    /// Oldest first.
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

impl Default for DiagnosticQueue {
    fn default() -> Self {
        Self::new(64)
    }
}
