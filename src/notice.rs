//! Client-visible planner diagnostics.
//!
//! Support handlers report their outcome through a notice buffer owned by
//! the planning context. Warnings flag wiring problems (signature drift),
//! notices report expected branches. Everything is mirrored to `tracing` so
//! the host log sees the same messages the client does.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Notice,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

/// Append-only buffer of diagnostics emitted during one planning pass.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    entries: Vec<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.entries.push(Notice {
            severity: Severity::Warning,
            message,
        });
    }

    pub fn notice(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("{}", message);
        self.entries.push(Notice {
            severity: Severity::Notice,
            message,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Notice> {
        self.entries
            .iter()
            .filter(|n| n.severity == Severity::Warning)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
