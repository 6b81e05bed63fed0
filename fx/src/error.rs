//! Error types for behavior setup and preference storage.
//!
//! Nothing here is fatal to the page: setup errors disable one behavior and
//! storage errors fall back to defaults. Both exist so the caller can log a
//! precise diagnostic and so tests can assert which path was taken.

use crate::site::Behavior;

/// A behavior could not bind to the markup it needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{behavior}: required element `{selector}` is missing")]
    MissingElement { behavior: Behavior, selector: &'static str },
    #[error("{behavior}: selector `{selector}` matched nothing")]
    EmptySelection { behavior: Behavior, selector: &'static str },
}

impl SetupError {
    #[must_use]
    pub fn behavior(&self) -> Behavior {
        match self {
            Self::MissingElement { behavior, .. } | Self::EmptySelection { behavior, .. } => *behavior,
        }
    }
}

/// Failure reading or writing the durable preference store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference read failed: {0}")]
    Read(String),
    #[error("preference write failed: {0}")]
    Write(String),
}
