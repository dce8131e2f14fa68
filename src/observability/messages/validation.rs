// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration validation failures.

use crate::errors::ValidationError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A configuration was rejected before any stage ran.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ConfigRejected<'a> {
    pub error_count: usize,
    pub first_error: &'a ValidationError,
}

impl Display for ConfigRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration rejected with {} problem(s), first: {}",
            self.error_count, self.first_error
        )
    }
}

impl StructuredLog for ConfigRejected<'_> {
    fn log(&self) {
        tracing::error!(
            error_count = self.error_count,
            first_error = %self.first_error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "config_rejected",
            span_name = name,
            error_count = self.error_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejected_display() {
        let error = ValidationError::ZeroWorkers;
        let msg = ConfigRejected {
            error_count: 2,
            first_error: &error,
        };
        assert_eq!(
            msg.to_string(),
            "Configuration rejected with 2 problem(s), first: worker_count must be at least 1"
        );
    }
}
