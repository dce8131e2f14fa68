// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod execution;
mod load;

pub use config::{ConfigError, ValidationError};
pub use execution::{ExecutionError, PipelineError, PipelinePhase};
pub use load::LoadError;
