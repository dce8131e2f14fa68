// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // config loading + runtime builder
pub mod corpus;     // corpus loading and bucketizing
pub mod engine;     // stage reduction and orchestration
pub mod errors;     // error handling
pub mod observability;
pub mod traits;     // loader / executor / filter seams
