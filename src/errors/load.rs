// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for loading the descriptor from disk.

use crate::errors::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading and validating a descriptor file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension maps to no supported format
    #[error("unsupported config format '{extension}' for '{path}' (expected yaml, yml, json, or toml)")]
    UnsupportedFormat { path: String, extension: String },

    /// The descriptor parsed but failed validation
    #[error("configuration validation failed:\n{}", format_problems(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_problems(problems: &[ValidationError]) -> String {
    problems
        .iter()
        .map(|problem| problem.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
