// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Log messages for descriptor loading and validation.

use crate::config::ConfigFormat;
use std::fmt;

/// A descriptor file was read and parsed
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub format: ConfigFormat,
}

impl fmt::Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Loaded {} config from '{}'", self.format, self.path)
    }
}

/// A parsed descriptor failed shape validation
pub struct ConfigValidationFailed {
    pub problem_count: usize,
}

impl fmt::Display for ConfigValidationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Descriptor validation failed with {} problem(s)",
            self.problem_count
        )
    }
}
