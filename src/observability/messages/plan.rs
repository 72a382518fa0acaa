// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Log messages for environment resolution and build-plan assembly.

use std::fmt;

/// An environment name was resolved against the descriptor's overrides
pub struct EnvironmentResolved<'a> {
    pub environment: &'a str,
    /// Whether the descriptor actually carries an override for it
    pub known: bool,
}

impl fmt::Display for EnvironmentResolved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.known {
            write!(f, "Applied override block for environment '{}'", self.environment)
        } else {
            write!(
                f,
                "No override block for environment '{}', using base config",
                self.environment
            )
        }
    }
}

/// An effective build plan was assembled from a resolved descriptor
pub struct BuildPlanReady {
    pub bundle_count: usize,
    pub module_count: usize,
}

impl fmt::Display for BuildPlanReady {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Build plan ready: {} bundle target(s), {} entry module(s)",
            self.bundle_count, self.module_count
        )
    }
}
