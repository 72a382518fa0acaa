// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors that can occur during descriptor validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A source category maps to a blank bundle destination
    EmptyBundleDestination {
        /// The source category with the blank `joinTo`
        category: String,
    },
    /// The plugin has no entry modules to compile
    NoMainModules,
    /// An entry-module path is blank
    EmptyMainModule,
    /// The same entry module is listed more than once
    DuplicateMainModule {
        /// The duplicated module path
        module: String,
    },
    /// The plugin's output folder is blank
    EmptyOutputFolder,
    /// A named environment override block overrides nothing
    EmptyOverride {
        /// The environment whose block is empty
        environment: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyBundleDestination { category } => {
                write!(
                    f,
                    "Source category '{}' has an empty joinTo destination",
                    category
                )
            }
            ValidationError::NoMainModules => {
                write!(f, "Plugin 'elmBrunch' lists no entry modules in mainModules")
            }
            ValidationError::EmptyMainModule => {
                write!(f, "Plugin 'elmBrunch' has a blank entry-module path")
            }
            ValidationError::DuplicateMainModule { module } => {
                write!(f, "Entry module '{}' is listed more than once", module)
            }
            ValidationError::EmptyOutputFolder => {
                write!(f, "Plugin 'elmBrunch' has an empty outputFolder")
            }
            ValidationError::EmptyOverride { environment } => {
                write!(
                    f,
                    "Override block for environment '{}' overrides nothing; is the section misspelled?",
                    environment
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
