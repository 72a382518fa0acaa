// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Environment-specific override resolution.
//!
//! A descriptor may carry named override blocks (`production`, `staging`, ...)
//! holding a partial re-specification of the base configuration. The consuming
//! runtime picks the active environment; this module supplies the merge. The
//! merge is a pure structural operation: present override fields replace the
//! corresponding base fields, absent fields leave the base untouched, and the
//! base value itself is never mutated.

use crate::config::descriptor::{Config, MakeParameters};
use crate::config::MainModules;
use serde::Deserialize;

/// Partial re-specification of the descriptor for one named environment.
///
/// Every field is optional; the shape mirrors the base descriptor so an
/// override block reads the same as the section it replaces.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnvironmentOverride {
    #[serde(default)]
    pub files: Option<FilesOverride>,
    #[serde(default)]
    pub plugins: Option<PluginsOverride>,
}

impl EnvironmentOverride {
    /// True when the block overrides nothing at all
    pub fn is_empty(&self) -> bool {
        self.files.is_none() && self.plugins.is_none()
    }
}

/// Partial override of the file-concatenation targets.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilesOverride {
    #[serde(default)]
    pub javascripts: Option<OutputGroupingOverride>,
    #[serde(default)]
    pub stylesheets: Option<OutputGroupingOverride>,
}

/// Partial override of a single concatenation destination.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OutputGroupingOverride {
    #[serde(rename = "joinTo", default)]
    pub join_to: Option<String>,
}

/// Partial override of the registered plugins.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PluginsOverride {
    #[serde(rename = "elmBrunch", default)]
    pub elm_brunch: Option<ElmPluginOverride>,
}

/// Partial override of the Elm plugin options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ElmPluginOverride {
    #[serde(rename = "mainModules", default)]
    pub main_modules: Option<MainModules>,
    #[serde(rename = "outputFolder", default)]
    pub output_folder: Option<String>,
    #[serde(rename = "makeParameters", default)]
    pub make_parameters: Option<MakeParameters>,
}

impl Config {
    /// Resolve the descriptor for a named environment.
    ///
    /// Returns a new descriptor with the environment's override block merged
    /// over the base: each override field that is present replaces the
    /// matching base field, everything else carries over unchanged. An
    /// environment with no override block resolves to the base as-is.
    ///
    /// # Arguments
    /// * `environment` - active environment name as chosen by the runtime
    pub fn resolve(&self, environment: &str) -> Config {
        let mut resolved = self.clone();
        let Some(override_block) = self.overrides.get(environment) else {
            return resolved;
        };

        if let Some(files) = &override_block.files {
            if let Some(javascripts) = &files.javascripts {
                if let Some(join_to) = &javascripts.join_to {
                    resolved.files.javascripts.join_to = join_to.clone();
                }
            }
            if let Some(stylesheets) = &files.stylesheets {
                if let Some(join_to) = &stylesheets.join_to {
                    resolved.files.stylesheets.join_to = join_to.clone();
                }
            }
        }

        if let Some(plugins) = &override_block.plugins {
            if let Some(elm) = &plugins.elm_brunch {
                let base = &mut resolved.plugins.elm_brunch;
                if let Some(main_modules) = &elm.main_modules {
                    base.main_modules = main_modules.clone();
                }
                if let Some(output_folder) = &elm.output_folder {
                    base.output_folder = output_folder.clone();
                }
                if let Some(make_parameters) = &elm.make_parameters {
                    base.make_parameters = make_parameters.clone();
                }
            }
        }

        resolved
    }
}
