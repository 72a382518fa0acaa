// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation for descriptor shape and content.
//!
//! In the original setup the consuming runtime did all validation implicitly;
//! here the checks are explicit so a malformed descriptor is rejected before
//! anything is handed to the runtime. Checks run in a fixed order and all
//! problems are collected before reporting, so one pass over the file surfaces
//! every mistake at once:
//!
//! 1. **Bundle targets**: every source category names a non-empty destination
//! 2. **Plugin options**: at least one entry module, no blanks, no duplicates,
//!    and a non-empty output folder
//! 3. **Override blocks**: every named environment overrides at least one
//!    field (an empty block is almost always a misspelled section)

use crate::config::Config;
use crate::errors::ValidationError;
use std::collections::HashSet;

/// Validate a loaded descriptor.
///
/// Returns all problems found, or `Ok(())` when the descriptor is usable.
pub fn validate_config(cfg: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_bundle_targets(cfg, &mut errors);
    validate_plugin_options(cfg, &mut errors);
    validate_override_blocks(cfg, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_bundle_targets(cfg: &Config, errors: &mut Vec<ValidationError>) {
    if cfg.files.javascripts.join_to.trim().is_empty() {
        errors.push(ValidationError::EmptyBundleDestination {
            category: "javascripts".to_string(),
        });
    }
    if cfg.files.stylesheets.join_to.trim().is_empty() {
        errors.push(ValidationError::EmptyBundleDestination {
            category: "stylesheets".to_string(),
        });
    }
}

fn validate_plugin_options(cfg: &Config, errors: &mut Vec<ValidationError>) {
    let plugin = &cfg.plugins.elm_brunch;

    if plugin.main_modules.is_empty() {
        errors.push(ValidationError::NoMainModules);
    }

    let mut seen = HashSet::new();
    for module in plugin.main_modules.iter() {
        if module.trim().is_empty() {
            errors.push(ValidationError::EmptyMainModule);
        } else if !seen.insert(module.as_str()) {
            errors.push(ValidationError::DuplicateMainModule {
                module: module.clone(),
            });
        }
    }

    if plugin.output_folder.trim().is_empty() {
        errors.push(ValidationError::EmptyOutputFolder);
    }
}

fn validate_override_blocks(cfg: &Config, errors: &mut Vec<ValidationError>) {
    for (environment, block) in &cfg.overrides {
        if block.is_empty() {
            errors.push(ValidationError::EmptyOverride {
                environment: environment.clone(),
            });
        }
    }
}
