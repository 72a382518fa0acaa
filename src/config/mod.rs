// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod build_plan;
mod descriptor;
mod loader;
mod main_modules;
mod overrides;
mod validation;

pub mod consts;

pub use build_plan::{BuildPlan, BundleTarget, CompilerInvocation, SourceCategory};
pub use descriptor::{
    Config, ElmPluginConfig, FilesConfig, MakeParameters, OutputGrouping, PluginsConfig,
};
pub use loader::{load_and_validate_config, load_config, ConfigFormat};
pub use main_modules::MainModules;
pub use overrides::{
    ElmPluginOverride, EnvironmentOverride, FilesOverride, OutputGroupingOverride, PluginsOverride,
};
pub use validation::validate_config;
