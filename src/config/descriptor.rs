// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::MainModules;
use crate::config::overrides::EnvironmentOverride;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Main configuration structure for the build descriptor.
///
/// This struct represents the complete configuration consumed by the build
/// runtime: which source categories concatenate into which bundle outputs,
/// which compiler plugin is registered and with what options, and which
/// environment-specific overrides get merged over the base at build time.
/// It is typically loaded from a YAML, JSON, or TOML configuration file.
///
/// Field names on the wire are preserved from the original runtime contract
/// (`joinTo`, `elmBrunch`, `mainModules`, ...), so existing config data
/// parses unchanged.
///
/// # Example
/// ```yaml
/// files:
///   javascripts:
///     joinTo: js/app.js
///   stylesheets:
///     joinTo: css/app.css
/// plugins:
///   elmBrunch:
///     mainModules: [app/elm/Main.elm]
///     outputFolder: public/js
///     makeParameters: --debug
/// overrides:
///   production:
///     plugins:
///       elmBrunch:
///         makeParameters: []
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub files: FilesConfig,
    pub plugins: PluginsConfig,
    #[serde(default)]
    pub overrides: BTreeMap<String, EnvironmentOverride>,
}

/// File-concatenation targets, one per source category.
///
/// Each category maps to exactly one destination bundle. The underlying
/// runtime also supports pattern-keyed multi-destination maps; those are
/// out of scope for this descriptor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilesConfig {
    pub javascripts: OutputGrouping,
    pub stylesheets: OutputGrouping,
}

/// A single concatenation destination for one source category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputGrouping {
    #[serde(rename = "joinTo")]
    pub join_to: String,
}

/// Registered compiler plugins.
///
/// Exactly one plugin is modeled: the Elm compiler bridge. The field name
/// `elmBrunch` is the plugin's registration key in the consuming runtime.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PluginsConfig {
    #[serde(rename = "elmBrunch")]
    pub elm_brunch: ElmPluginConfig,
}

/// Options bundle for the Elm compiler plugin.
///
/// # Fields
/// * `main_modules` - ordered entry-point file paths handed to the compiler
/// * `output_folder` - directory the compiled JavaScript lands in
/// * `make_parameters` - extra command-line flags for the compiler invocation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElmPluginConfig {
    #[serde(rename = "mainModules")]
    pub main_modules: MainModules,
    #[serde(rename = "outputFolder")]
    pub output_folder: String,
    #[serde(rename = "makeParameters", default)]
    pub make_parameters: MakeParameters,
}

/// Ordered compiler flags, normalized to a single canonical shape.
///
/// The source data for this field is type-inconsistent: some configs carry a
/// single string of flags (`"--debug"`), others a sequence (`[]`). The
/// consuming runtime tolerates both by treating either as "flags to pass,
/// possibly none". Deserialization normalizes here instead: a string is
/// split on whitespace into individual flags (a blank string yields none),
/// and a sequence is taken as-is. After loading, only the sequence shape
/// exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MakeParameters(pub Vec<String>);

impl MakeParameters {
    /// No flags at all
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get iterator over the flags in invocation order
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

impl From<Vec<String>> for MakeParameters {
    fn from(flags: Vec<String>) -> Self {
        Self(flags)
    }
}

impl From<MakeParameters> for Vec<String> {
    fn from(value: MakeParameters) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for MakeParameters {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flags(Vec<String>),
            Blob(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Flags(flags) => Self(flags),
            Raw::Blob(blob) => Self(blob.split_whitespace().map(str::to_string).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_descriptor() {
        let yaml = r#"
files:
  javascripts:
    joinTo: js/app.js
  stylesheets:
    joinTo: css/app.css
plugins:
  elmBrunch:
    mainModules:
      - app/elm/Main.elm
    outputFolder: public/js
    makeParameters: --debug
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.files.javascripts.join_to, "js/app.js");
        assert_eq!(cfg.files.stylesheets.join_to, "css/app.css");
        assert_eq!(
            cfg.plugins.elm_brunch.main_modules.0,
            vec!["app/elm/Main.elm"]
        );
        assert_eq!(cfg.plugins.elm_brunch.output_folder, "public/js");
        assert!(cfg.overrides.is_empty());
    }

    #[test]
    fn make_parameters_string_form_splits_into_flags() {
        let params: MakeParameters = serde_yaml::from_str("--debug --optimize").unwrap();
        assert_eq!(params.0, vec!["--debug", "--optimize"]);
    }

    #[test]
    fn make_parameters_blank_string_means_no_flags() {
        let params: MakeParameters = serde_yaml::from_str("\"  \"").unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn make_parameters_sequence_form_taken_verbatim() {
        let params: MakeParameters = serde_yaml::from_str("[--debug]").unwrap();
        assert_eq!(params.0, vec!["--debug"]);

        let empty: MakeParameters = serde_yaml::from_str("[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn make_parameters_defaults_to_empty_when_absent() {
        let yaml = r#"
mainModules: [app/elm/Main.elm]
outputFolder: public/js
"#;
        let plugin: ElmPluginConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(plugin.make_parameters.is_empty());
    }

    #[test]
    fn repeated_parses_are_structurally_identical() {
        let yaml = r#"
files:
  javascripts:
    joinTo: js/app.js
  stylesheets:
    joinTo: css/app.css
plugins:
  elmBrunch:
    mainModules: [app/elm/Main.elm]
    outputFolder: public/js
    makeParameters: --debug
overrides:
  production:
    plugins:
      elmBrunch:
        makeParameters: []
"#;
        let first: Config = serde_yaml::from_str(yaml).unwrap();
        let second: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(first, second);
    }
}
