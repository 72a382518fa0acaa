// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{COMPILED_EXTENSION, ELM_COMPILER, ELM_MAKE};
use crate::config::{validate_config, Config};
use crate::errors::ValidationError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Source category feeding a concatenation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceCategory {
    Javascripts,
    Stylesheets,
}

impl fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceCategory::Javascripts => write!(f, "javascripts"),
            SourceCategory::Stylesheets => write!(f, "stylesheets"),
        }
    }
}

/// One concatenation target: everything in `category` joins into `join_to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleTarget {
    pub category: SourceCategory,
    pub join_to: String,
}

/// The external compiler invocation the plugin registration stands for.
///
/// Entry modules are the compiler inputs, `output` is the compiled artifact
/// under the plugin's output folder, and `flags` are the descriptor's
/// `makeParameters` appended verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerInvocation {
    pub main_modules: Vec<String>,
    pub output: PathBuf,
    pub flags: Vec<String>,
}

impl CompilerInvocation {
    /// Full command line for the invocation, program name first.
    pub fn command_line(&self) -> Vec<String> {
        let mut argv = vec![ELM_COMPILER.to_string(), ELM_MAKE.to_string()];
        argv.extend(self.main_modules.iter().cloned());
        argv.push("--output".to_string());
        argv.push(self.output.display().to_string());
        argv.extend(self.flags.iter().cloned());
        argv
    }
}

/// Effective build plan derived from a resolved descriptor.
///
/// The `BuildPlan` is what the consuming runtime would act on: the bundle
/// targets to concatenate into, and the compiler invocation for the
/// registered plugin. Build one from the descriptor after resolving the
/// active environment, so overrides are already applied.
///
/// # Examples
///
/// ```
/// use brunchbox::config::{load_and_validate_config, BuildPlan};
///
/// # let dir = tempfile::tempdir().unwrap();
/// # let path = dir.path().join("brunch.yaml");
/// # std::fs::write(&path, r#"
/// # files:
/// #   javascripts:
/// #     joinTo: js/app.js
/// #   stylesheets:
/// #     joinTo: css/app.css
/// # plugins:
/// #   elmBrunch:
/// #     mainModules: [app/elm/Main.elm]
/// #     outputFolder: public/js
/// #     makeParameters: --debug
/// # "#).unwrap();
/// let config = load_and_validate_config(&path).unwrap();
/// let plan = BuildPlan::from_config(&config.resolve("production")).unwrap();
///
/// assert_eq!(plan.bundles.len(), 2);
/// assert_eq!(plan.compiler.main_modules, vec!["app/elm/Main.elm"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub bundles: Vec<BundleTarget>,
    pub compiler: CompilerInvocation,
}

impl BuildPlan {
    /// Build the effective plan from a (resolved) descriptor.
    ///
    /// Validates the descriptor first; a malformed one never yields a plan.
    pub fn from_config(cfg: &Config) -> Result<BuildPlan, Vec<ValidationError>> {
        validate_config(cfg)?;

        let bundles = vec![
            BundleTarget {
                category: SourceCategory::Javascripts,
                join_to: cfg.files.javascripts.join_to.clone(),
            },
            BundleTarget {
                category: SourceCategory::Stylesheets,
                join_to: cfg.files.stylesheets.join_to.clone(),
            },
        ];

        let plugin = &cfg.plugins.elm_brunch;
        let compiler = CompilerInvocation {
            main_modules: plugin.main_modules.0.clone(),
            output: Path::new(&plugin.output_folder).join(compiled_file_name(plugin.main_modules.iter())),
            flags: plugin.make_parameters.0.clone(),
        };

        Ok(BuildPlan { bundles, compiler })
    }
}

/// Name of the compiled artifact: lowercased entry-module stems joined with
/// '-', e.g. `Main.elm` compiles to `main.js`.
fn compiled_file_name<'a>(modules: impl Iterator<Item = &'a String>) -> String {
    let stems: Vec<String> = modules
        .map(|module| {
            Path::new(module)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("out")
                .to_lowercase()
        })
        .collect();
    format!("{}.{}", stems.join("-"), COMPILED_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> Config {
        serde_yaml::from_str(
            r#"
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
"#,
        )
        .unwrap()
    }

    #[test]
    fn plan_carries_both_bundle_targets() {
        let plan = BuildPlan::from_config(&descriptor()).unwrap();
        assert_eq!(
            plan.bundles,
            vec![
                BundleTarget {
                    category: SourceCategory::Javascripts,
                    join_to: "js/app.js".to_string(),
                },
                BundleTarget {
                    category: SourceCategory::Stylesheets,
                    join_to: "css/app.css".to_string(),
                },
            ]
        );
    }

    #[test]
    fn default_invocation_includes_debug_flag() {
        let plan = BuildPlan::from_config(&descriptor()).unwrap();
        assert_eq!(
            plan.compiler.command_line(),
            vec![
                "elm",
                "make",
                "app/elm/Main.elm",
                "--output",
                "public/js/main.js",
                "--debug",
            ]
        );
    }

    #[test]
    fn production_invocation_has_no_flags() {
        let resolved = descriptor().resolve("production");
        let plan = BuildPlan::from_config(&resolved).unwrap();
        assert!(plan.compiler.flags.is_empty());
        assert_eq!(
            plan.compiler.command_line(),
            vec![
                "elm",
                "make",
                "app/elm/Main.elm",
                "--output",
                "public/js/main.js",
            ]
        );
    }

    #[test]
    fn compiled_artifact_name_joins_module_stems() {
        let mut cfg = descriptor();
        cfg.plugins.elm_brunch.main_modules.add("app/elm/Widget.elm".to_string());
        let plan = BuildPlan::from_config(&cfg).unwrap();
        assert_eq!(
            plan.compiler.output,
            Path::new("public/js").join("main-widget.js")
        );
    }

    #[test]
    fn malformed_descriptor_yields_no_plan() {
        let mut cfg = descriptor();
        cfg.plugins.elm_brunch.output_folder = String::new();
        let errors = BuildPlan::from_config(&cfg).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyOutputFolder]);
    }
}
