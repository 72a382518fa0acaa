// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{validate_config, Config};
use crate::errors::LoadError;
use crate::observability::messages::loader::{ConfigLoaded, ConfigValidationFailed};
use std::fmt;
use std::fs;
use std::path::Path;

/// On-disk format of a descriptor file, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    /// Determine the format from a file path's extension.
    fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        match extension {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            "toml" => Ok(ConfigFormat::Toml),
            _ => Err(LoadError::UnsupportedFormat {
                path: path.display().to_string(),
                extension: extension.to_string(),
            }),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Yaml => write!(f, "yaml"),
            ConfigFormat::Json => write!(f, "json"),
            ConfigFormat::Toml => write!(f, "toml"),
        }
    }
}

/// Load a descriptor from a config file.
///
/// The format is picked by extension: `.yaml`/`.yml`, `.json`, or `.toml`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, LoadError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;

    let cfg: Config = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(&content)?,
        ConfigFormat::Json => serde_json::from_str(&content)?,
        ConfigFormat::Toml => toml::from_str(&content)?,
    };

    tracing::debug!(
        "{}",
        ConfigLoaded {
            path: &path.display().to_string(),
            format,
        }
    );

    Ok(cfg)
}

/// Load and validate a descriptor from a config file.
///
/// This function loads the descriptor and validates its shape so a malformed
/// file is rejected before the runtime sees it. All validation problems are
/// reported together.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, LoadError> {
    let cfg = load_config(path)?;

    if let Err(problems) = validate_config(&cfg) {
        tracing::warn!(
            "{}",
            ConfigValidationFailed {
                problem_count: problems.len(),
            }
        );
        return Err(LoadError::Invalid(problems));
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DESCRIPTOR_YAML: &str = r#"
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
"#;

    fn temp_config(extension: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{}", extension))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_yaml_descriptor() {
        let file = temp_config("yaml", DESCRIPTOR_YAML);
        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.files.javascripts.join_to, "js/app.js");
        assert_eq!(
            cfg.plugins.elm_brunch.make_parameters.0,
            vec!["--debug"]
        );
    }

    #[test]
    fn load_json_descriptor() {
        let json = r#"{
  "files": {
    "javascripts": {"joinTo": "js/app.js"},
    "stylesheets": {"joinTo": "css/app.css"}
  },
  "plugins": {
    "elmBrunch": {
      "mainModules": ["app/elm/Main.elm"],
      "outputFolder": "public/js",
      "makeParameters": "--debug"
    }
  },
  "overrides": {
    "production": {
      "plugins": {
        "elmBrunch": {
          "makeParameters": []
        }
      }
    }
  }
}"#;
        let file = temp_config("json", json);
        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.plugins.elm_brunch.output_folder, "public/js");
        assert!(cfg
            .resolve("production")
            .plugins
            .elm_brunch
            .make_parameters
            .is_empty());
    }

    #[test]
    fn load_toml_descriptor() {
        let toml = r#"
[files.javascripts]
joinTo = "js/app.js"

[files.stylesheets]
joinTo = "css/app.css"

[plugins.elmBrunch]
mainModules = ["app/elm/Main.elm"]
outputFolder = "public/js"
makeParameters = "--debug"
"#;
        let file = temp_config("toml", toml);
        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.files.stylesheets.join_to, "css/app.css");
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let file = temp_config("js", "module.exports = {}");
        let result = load_config(file.path());
        assert!(matches!(
            result,
            Err(LoadError::UnsupportedFormat { extension, .. }) if extension == "js"
        ));
    }

    #[test]
    fn validation_problems_surface_as_invalid() {
        let yaml = r#"
files:
  javascripts:
    joinTo: js/app.js
  stylesheets:
    joinTo: css/app.css
plugins:
  elmBrunch:
    mainModules: []
    outputFolder: public/js
"#;
        let file = temp_config("yaml", yaml);
        let result = load_and_validate_config(file.path());
        match result {
            Err(LoadError::Invalid(problems)) => assert_eq!(problems.len(), 1),
            other => panic!("expected validation failure, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_config("does/not/exist.yaml");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
