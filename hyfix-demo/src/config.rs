use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    driver::Run,
    error::{DemoError, DemoResult},
    steps::StepKind,
};

/// Environment variable overriding the default configuration path.
pub const ENV_CONFIG_PATH: &str = "HYFIX_CONFIG";

/// One `[[run]]` table of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub step: String,
    pub from: i64,
    pub to: i64,
}

/// Demo configuration, e.g.
///
/// ```toml
/// [[run]]
/// step = "checked-factorial"
/// from = 15
/// to = 22
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default, rename = "run")]
    pub runs: Vec<RunConfig>,
}

impl DemoConfig {
    /// Get the default path to the demo configuration file.
    pub fn default_path() -> PathBuf {
        if let Ok(config_path) = std::env::var(ENV_CONFIG_PATH) {
            return config_path.into();
        }

        let mut path = PathBuf::new();

        #[cfg(target_os = "windows")]
        {
            if let Ok(appdata) = std::env::var("APPDATA") {
                path.push(appdata);
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
                path.push(xdg_config_home);
            } else if let Ok(home) = std::env::var("HOME") {
                path.push(home);
                path.push(".config");
            } else {
                // Fallback to current directory if HOME is not set
            }
        }

        path.push("hyfix");
        path.push("demo.toml");
        path
    }

    /// Load the configuration from a TOML file.
    pub fn load_from_toml(path: &Path) -> DemoResult<Self> {
        let toml_str = std::fs::read_to_string(path)?;
        Self::parse(&toml_str, &path.display().to_string())
    }

    /// Load the configuration from the default path. A missing file yields an empty
    /// configuration.
    pub fn load_default() -> DemoResult<Self> {
        let path = Self::default_path();
        if !path.exists() {
            log::debug!("No configuration at `{}`", path.display());
            return Ok(Self::default());
        }
        Self::load_from_toml(&path)
    }

    /// Parse the configuration from a TOML string; `file` only names the source in errors.
    pub fn parse(toml_str: &str, file: &str) -> DemoResult<Self> {
        toml::from_str(toml_str).map_err(|e| DemoError::ConfigParseError {
            source: e,
            file: file.to_string(),
        })
    }

    /// Resolve step names and validate ranges.
    pub fn resolve(&self) -> DemoResult<Vec<Run>> {
        self.runs
            .iter()
            .map(|run| Run::new(StepKind::parse(&run.step)?, run.from, run.to))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[run]]
step = "factorial"
from = 0
to = 10

[[run]]
step = "checked-fibonacci"
from = 1
to = 12
"#;

    #[test]
    fn parses_and_resolves_runs() {
        let config = DemoConfig::parse(SAMPLE, "sample.toml").unwrap();
        assert_eq!(config.runs.len(), 2);
        assert_eq!(
            config.runs[1],
            RunConfig {
                step: "checked-fibonacci".to_string(),
                from: 1,
                to: 12
            }
        );

        let runs = config.resolve().unwrap();
        assert_eq!(runs[0].step, StepKind::Factorial);
        assert_eq!((runs[0].from, runs[0].to), (0, 10));
        assert_eq!(runs[1].step, StepKind::CheckedFibonacci);
    }

    #[test]
    fn empty_document_has_no_runs() {
        let config = DemoConfig::parse("", "empty.toml").unwrap();
        assert!(config.runs.is_empty());
        assert!(config.resolve().unwrap().is_empty());
    }

    #[test]
    fn parse_error_names_the_file() {
        let error = DemoConfig::parse("[[run]]\nstep = 3", "broken.toml").unwrap_err();
        assert!(matches!(
            error,
            DemoError::ConfigParseError { ref file, .. } if file == "broken.toml"
        ));
        assert!(error.to_string().contains("broken.toml"));
    }

    #[test]
    fn unknown_step_is_rejected_on_resolve() {
        let source = "[[run]]\nstep = \"collatz\"\nfrom = 1\nto = 3";
        let config = DemoConfig::parse(source, "x.toml").unwrap();
        assert!(matches!(
            config.resolve(),
            Err(DemoError::UnknownStep { ref name, .. }) if name == "collatz"
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = Path::new("/nonexistent/hyfix/demo.toml");
        let error = DemoConfig::load_from_toml(path).unwrap_err();
        assert!(matches!(error, DemoError::IoError(_)));
    }
}
