//! Configuration system for searchbench.
//!
//! Load the axes and run modes of an experiment from a TOML or YAML file,
//! then layer command-line overrides on top.
//!
//! # Examples
//!
//! ```
//! use searchbench_config::DriverConfig;
//!
//! let config = DriverConfig::from_toml_str(r#"
//!     problems = ["rect20a", "wall8a"]
//!     heuristics = ["h_walldist"]
//!     strategies = ["gbf", "a*"]
//!     verbosity = 1
//!     time_tests = true
//!
//!     [benchmark]
//!     warmup_count = 2
//!     run_count = 5
//! "#).unwrap();
//!
//! let selection = config.selection();
//! assert_eq!(selection.problems, vec!["rect20a", "wall8a"]);
//! assert!(selection.timing);
//! assert_eq!(config.benchmark.run_count(), 5);
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use searchbench_config::DriverConfig;
//!
//! let config = DriverConfig::load("searchbench.toml").unwrap_or_default();
//! assert!(config.problems.is_empty());
//! ```

use std::path::{Path, PathBuf};

use searchbench_benchmark::BenchmarkConfig;
use searchbench_core::AxisSelection;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Experiment configuration as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct DriverConfig {
    /// Problem identifiers, in enumeration order.
    #[serde(default)]
    pub problems: Vec<String>,

    /// Heuristic identifiers, in enumeration order.
    #[serde(default)]
    pub heuristics: Vec<String>,

    /// Strategy tags, in enumeration order.
    #[serde(default)]
    pub strategies: Vec<String>,

    /// Engine verbosity for demonstration runs (0-4).
    #[serde(default)]
    pub verbosity: u8,

    /// Render the problem and solution during demonstration runs.
    #[serde(default)]
    pub draw: bool,

    /// Follow every demonstration with a timed run.
    #[serde(default)]
    pub time_tests: bool,

    /// Extra problem files to register before resolving `problems`.
    #[serde(default)]
    pub problem_files: Vec<PathBuf>,

    /// Timed-run repetition counts.
    #[serde(default)]
    pub benchmark: BenchmarkSettings,
}

impl DriverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// Relative `problem_files` entries are resolved against the directory
    /// containing the configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, has an unknown extension or
    /// fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_file(path)?,
            Some("yaml" | "yml") => Self::from_yaml_file(path)?,
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "unsupported config file extension: {}",
                    path.display()
                )))
            }
        };
        if let Some(base) = path.parent() {
            config.rebase_problem_files(base);
        }
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Applies command-line overrides. Lists given on the command line replace
    /// the file's lists; flags only ever switch a mode on.
    pub fn apply(mut self, overrides: Overrides) -> Self {
        replace_if_given(&mut self.problems, overrides.problems);
        replace_if_given(&mut self.heuristics, overrides.heuristics);
        replace_if_given(&mut self.strategies, overrides.strategies);
        replace_if_given(&mut self.problem_files, overrides.problem_files);
        if let Some(verbosity) = overrides.verbosity {
            self.verbosity = verbosity;
        }
        self.draw |= overrides.draw;
        self.time_tests |= overrides.time_tests;
        if let Some(count) = overrides.warmup_count {
            self.benchmark.warmup_count = Some(count);
        }
        if let Some(count) = overrides.run_count {
            self.benchmark.run_count = Some(count);
        }
        self
    }

    /// Checks settings that cannot be expressed in the types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.benchmark.run_count() == 0 {
            return Err(ConfigError::Invalid(
                "benchmark.run_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Identifier-level selection, ready to be resolved against the registries.
    pub fn selection(&self) -> AxisSelection {
        AxisSelection {
            problems: self.problems.clone(),
            heuristics: self.heuristics.clone(),
            strategies: self.strategies.clone(),
            verbosity: self.verbosity,
            draw: self.draw,
            timing: self.time_tests,
        }
    }

    fn rebase_problem_files(&mut self, base: &Path) {
        for file in &mut self.problem_files {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
    }
}

/// `[benchmark]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct BenchmarkSettings {
    /// Unmeasured iterations before timing starts.
    #[serde(default)]
    pub warmup_count: Option<usize>,

    /// Measured iterations per combination.
    #[serde(default)]
    pub run_count: Option<usize>,
}

impl BenchmarkSettings {
    pub fn warmup_count(&self) -> usize {
        self.warmup_count
            .unwrap_or(BenchmarkConfig::DEFAULT_WARMUP_COUNT)
    }

    pub fn run_count(&self) -> usize {
        self.run_count.unwrap_or(BenchmarkConfig::DEFAULT_RUN_COUNT)
    }

    /// Builds the timing configuration shared by every combination.
    pub fn to_benchmark_config(&self, name: impl Into<String>) -> BenchmarkConfig {
        BenchmarkConfig::new(name)
            .with_warmup_count(self.warmup_count())
            .with_run_count(self.run_count())
    }
}

/// Values supplied on the command line. `None` and empty lists leave the
/// file's setting untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub problems: Vec<String>,
    pub heuristics: Vec<String>,
    pub strategies: Vec<String>,
    pub problem_files: Vec<PathBuf>,
    pub verbosity: Option<u8>,
    pub draw: bool,
    pub time_tests: bool,
    pub warmup_count: Option<usize>,
    pub run_count: Option<usize>,
}

fn replace_if_given<T>(target: &mut Vec<T>, given: Vec<T>) {
    if !given.is_empty() {
        *target = given;
    }
}

#[cfg(test)]
mod tests;
