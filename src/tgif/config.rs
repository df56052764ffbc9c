//! Configuration loading for tgifer
//!
//! Settings come in three layers, lowest first:
//!
//! 1. `defaults/tgifer.default.toml`, compiled into the crate
//! 2. the TOML file given with `tgifer --config FILE`
//! 3. single keys forced from the command line, e.g. `--strict` sets `parsing.strict`
//!
//! A file only has to name the keys it changes. [Loader] stacks the layers and
//! deserializes the result into [TgiferConfig].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/tgifer.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TgiferConfig {
    pub output: OutputConfig,
    pub parsing: ParsingConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of the output format (see `tgif::formats`)
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParsingConfig {
    /// Treat any diagnostic as fatal
    pub strict: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    pub grouping_separator: String,
    pub report_anomalies: bool,
}

/// Stacks a user file and command line overrides on the compiled-in defaults
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only `tgifer.default.toml`
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add the `--config` file on top of the defaults.
    ///
    /// The file must exist; [Loader::build] fails otherwise.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Force one dotted key, above every file. `--strict` maps to
    /// `set_override("parsing.strict", true)`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers into a [TgiferConfig]; unknown formats are not checked here
    pub fn build(self) -> Result<TgiferConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings used when no file or override is given
pub fn load_defaults() -> Result<TgiferConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.output.format, "json");
        assert!(!config.parsing.strict);
        assert_eq!(config.extraction.grouping_separator, " ");
        assert!(config.extraction.report_anomalies);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parsing.strict", true)
            .expect("override to apply")
            .set_override("output.format", "strings")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(config.parsing.strict);
        assert_eq!(config.output.format, "strings");
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[extraction]\ngrouping_separator = \"\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.extraction.grouping_separator, "");
        // Untouched keys keep their defaults
        assert!(config.extraction.report_anomalies);
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn strict_override_beats_the_config_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[parsing]\nstrict = false").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .set_override("parsing.strict", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(config.parsing.strict);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new().with_file("/nonexistent/tgifer.toml").build();
        assert!(result.is_err());
    }
}
