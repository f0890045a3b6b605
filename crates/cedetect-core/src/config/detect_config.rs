//! Detect run configuration, sourced from the buildpack environment.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Settings controlling which function the detector looks for and what goes
/// into the build plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectConfig {
    /// Package subpath relative to the module root. Default: `./`.
    pub package: String,
    /// Required function name. Empty accepts any catalog match.
    pub function: String,
    /// Protocol recorded in the build plan. Opaque to the detector.
    pub protocol: String,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            package: "./".to_string(),
            function: "Receiver".to_string(),
            protocol: "http".to_string(),
        }
    }
}

impl DetectConfig {
    /// Package subpath with a guaranteed trailing slash, ready for globbing.
    pub fn package_dir(&self) -> String {
        if self.package.ends_with('/') {
            self.package.clone()
        } else {
            format!("{}/", self.package)
        }
    }

    /// The name filter passed to the detector. Empty means any name.
    pub fn name_filter(&self) -> &str {
        &self.function
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.package.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "package".to_string(),
                message: "must be a subpath relative to the module root".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_buildpack_environment() {
        let config = DetectConfig::default();
        assert_eq!(config.package, "./");
        assert_eq!(config.function, "Receiver");
        assert_eq!(config.protocol, "http");
    }

    #[test]
    fn package_dir_always_ends_with_slash() {
        let mut config = DetectConfig::default();
        assert_eq!(config.package_dir(), "./");

        config.package = "handlers".to_string();
        assert_eq!(config.package_dir(), "handlers/");

        config.package = "handlers/".to_string();
        assert_eq!(config.package_dir(), "handlers/");
    }

    #[test]
    fn absolute_package_paths_are_rejected() {
        let config = DetectConfig {
            package: "/etc".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_function_means_no_name_filter() {
        let config = DetectConfig {
            function: String::new(),
            ..Default::default()
        };
        assert!(config.name_filter().is_empty());
    }
}
