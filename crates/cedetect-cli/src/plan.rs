//! Build plan serialization.
//!
//! The detect phase provides and requires the `ce-go-function` capability,
//! carrying the detected package, function, and protocol as metadata for
//! the build phase.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use cedetect_core::errors::PlanError;
use cedetect_core::types::FunctionDetails;

/// Capability name provided and required by this buildpack.
pub const CAPABILITY: &str = "ce-go-function";

/// The build plan descriptor written at the path the lifecycle hands us.
#[derive(Debug, Serialize)]
pub struct BuildPlan {
    provides: Vec<Provide>,
    requires: Vec<Require>,
}

#[derive(Debug, Serialize)]
struct Provide {
    name: String,
}

#[derive(Debug, Serialize)]
struct Require {
    name: String,
    metadata: Metadata,
}

#[derive(Debug, Serialize)]
struct Metadata {
    package: String,
    function: String,
    protocol: String,
}

impl BuildPlan {
    pub fn new(details: &FunctionDetails, protocol: &str) -> Self {
        Self {
            provides: vec![Provide {
                name: CAPABILITY.to_string(),
            }],
            requires: vec![Require {
                name: CAPABILITY.to_string(),
                metadata: Metadata {
                    package: details.package.clone(),
                    function: details.name.clone(),
                    protocol: protocol.to_string(),
                },
            }],
        }
    }

    pub fn to_toml(&self) -> Result<String, PlanError> {
        Ok(toml::to_string(self)?)
    }

    /// Append the plan to `path`, creating the file if needed. Append mode
    /// keeps entries already written by other buildpacks intact.
    pub fn write(&self, path: &Path) -> Result<(), PlanError> {
        let rendered = self.to_toml()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| PlanError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        file.write_all(rendered.as_bytes())
            .map_err(|source| PlanError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}
