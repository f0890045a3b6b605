//! Command-line and environment configuration for the detect phase.
//!
//! The buildpack lifecycle invokes `detect <PLATFORM_DIR> <BUILD_PLAN>`;
//! everything else arrives through `CE_*` environment variables.

use std::path::PathBuf;

use clap::Parser;

use cedetect_core::config::DetectConfig;

/// Buildpack detect phase for Go CloudEvents functions.
#[derive(Debug, Parser)]
#[command(name = "detect", version, about)]
pub struct Args {
    /// Buildpack platform directory (part of the detect contract, unused).
    pub platform_dir: PathBuf,

    /// Build plan file to write on success.
    pub build_plan: PathBuf,

    /// Package subpath under the module root to search.
    #[arg(long, env = "CE_GO_PACKAGE", default_value = "./")]
    pub package: String,

    /// Required function name; pass an empty string to accept any match.
    #[arg(long, env = "CE_GO_FUNCTION", default_value = "Receiver")]
    pub function: String,

    /// Protocol recorded in the build plan metadata.
    #[arg(long, env = "CE_PROTOCOL", default_value = "http")]
    pub protocol: String,

    /// Skip files that fail to parse instead of aborting the run.
    #[arg(long, env = "CE_SKIP_PARSE_ERRORS")]
    pub skip_parse_errors: bool,
}

impl Args {
    pub fn config(&self) -> DetectConfig {
        DetectConfig {
            package: self.package.clone(),
            function: self.function.clone(),
            protocol: self.protocol.clone(),
        }
    }
}
