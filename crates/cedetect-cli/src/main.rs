//! `detect` — buildpack detect phase for Go CloudEvents functions.
//!
//! Scans the configured package for an exported top-level function whose
//! signature is in the accepted catalog and writes a build plan naming it.
//! Exits 0 on success and 100 (the buildpack "detection failed" code) when
//! no usable function exists.

mod args;
mod files;
mod module;
mod plan;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};

use cedetect_analysis::{accepted_signatures, Detector};
use cedetect_core::errors::detect_error::DETECT_FAILED_EXIT_CODE;
use cedetect_core::errors::{DetectError, ErrorCode};
use cedetect_core::tracing::init_tracing;

use crate::args::Args;
use crate::plan::BuildPlan;

const SUPPORTED_FUNCTIONS: &str = r#"
Could not find a supported function signature. Examples of supported functions are
shown below, also showing the imports that you can use. The function must also be visible
outside of the package (capitalized, for example, Receive vs. receive).

import (
    "context"
    event "github.com/cloudevents/sdk-go/v2"
    "github.com/cloudevents/sdk-go/v2/protocol"
)

The following function signatures are supported by this builder:
func(event.Event)
func(event.Event) protocol.Result
func(event.Event) error
func(context.Context, event.Event)
func(context.Context, event.Event) protocol.Result
func(context.Context, event.Event) error
func(event.Event) *event.Event
func(event.Event) (*event.Event, protocol.Result)
func(event.Event) (*event.Event, error)
func(context.Context, event.Event) *event.Event
func(context.Context, event.Event) (*event.Event, protocol.Result)
func(context.Context, event.Event) (*event.Event, error)
"#;

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            println!("{SUPPORTED_FUNCTIONS}");
            ExitCode::from(DETECT_FAILED_EXIT_CODE)
        }
        Err(e) => {
            error!(code = e.error_code(), "detect failed: {e}");
            println!("{SUPPORTED_FUNCTIONS}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Returns `Ok(true)` when a function was found and the plan written.
fn run(args: &Args) -> Result<bool, DetectError> {
    let config = args.config();
    config.validate()?;

    let module_name = module::read_module_name(Path::new("./go.mod"))?;
    let full_package = module::full_package(&module_name, &config.package_dir());
    info!(package = %full_package, subpath = %config.package_dir(), "looking for function");

    let candidates = files::go_files(&config.package_dir())?;
    let mut detector = Detector::new(accepted_signatures())?;

    for path in &candidates {
        info!(file = %path.display(), "processing file");
        let source = files::read_source(path)?;

        let details = match detector.check_file(path, &source, config.name_filter()) {
            Ok(details) => details,
            Err(e) if args.skip_parse_errors => {
                warn!(file = %path.display(), code = e.error_code(), "skipping file: {e}");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(mut details) = details {
            details.package = full_package.clone();
            BuildPlan::new(&details, &config.protocol).write(&args.build_plan)?;
            info!(
                function = %details.name,
                plan = %args.build_plan.display(),
                "wrote build plan"
            );
            return Ok(true);
        }
    }

    Ok(false)
}
