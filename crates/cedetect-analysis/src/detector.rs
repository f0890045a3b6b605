//! Detection facade — drives parse, shape build, and catalog match for one
//! file at a time.
//!
//! Cross-file behavior belongs to the caller: it feeds files in a fixed
//! order and stops at the first hit, so re-running over the same file set
//! always finds the same function.

use std::path::Path;

use tracing::{debug, info, trace};

use cedetect_core::errors::ParseError;
use cedetect_core::types::{FunctionDetails, FunctionSignature};

use crate::matcher::is_accepted;
use crate::parser::GoParser;
use crate::signature::signature_of;

/// Scans files for an exported top-level function whose signature is in the
/// accepted catalog.
pub struct Detector {
    parser: GoParser,
    catalog: &'static [FunctionSignature],
}

impl Detector {
    pub fn new(catalog: &'static [FunctionSignature]) -> Result<Self, ParseError> {
        Ok(Self {
            parser: GoParser::new()?,
            catalog,
        })
    }

    /// Check one file.
    ///
    /// Returns the first declaration, in source order, whose signature is in
    /// the catalog and whose name passes `name_filter` (empty accepts any
    /// name). `Ok(None)` when nothing in the file qualifies; `Err` only for
    /// malformed source.
    pub fn check_file(
        &mut self,
        path: &Path,
        source: &str,
        name_filter: &str,
    ) -> Result<Option<FunctionDetails>, ParseError> {
        let file = self.parser.parse(path, source)?;

        for decl in &file.declarations {
            if !decl.exported {
                trace!(function = %decl.name, "skipping unexported function");
                continue;
            }
            let signature = signature_of(decl, &file.imports);
            if !is_accepted(&signature, self.catalog) {
                debug!(function = %decl.name, %signature, "signature not in catalog");
                continue;
            }
            if !name_filter.is_empty() && name_filter != decl.name {
                debug!(
                    function = %decl.name,
                    filter = name_filter,
                    "matching signature rejected by name filter"
                );
                continue;
            }
            info!(
                function = %decl.name,
                package = %file.package,
                %signature,
                "found supported function"
            );
            return Ok(Some(FunctionDetails {
                name: decl.name.clone(),
                package: file.package.clone(),
                signature,
            }));
        }

        Ok(None)
    }
}
