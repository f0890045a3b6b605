//! Module name discovery from go.mod.

use std::fs;
use std::path::Path;

use cedetect_core::errors::ConfigError;

/// Read the `module` directive from a go.mod file.
///
/// Line-oriented scan; the single directive we need does not justify a
/// full go.mod parser.
pub fn read_module_name(path: &Path) -> Result<String, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ModuleFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    for line in contents.lines() {
        let mut pieces = line.split_whitespace();
        if pieces.next() == Some("module") {
            if let Some(name) = pieces.next() {
                return Ok(name.to_string());
            }
        }
    }

    Err(ConfigError::ModuleMissing {
        path: path.to_path_buf(),
    })
}

/// Combine the module name with the configured package subpath.
///
/// `./` means the module root: the module name is used as-is. Anything else
/// is cleaned of `./` prefixes and trailing slashes and appended.
pub fn full_package(module: &str, package_dir: &str) -> String {
    let cleaned = package_dir.trim_start_matches("./").trim_end_matches('/');
    if cleaned.is_empty() || cleaned == "." {
        module.to_string()
    } else {
        format!("{module}/{cleaned}")
    }
}
