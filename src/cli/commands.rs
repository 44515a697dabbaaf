//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::backend::{self, closure};
use crate::config::GenerateConfig;
use crate::frontend::{DeclarationSource, RustSource};

use super::{CliError, CliResult, ExitCode};

/// Generate mocks for the traits declared in `file`.
///
/// With `types` empty every `pub` trait is a root; otherwise only the named traits are. The output goes to
/// `output`, or stdout when none is given. An existing output file is only replaced after generation succeeded.
pub fn generate_file(
    file: &Path,
    types: &[String],
    output: Option<&Path>,
    config: &GenerateConfig,
) -> CliResult<ExitCode> {
    let mut source = RustSource::from_file(file).map_err(CliError::diagnostic)?;
    if !types.is_empty() {
        source = source.filtered(types).map_err(CliError::diagnostic)?;
    }

    let roots = source.exported_interfaces();
    if roots.is_empty() {
        tracing::warn!(file = %file.display(), "no traits to mock");
    }
    let closure = closure::resolve(&roots, &source);
    tracing::info!(mocks = closure.len(), "generating mocks");

    let code = backend::render(&closure, config).map_err(CliError::diagnostic)?;
    match output {
        Some(path) => write_output(path, &code)?,
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(code.as_bytes())
                .and_then(|()| lock.flush())
                .map_err(|e| CliError::diagnostic(backend::GenerateError::Io(e)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn write_output(path: &Path, code: &str) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            CliError::failure(format!("Error creating directory {}: {}", parent.display(), e))
        })?;
    }
    fs::write(path, code).map_err(|e| CliError::failure(format!("Error writing {}: {}", path.display(), e)))?;
    tracing::info!(path = %path.display(), "wrote mocks");
    Ok(())
}
