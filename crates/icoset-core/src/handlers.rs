//! Request/response entry points for a UI shell.
//!
//! Each handler is stateless: it loads its input, runs the generator and
//! writes the result. Nothing is shared between calls.

use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::{info, warn};

use crate::container::{ico_entry_sizes, ico_from_source};
use crate::error::IconError;
use crate::favicon::{FaviconOptions, generate_favicon_set};
use crate::output::{write_artifacts, write_file};
use crate::sizes::SizeSet;

/// Read and decode a raster image. The format is sniffed from the content.
pub fn load_source(path: &Path) -> Result<DynamicImage, IconError> {
    let bytes = fs::read(path).map_err(|e| IconError::Decode {
        reason: format!("failed to read '{}': {}", path.display(), e),
    })?;
    image::load_from_memory(&bytes).map_err(|e| IconError::Decode {
        reason: format!("'{}' is not a supported image: {}", path.display(), e),
    })
}

/// Accept an empty prefix, or one made only of ASCII letters, digits, `-` and `_`.
pub fn validate_prefix(prefix: &str) -> Result<(), IconError> {
    let valid = prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(IconError::InvalidPrefix {
            prefix: prefix.to_string(),
        })
    }
}

/// Default ICO path for an input: same location, `.ico` extension.
pub fn default_ico_path(input: &Path) -> PathBuf {
    input.with_extension("ico")
}

#[derive(Debug, Clone)]
pub struct IcoRequest {
    pub input: PathBuf,
    /// Defaults to [`default_ico_path`] of the input.
    pub output: Option<PathBuf>,
    pub sizes: SizeSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcoResponse {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
}

/// Convert one image into a multi-size ICO file.
pub fn convert_ico(request: &IcoRequest) -> Result<IcoResponse, IconError> {
    let source = load_source(&request.input)?;
    let bytes = ico_from_source(&source, &request.sizes)?;

    let output = request
        .output
        .clone()
        .unwrap_or_else(|| default_ico_path(&request.input));
    write_file(&output, &bytes)?;

    info!(output = %output.display(), sizes = ?request.sizes.as_slice(), "converted to ico");
    Ok(IcoResponse {
        output,
        sizes: request.sizes.as_slice().to_vec(),
    })
}

#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub sizes: SizeSet,
}

/// Progress event emitted while converting a batch
#[derive(Debug, Clone)]
pub enum BatchEvent {
    /// Starting on an input
    Converting { input: PathBuf, index: usize, total: usize },
    /// Input written
    Converted { output: PathBuf, index: usize, total: usize },
    /// Input skipped after an error
    Failed { input: PathBuf, error: IconError },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub converted: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, IconError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert each input to `output_dir/{stem}.ico`.
///
/// A failing input is recorded and skipped; the rest still convert. An input
/// whose `{stem}.ico` was already written by an earlier input fails instead
/// of overwriting it.
pub fn convert_batch<F>(request: &BatchRequest, mut on_progress: F) -> BatchReport
where
    F: FnMut(BatchEvent),
{
    let total = request.inputs.len();
    let mut report = BatchReport::default();

    for (index, input) in request.inputs.iter().enumerate() {
        on_progress(BatchEvent::Converting {
            input: input.clone(),
            index,
            total,
        });

        let output = batch_output_path(&request.output_dir, input);
        let result = if report.converted.contains(&output) {
            Err(IconError::Write {
                path: output,
                reason: "an earlier input in this batch already wrote this file".to_string(),
            })
        } else {
            convert_ico(&IcoRequest {
                input: input.clone(),
                output: Some(output),
                sizes: request.sizes.clone(),
            })
        };

        match result {
            Ok(response) => {
                on_progress(BatchEvent::Converted {
                    output: response.output.clone(),
                    index,
                    total,
                });
                report.converted.push(response.output);
            }
            Err(error) => {
                warn!(input = %input.display(), %error, "batch item failed");
                on_progress(BatchEvent::Failed {
                    input: input.clone(),
                    error: error.clone(),
                });
                report.failed.push((input.clone(), error));
            }
        }
    }

    info!(
        converted = report.converted.len(),
        failed = report.failed.len(),
        "batch finished"
    );
    report
}

fn batch_output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "icon".to_string());
    output_dir.join(format!("{}.ico", stem))
}

#[derive(Debug, Clone)]
pub struct FaviconRequest {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub options: FaviconOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaviconResponse {
    pub written: Vec<PathBuf>,
    pub html: String,
}

/// Generate a favicon set and write it into the output directory.
///
/// Nothing is written unless every artifact was generated.
pub fn generate_favicons(request: &FaviconRequest) -> Result<FaviconResponse, IconError> {
    validate_prefix(&request.options.prefix)?;

    let source = load_source(&request.input)?;
    let set = generate_favicon_set(&source, &request.options)?;
    let html = set.html().unwrap_or_default().to_string();

    let written = write_artifacts(&request.output_dir, &set.artifacts)?;
    Ok(FaviconResponse { written, html })
}

/// Declared entry sizes of an ICO file on disk.
pub fn inspect_ico(path: &Path) -> Result<Vec<(u32, u32)>, IconError> {
    let bytes = fs::read(path).map_err(|e| IconError::Decode {
        reason: format!("failed to read '{}': {}", path.display(), e),
    })?;
    ico_entry_sizes(&bytes)
}
