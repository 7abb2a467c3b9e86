//! Cell-type deconvolution of bulk expression.
//!
//! The estimator itself lives outside this crate; [`Deconvolver`] is the seam
//! and [`cibersort::ExternalCibersort`] drives the usual CIBERSORT script.

pub mod cibersort;

use std::path::{Path, PathBuf};

use crate::input::{InputError, ProportionTable};

pub use cibersort::ExternalCibersort;

pub const DEFAULT_SIGNATURE_FILE: &str = "LM22.txt";
pub const DEFAULT_PERMUTATIONS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeconvolutionRequest {
    pub signature_matrix: PathBuf,
    pub mixture: PathBuf,
    pub permutations: u32,
    pub quantile_normalize: bool,
}

impl DeconvolutionRequest {
    pub fn new(signature_matrix: PathBuf, mixture: PathBuf) -> Self {
        Self {
            signature_matrix,
            mixture,
            permutations: DEFAULT_PERMUTATIONS,
            quantile_normalize: true,
        }
    }

    /// Fails when either input file is absent.
    pub fn validate(&self) -> Result<(), DeconvError> {
        if !self.signature_matrix.is_file() {
            return Err(DeconvError::MissingSignature(self.signature_matrix.clone()));
        }
        if !self.mixture.is_file() {
            return Err(DeconvError::MissingMixture(self.mixture.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeconvError {
    #[error("signature matrix not found: {}", .0.display())]
    MissingSignature(PathBuf),
    #[error("mixture file not found: {}", .0.display())]
    MissingMixture(PathBuf),
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
    #[error("unreadable deconvolution output: {0}")]
    Output(#[from] InputError),
}

pub trait Deconvolver {
    fn deconvolve(&self, request: &DeconvolutionRequest) -> Result<ProportionTable, DeconvError>;
}

/// Explicit path wins; otherwise `LM22.txt` inside `resource_dir`.
pub fn resolve_signature_matrix(explicit: Option<&Path>, resource_dir: &Path) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => resource_dir.join(DEFAULT_SIGNATURE_FILE),
    }
}

/// Runs `deconvolver` after checking the request's inputs exist.
pub fn run_deconvolution(
    deconvolver: &dyn Deconvolver,
    request: &DeconvolutionRequest,
) -> Result<ProportionTable, DeconvError> {
    request.validate()?;
    tracing::info!(
        signature = %request.signature_matrix.display(),
        mixture = %request.mixture.display(),
        permutations = request.permutations,
        quantile_normalize = request.quantile_normalize,
        "running deconvolution"
    );
    let table = deconvolver.deconvolve(request)?;
    tracing::info!(
        samples = table.n_samples(),
        cell_types = table.n_categories(),
        "deconvolution finished"
    );
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/deconv/mod.rs"]
mod tests;
