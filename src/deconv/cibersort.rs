use std::io::Cursor;
use std::path::PathBuf;
use std::process::Command;

use crate::deconv::{DeconvError, DeconvolutionRequest, Deconvolver};
use crate::input::ProportionTable;
use crate::input::tsv::parse_table;

/// Per-sample fit statistics CIBERSORT appends after the cell-type columns.
pub const DIAGNOSTIC_COLUMNS: &[&str] = &["P-value", "Correlation", "RMSE"];

/// Runs an external CIBERSORT implementation and reads its tab-delimited
/// result table from stdout.
#[derive(Debug, Clone)]
pub struct ExternalCibersort {
    pub program: PathBuf,
    pub script: Option<PathBuf>,
}

impl Default for ExternalCibersort {
    fn default() -> Self {
        Self {
            program: PathBuf::from("Rscript"),
            script: None,
        }
    }
}

impl ExternalCibersort {
    pub fn new(program: PathBuf, script: Option<PathBuf>) -> Self {
        Self { program, script }
    }

    pub fn build_command(&self, request: &DeconvolutionRequest) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(script) = &self.script {
            cmd.arg(script);
        }
        cmd.arg("--sig")
            .arg(&request.signature_matrix)
            .arg("--mixture")
            .arg(&request.mixture)
            .arg("--perm")
            .arg(request.permutations.to_string())
            .arg("--qn")
            .arg(if request.quantile_normalize {
                "TRUE"
            } else {
                "FALSE"
            });
        cmd
    }
}

impl Deconvolver for ExternalCibersort {
    fn deconvolve(&self, request: &DeconvolutionRequest) -> Result<ProportionTable, DeconvError> {
        let program = self.program.display().to_string();
        let output = self
            .build_command(request)
            .output()
            .map_err(|source| DeconvError::Spawn {
                program: program.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(DeconvError::Failed {
                program,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let table = parse_table(Cursor::new(output.stdout))?;
        Ok(strip_diagnostics(&table))
    }
}

pub fn strip_diagnostics(table: &ProportionTable) -> ProportionTable {
    table.without_columns(DIAGNOSTIC_COLUMNS)
}
