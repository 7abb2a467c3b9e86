use std::path::Path;

pub mod table;
pub mod tsv;

pub use table::ProportionTable;

use tsv::{open_maybe_gz, parse_table};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Reads a tab-delimited proportions table (optionally `.gz`) from disk.
pub fn load_proportions(path: &Path) -> Result<ProportionTable, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(format!(
            "proportions table not found: {}",
            path.display()
        )));
    }
    let reader = open_maybe_gz(path)?;
    let table = parse_table(reader)?;
    tracing::info!(
        path = %path.display(),
        samples = table.n_samples(),
        categories = table.n_categories(),
        "loaded proportions table"
    );
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
