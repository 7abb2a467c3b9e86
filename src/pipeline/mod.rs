pub mod stage1_aggregate;
pub mod stage2_normalize;
pub mod stage3_entropy;
pub mod stage4_report;

use std::str::FromStr;

use crate::groups::{GroupAudit, GroupDef, builtin_groups};
use crate::input::ProportionTable;
use stage1_aggregate::aggregate_groups;
use stage2_normalize::{NormalizationAudit, check_range, normalize_rows};
use stage3_entropy::{SampleScore, score_rows};

/// Largest allowed |row sum - 1| before rows are rescaled.
pub const ROW_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreMode {
    /// Fold fine cell types into coarse groups, then score.
    Aggregate,
    /// Score every input column as its own category.
    Direct,
}

impl ScoreMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreMode::Aggregate => "aggregate",
            ScoreMode::Direct => "direct",
        }
    }
}

impl FromStr for ScoreMode {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aggregate" => Ok(ScoreMode::Aggregate),
            "direct" => Ok(ScoreMode::Direct),
            other => Err(ScoreError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("input table has no samples or no categories")]
    EmptyTable,
    #[error("unknown mode {0:?} (use aggregate|direct)")]
    UnknownMode(String),
    #[error("proportion out of range [0, 1]: sample={sample}, category={category}, value={value}")]
    OutOfRange {
        sample: String,
        category: String,
        value: f64,
    },
}

#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub mode: ScoreMode,
    pub scores: Vec<SampleScore>,
    pub categories: Vec<String>,
    pub group_audits: Vec<GroupAudit>,
    pub normalization: NormalizationAudit,
}

impl ScoreReport {
    /// Expected fine categories that were absent and counted as zero.
    pub fn missing_categories(&self) -> Vec<String> {
        crate::groups::loader::missing_members(&self.group_audits)
    }

    pub fn n_missing_scores(&self) -> usize {
        self.scores.iter().filter(|s| s.score.is_none()).count()
    }
}

/// Scores `table` with the built-in LM22 grouping. `mode` must be
/// `"aggregate"` or `"direct"`.
pub fn calculate_imth_score(
    table: &ProportionTable,
    mode: &str,
) -> Result<ScoreReport, ScoreError> {
    let mode = mode.parse::<ScoreMode>()?;
    calculate_imth_score_with_groups(table, mode, builtin_groups())
}

pub fn calculate_imth_score_with_groups(
    table: &ProportionTable,
    mode: ScoreMode,
    groups: &[GroupDef],
) -> Result<ScoreReport, ScoreError> {
    if table.is_empty() {
        return Err(ScoreError::EmptyTable);
    }
    check_range(table)?;

    let (scoped, group_audits) = match mode {
        ScoreMode::Aggregate => {
            let out = aggregate_groups(table, groups);
            // Group sums must still be proportions.
            check_range(&out.table)?;
            (out.table, out.audits)
        }
        ScoreMode::Direct => (table.clone(), Vec::new()),
    };

    let (normalized, normalization) = normalize_rows(&scoped);
    let scores = score_rows(&normalized);

    tracing::info!(
        mode = mode.as_str(),
        samples = scores.len(),
        categories = normalized.n_categories(),
        "computed ImTH scores"
    );

    Ok(ScoreReport {
        mode,
        scores,
        categories: normalized.categories().to_vec(),
        group_audits,
        normalization,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
