pub mod json;

use serde::Serialize;

use crate::pipeline::ScoreReport;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreStats {
    pub median: f64,
    pub p10: f64,
    pub p90: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub tool_version: String,
    pub input: Option<String>,
    pub mode: String,

    pub n_samples: usize,
    pub n_categories: usize,
    pub categories: Vec<String>,
    pub n_scored: usize,
    pub n_missing_score: usize,

    pub normalization_applied: bool,
    pub rescaled_rows: Vec<String>,
    pub zero_sum_rows: Vec<String>,
    pub missing_categories: Vec<String>,

    pub score: Option<ScoreStats>,
}

impl ScoreStats {
    /// Nearest-rank order statistics over the defined scores; `None` when
    /// every score is missing.
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        let mut sorted = scores.to_vec();
        sorted.sort_by(f64::total_cmp);
        Some(Self {
            median: nearest_rank(&sorted, 0.5)?,
            p10: nearest_rank(&sorted, 0.10)?,
            p90: nearest_rank(&sorted, 0.90)?,
            min: *sorted.first()?,
            max: *sorted.last()?,
        })
    }
}

/// Smallest value with at least `p` of the sample at or below it.
/// `sorted` must be in ascending order.
pub fn nearest_rank(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let rank = (p * sorted.len() as f64).ceil() as usize;
    Some(sorted[rank.clamp(1, sorted.len()) - 1])
}

pub fn build_summary(
    report: &ScoreReport,
    tool_version: &str,
    input: Option<&str>,
) -> SummaryData {
    let defined: Vec<f64> = report.scores.iter().filter_map(|s| s.score).collect();

    SummaryData {
        tool: "imth-score".to_string(),
        tool_version: tool_version.to_string(),
        input: input.map(str::to_string),
        mode: report.mode.as_str().to_string(),
        n_samples: report.scores.len(),
        n_categories: report.categories.len(),
        categories: report.categories.clone(),
        n_scored: defined.len(),
        n_missing_score: report.n_missing_scores(),
        normalization_applied: report.normalization.applied,
        rescaled_rows: report.normalization.rescaled_rows.clone(),
        zero_sum_rows: report.normalization.zero_sum_rows.clone(),
        missing_categories: report.missing_categories(),
        score: ScoreStats::from_scores(&defined),
    }
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

/// `NA` for a missing score, six decimals otherwise.
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(v) => format_f64_6(v),
        None => "NA".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
