use crate::input::ProportionTable;

#[derive(Debug, Clone, PartialEq)]
pub struct SampleScore {
    pub sample: String,
    /// `None` when the row has no positive proportion.
    pub score: Option<f64>,
}

/// Shannon entropy in bits, H = -Σ p·log2(p) over the positive entries.
///
/// Zero entries contribute nothing. Returns `None` when no entry is positive,
/// so an all-zero row never turns into NaN.
pub fn shannon_entropy(row: &[f64]) -> Option<f64> {
    let mut any_positive = false;
    let mut entropy = 0.0;
    for &p in row {
        if p > 0.0 {
            any_positive = true;
            entropy -= p * p.log2();
        }
    }
    if any_positive { Some(entropy) } else { None }
}

pub fn score_rows(table: &ProportionTable) -> Vec<SampleScore> {
    table
        .samples()
        .iter()
        .zip(table.rows())
        .map(|(sample, row)| SampleScore {
            sample: sample.clone(),
            score: shannon_entropy(row),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_entropy.rs"]
mod tests;
