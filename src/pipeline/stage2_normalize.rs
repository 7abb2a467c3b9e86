use crate::input::ProportionTable;
use crate::pipeline::{ROW_SUM_TOLERANCE, ScoreError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizationAudit {
    /// True when at least one row was divided by its sum.
    pub applied: bool,
    pub rescaled_rows: Vec<String>,
    /// Rows summing to zero; left untouched and scored as missing.
    pub zero_sum_rows: Vec<String>,
}

/// Fails on the first value outside [0, 1]. NaN counts as out of range.
pub fn check_range(table: &ProportionTable) -> Result<(), ScoreError> {
    for (sample, row) in table.samples().iter().zip(table.rows()) {
        for (category, &value) in table.categories().iter().zip(row.iter()) {
            if !(0.0..=1.0).contains(&value) {
                return Err(ScoreError::OutOfRange {
                    sample: sample.clone(),
                    category: category.clone(),
                    value,
                });
            }
        }
    }
    Ok(())
}

pub fn row_sums(table: &ProportionTable) -> Vec<f64> {
    table.rows().iter().map(|row| row.iter().sum()).collect()
}

/// Rescales every row to sum to 1 unless all rows already do.
pub fn normalize_rows(table: &ProportionTable) -> (ProportionTable, NormalizationAudit) {
    let sums = row_sums(table);
    let mut audit = NormalizationAudit::default();

    for (sample, &sum) in table.samples().iter().zip(sums.iter()) {
        if sum == 0.0 {
            audit.zero_sum_rows.push(sample.clone());
        } else if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
            audit.rescaled_rows.push(sample.clone());
        }
    }

    if !audit.zero_sum_rows.is_empty() {
        tracing::debug!(
            rows = %audit.zero_sum_rows.join(","),
            "rows sum to zero; skipping rescale"
        );
    }

    if audit.rescaled_rows.is_empty() {
        return (table.clone(), audit);
    }

    tracing::warn!(
        "{} of {} rows do not sum to 1; proportions were rescaled by row sum",
        audit.rescaled_rows.len(),
        table.n_samples()
    );
    audit.applied = true;

    let values = table
        .rows()
        .iter()
        .zip(sums.iter())
        .map(|(row, &sum)| {
            if sum == 0.0 {
                row.clone()
            } else {
                row.iter().map(|v| v / sum).collect()
            }
        })
        .collect();

    let normalized = ProportionTable::from_parts(
        table.samples().to_vec(),
        table.categories().to_vec(),
        values,
    );
    (normalized, audit)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
