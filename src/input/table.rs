use std::collections::HashSet;

use crate::input::InputError;

/// Samples × categories matrix of cell-type proportions.
///
/// Rows are keyed by sample identifier and kept in input order; every row has
/// exactly one value per category.
#[derive(Debug, Clone, PartialEq)]
pub struct ProportionTable {
    samples: Vec<String>,
    categories: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl ProportionTable {
    pub fn new(
        samples: Vec<String>,
        categories: Vec<String>,
        values: Vec<Vec<f64>>,
    ) -> Result<Self, InputError> {
        if samples.len() != values.len() {
            return Err(InputError::InvalidInput(format!(
                "{} sample ids for {} rows",
                samples.len(),
                values.len()
            )));
        }
        for (sample, row) in samples.iter().zip(values.iter()) {
            if row.len() != categories.len() {
                return Err(InputError::InvalidInput(format!(
                    "row {} has {} values, expected {}",
                    sample,
                    row.len(),
                    categories.len()
                )));
            }
        }

        let mut seen = HashSet::with_capacity(samples.len());
        for sample in &samples {
            if !seen.insert(sample.as_str()) {
                return Err(InputError::InvalidInput(format!(
                    "duplicate sample id: {sample}"
                )));
            }
        }

        let mut seen = HashSet::with_capacity(categories.len());
        for category in &categories {
            if !seen.insert(category.as_str()) {
                return Err(InputError::InvalidInput(format!(
                    "duplicate category: {category}"
                )));
            }
        }

        Ok(Self {
            samples,
            categories,
            values,
        })
    }

    /// Builds a table from `(sample, [(category, value)])` records. Categories
    /// are taken from the first record; later records missing a category get 0.
    #[cfg(test)]
    pub(crate) fn from_records(records: &[(&str, &[(&str, f64)])]) -> Result<Self, InputError> {
        let categories: Vec<String> = records
            .first()
            .map(|(_, cells)| cells.iter().map(|(c, _)| c.to_string()).collect())
            .unwrap_or_default();

        let mut samples = Vec::with_capacity(records.len());
        let mut values = Vec::with_capacity(records.len());
        for (sample, cells) in records {
            samples.push(sample.to_string());
            let row = categories
                .iter()
                .map(|cat| {
                    cells
                        .iter()
                        .find(|(c, _)| c == cat)
                        .map(|(_, v)| *v)
                        .unwrap_or(0.0)
                })
                .collect();
            values.push(row);
        }
        Self::new(samples, categories, values)
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    #[cfg(test)]
    pub(crate) fn row(&self, idx: usize) -> &[f64] {
        &self.values[idx]
    }

    pub fn n_samples(&self) -> usize {
        self.samples.len()
    }

    pub fn n_categories(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty() || self.categories.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn column_index(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }

    #[cfg(test)]
    pub(crate) fn value(&self, sample: &str, category: &str) -> Option<f64> {
        let row = self.samples.iter().position(|s| s == sample)?;
        let col = self.column_index(category)?;
        Some(self.values[row][col])
    }

    /// Drops the named columns, keeping the remaining ones in order.
    pub fn without_columns(&self, drop: &[&str]) -> Self {
        let keep: Vec<usize> = (0..self.categories.len())
            .filter(|&i| !drop.contains(&self.categories[i].as_str()))
            .collect();
        let categories = keep.iter().map(|&i| self.categories[i].clone()).collect();
        let values = self
            .values
            .iter()
            .map(|row| keep.iter().map(|&i| row[i]).collect())
            .collect();
        Self::from_parts(self.samples.clone(), categories, values)
    }

    /// Rebuilds a table whose shape is derived from an already validated one.
    pub(crate) fn from_parts(
        samples: Vec<String>,
        categories: Vec<String>,
        values: Vec<Vec<f64>>,
    ) -> Self {
        debug_assert_eq!(samples.len(), values.len());
        debug_assert!(values.iter().all(|r| r.len() == categories.len()));
        Self {
            samples,
            categories,
            values,
        }
    }
}
