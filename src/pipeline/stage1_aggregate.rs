use crate::groups::defs::GroupDef;
use crate::groups::loader::{missing_members, resolve_groups};
use crate::groups::GroupAudit;
use crate::input::ProportionTable;

#[derive(Debug)]
pub struct Stage1Output {
    pub table: ProportionTable,
    pub audits: Vec<GroupAudit>,
}

/// Sums fine columns into one column per group. Columns outside the mapping
/// are dropped; absent members count as zero.
pub fn aggregate_groups(table: &ProportionTable, defs: &[GroupDef]) -> Stage1Output {
    let (group_set, audits) = resolve_groups(defs, table.categories());

    let missing = missing_members(&audits);
    if !missing.is_empty() {
        tracing::warn!(
            "{} expected cell types missing from input, counted as zero: {}",
            missing.len(),
            missing.join(", ")
        );
    }

    let mut values = Vec::with_capacity(table.n_samples());
    for row in table.rows() {
        let mut out = Vec::with_capacity(group_set.groups.len());
        for group in &group_set.groups {
            let mut sum = 0f64;
            for &col in &group.columns {
                sum += row[col];
            }
            out.push(sum);
        }
        values.push(out);
    }

    let categories = group_set
        .groups
        .iter()
        .map(|g| g.name.to_string())
        .collect();

    let aggregated = ProportionTable::from_parts(table.samples().to_vec(), categories, values);

    Stage1Output {
        table: aggregated,
        audits,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_aggregate.rs"]
mod tests;
