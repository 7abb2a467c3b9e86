use super::*;
use crate::groups::builtin_groups;

#[test]
fn test_b_cells_summed() {
    let table = ProportionTable::from_records(&[(
        "S1",
        &[
            ("B cells naive", 0.3),
            ("B cells memory", 0.2),
            ("T cells CD8", 0.5),
        ][..],
    )])
    .unwrap();

    let out = aggregate_groups(&table, builtin_groups());
    assert_eq!(out.table.n_categories(), 14);
    assert_eq!(out.table.value("S1", "B cells"), Some(0.5));
    assert_eq!(out.table.value("S1", "T cells CD8"), Some(0.5));
    assert_eq!(out.table.value("S1", "Macrophages"), Some(0.0));

    let missing = missing_members(&out.audits);
    assert!(missing.iter().any(|m| m == "Macrophages M0"));
}

#[test]
fn test_unmapped_columns_dropped_and_rows_kept() {
    let table = ProportionTable::from_records(&[
        ("S2", &[("Monocytes", 0.6), ("Fibroblasts", 0.4)][..]),
        ("S1", &[("Monocytes", 1.0), ("Fibroblasts", 0.0)][..]),
    ])
    .unwrap();

    let out = aggregate_groups(&table, builtin_groups());
    assert!(out.table.column_index("Fibroblasts").is_none());
    assert_eq!(out.table.samples(), &["S2", "S1"]);
    assert_eq!(out.table.value("S2", "Monocytes"), Some(0.6));
}

#[test]
fn test_injected_mapping() {
    const CUSTOM: &[GroupDef] = &[GroupDef {
        name: "Lymphoid",
        members: &["B", "T"],
    }];
    let table =
        ProportionTable::from_records(&[("S1", &[("B", 0.25), ("T", 0.25), ("M", 0.5)][..])])
            .unwrap();

    let out = aggregate_groups(&table, CUSTOM);
    assert_eq!(out.table.categories(), &["Lymphoid"]);
    assert_eq!(out.table.row(0), &[0.5]);
    assert!(out.audits[0].missing_members.is_empty());
}
