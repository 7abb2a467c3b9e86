use super::defs::builtin_groups;
use super::loader::{missing_members, resolve_groups};

fn categories(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_builtin_mapping_shape() {
    let defs = builtin_groups();
    assert_eq!(defs.len(), 14);
    let members: usize = defs.iter().map(|d| d.members.len()).sum();
    assert_eq!(members, 22);
    assert_eq!(defs[0].name, "B cells");
}

#[test]
fn test_members_are_unique() {
    let mut all: Vec<&str> = builtin_groups()
        .iter()
        .flat_map(|d| d.members.iter().copied())
        .collect();
    let n = all.len();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), n);
}

#[test]
fn test_resolve_reports_missing() {
    let cats = categories(&["B cells naive", "B cells memory", "T cells CD8", "Unrelated"]);
    let (set, audits) = resolve_groups(builtin_groups(), &cats);

    let b = &set.groups[0];
    assert_eq!(b.columns, vec![0, 1]);
    assert!(audits[0].missing_members.is_empty());

    let macro_audit = audits.iter().find(|a| a.group == "Macrophages").unwrap();
    assert_eq!(macro_audit.members_defined, 3);
    assert_eq!(macro_audit.members_present, 0);
    assert_eq!(
        macro_audit.missing_members,
        vec!["Macrophages M0", "Macrophages M1", "Macrophages M2"]
    );

    let missing = missing_members(&audits);
    assert_eq!(missing.len(), 22 - 3);
    assert!(!missing.iter().any(|m| m == "T cells CD8"));
}

#[test]
fn test_resolve_order_stable() {
    let cats = categories(&["Neutrophils", "Eosinophils"]);
    let (a, _) = resolve_groups(builtin_groups(), &cats);
    let (b, _) = resolve_groups(builtin_groups(), &cats);
    for (x, y) in a.groups.iter().zip(b.groups.iter()) {
        assert_eq!(x.name, y.name);
        assert_eq!(x.columns, y.columns);
    }
}
