use super::*;
use crate::input::ProportionTable;
use crate::pipeline::calculate_imth_score;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("imth_report_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn build_report(mode: &str) -> ScoreReport {
    let table = ProportionTable::from_records(&[
        ("S2", &[("B cells naive", 0.5), ("Monocytes", 0.5)][..]),
        ("S1", &[("B cells naive", 0.0), ("Monocytes", 0.0)][..]),
    ])
    .unwrap();
    calculate_imth_score(&table, mode).unwrap()
}

#[test]
fn test_scores_tsv_layout() {
    let dir = make_temp_dir();
    let report = build_report("direct");
    let path = dir.join(SCORES_FILE);
    write_scores_tsv(&report, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["Sample\tImTH_Score", "S2\t1.000000", "S1\tNA"]);
}

#[test]
fn test_write_reports_aggregate() {
    let dir = make_temp_dir();
    let report = build_report("aggregate");
    let input = Stage4Input {
        report: &report,
        tool_version: "0.0.0".to_string(),
        input_path: Some(PathBuf::from("props.tsv")),
    };
    write_reports(&input, &dir).unwrap();

    assert!(dir.join(SCORES_FILE).exists());
    assert!(dir.join(GROUPS_FILE).exists());

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join(SUMMARY_FILE)).unwrap()).unwrap();
    assert_eq!(summary["tool"], "imth-score");
    assert_eq!(summary["mode"], "aggregate");
    assert_eq!(summary["n_samples"], 2);
    assert_eq!(summary["n_categories"], 14);
    assert_eq!(summary["n_missing_score"], 1);
    assert_eq!(summary["zero_sum_rows"][0], "S1");
    assert_eq!(summary["score"]["median"], 1.0);

    let groups = fs::read_to_string(dir.join(GROUPS_FILE)).unwrap();
    assert!(groups.starts_with("group\tmembers_defined\tmembers_present\tmissing_members\n"));
    assert!(groups.contains("B cells\t2\t1\tB cells memory\n"));
}

#[test]
fn test_direct_mode_skips_groups_report() {
    let dir = make_temp_dir();
    let report = build_report("direct");
    let input = Stage4Input {
        report: &report,
        tool_version: "0.0.0".to_string(),
        input_path: None,
    };
    write_reports(&input, &dir).unwrap();
    assert!(!dir.join(GROUPS_FILE).exists());
}
