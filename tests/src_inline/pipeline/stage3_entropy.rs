use super::*;

#[test]
fn test_known_values() {
    assert_eq!(shannon_entropy(&[0.5, 0.5, 0.0, 0.0]), Some(1.0));
    assert_eq!(shannon_entropy(&[1.0, 0.0, 0.0, 0.0]), Some(0.0));
    assert_eq!(shannon_entropy(&[0.25, 0.25, 0.25, 0.25]), Some(2.0));
}

#[test]
fn test_all_zero_is_missing() {
    assert_eq!(shannon_entropy(&[0.0, 0.0, 0.0]), None);
    assert_eq!(shannon_entropy(&[]), None);
}

#[test]
fn test_single_category() {
    assert_eq!(shannon_entropy(&[1.0]), Some(0.0));
}

#[test]
fn test_bounds_by_support() {
    let rows: &[&[f64]] = &[
        &[0.7, 0.2, 0.1],
        &[0.1, 0.1, 0.1, 0.7, 0.0],
        &[0.6, 0.4],
        &[0.05, 0.15, 0.3, 0.5],
    ];
    for row in rows {
        let k = row.iter().filter(|&&p| p > 0.0).count() as f64;
        let h = shannon_entropy(row).unwrap();
        assert!(h > 0.0);
        assert!(h < k.log2());
    }

    let uniform = [0.2; 5];
    let h = shannon_entropy(&uniform).unwrap();
    assert!((h - 5f64.log2()).abs() < 1e-12);
}

#[test]
fn test_score_rows_keeps_order() {
    let table = ProportionTable::from_records(&[
        ("B", &[("x", 0.5), ("y", 0.5)][..]),
        ("A", &[("x", 0.0), ("y", 0.0)][..]),
    ])
    .unwrap();
    let scores = score_rows(&table);
    assert_eq!(
        scores,
        vec![
            SampleScore {
                sample: "B".to_string(),
                score: Some(1.0),
            },
            SampleScore {
                sample: "A".to_string(),
                score: None,
            },
        ]
    );
}
