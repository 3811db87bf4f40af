//! Tests for biodiversity score summaries

use greenreach::biodiversity::{ScoreComparison, ScoreSummary};

#[test]
fn test_from_scores_empty_is_none() {
    assert!(ScoreSummary::from_scores(2020, &[]).is_none());
}

#[test]
fn test_from_scores_mean_and_std_dev() {
    let summary = ScoreSummary::from_scores(2020, &[2.0, 4.0]).unwrap();

    assert_eq!(summary.year, 2020);
    assert_eq!(summary.sample_count, 2);
    assert!((summary.mean - 3.0).abs() < f64::EPSILON);
    assert!((summary.std_dev - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_comparison_matches_published_figures() {
    // City-wide means for 2020 and 2021: 3.166 -> 3.676, a 16.1% increase.
    let baseline = ScoreSummary {
        year: 2020,
        mean: 3.166,
        std_dev: 1.8,
        sample_count: 100,
    };
    let current = ScoreSummary {
        year: 2021,
        mean: 3.676,
        std_dev: 1.9,
        sample_count: 100,
    };

    let comparison = ScoreComparison::between(baseline, current);

    assert!((comparison.delta - 0.51).abs() < 1e-9);
    assert!((comparison.percent_change - 16.1).abs() < 0.05);
}

#[test]
fn test_comparison_with_zero_baseline() {
    let baseline = ScoreSummary {
        year: 2020,
        mean: 0.0,
        std_dev: 0.0,
        sample_count: 1,
    };
    let current = ScoreSummary {
        year: 2021,
        mean: 1.0,
        std_dev: 0.0,
        sample_count: 1,
    };

    let comparison = ScoreComparison::between(baseline, current);
    assert_eq!(comparison.percent_change, 0.0);
    assert_eq!(comparison.delta, 1.0);
}
