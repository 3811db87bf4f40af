//! Biodiversity proxy score summaries.
//!
//! Land-cover classes are scored offline for the ecological richness
//! they typically support; this module summarizes those per-pixel scores
//! and compares two years city-wide.

use serde::Serialize;

/// Distribution summary of the biodiversity score for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub year: u16,
    /// City-wide mean score.
    pub mean: f64,
    /// Population standard deviation. High values indicate a landscape
    /// of extremes: large low-scoring urban areas punctuated by small
    /// high-scoring pockets.
    pub std_dev: f64,
    pub sample_count: usize,
}

impl ScoreSummary {
    /// Summarize a set of per-pixel scores. Returns `None` for an empty
    /// set.
    pub fn from_scores(year: u16, scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let n = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        Some(Self {
            year,
            mean,
            std_dev: variance.sqrt(),
            sample_count: scores.len(),
        })
    }
}

/// Year-over-year change in the city-wide mean score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreComparison {
    pub baseline: ScoreSummary,
    pub current: ScoreSummary,
    /// Change of the mean score relative to the baseline year.
    pub delta: f64,
    /// Change as a percentage of the baseline mean.
    pub percent_change: f64,
}

impl ScoreComparison {
    /// Compare two yearly summaries, current against baseline.
    pub fn between(baseline: ScoreSummary, current: ScoreSummary) -> Self {
        let delta = current.mean - baseline.mean;
        let percent_change = if baseline.mean == 0.0 {
            0.0
        } else {
            delta / baseline.mean * 100.0
        };
        Self {
            baseline,
            current,
            delta,
            percent_change,
        }
    }
}
