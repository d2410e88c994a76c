//! Window statistics over answered questions.

use std::collections::VecDeque;

use crate::types::{PerformanceMetrics, PerformanceRecord};

pub fn compute_metrics(window: &VecDeque<PerformanceRecord>) -> PerformanceMetrics {
    let sample_size = window.len();
    if sample_size == 0 {
        return PerformanceMetrics {
            success_rate: 0.0,
            avg_time_spent: None,
            consistency: 1.0,
            sample_size,
        };
    }

    let correct = window.iter().filter(|r| r.is_correct).count();
    let success_rate = correct as f64 / sample_size as f64;

    let times: Vec<f64> = window.iter().filter_map(|r| r.time_spent_seconds).collect();
    let avg_time_spent = if times.is_empty() {
        None
    } else {
        Some(times.iter().sum::<f64>() / times.len() as f64)
    };

    PerformanceMetrics {
        success_rate,
        avg_time_spent,
        consistency: consistency(window, success_rate),
        sample_size,
    }
}

/// `1 - min(1, 2 * sigma)` over correctness as 0/1, population deviation.
fn consistency(window: &VecDeque<PerformanceRecord>, mean: f64) -> f64 {
    if window.len() < 2 {
        return 1.0;
    }

    let variance = window
        .iter()
        .map(|r| {
            let x = if r.is_correct { 1.0 } else { 0.0 };
            (x - mean).powi(2)
        })
        .sum::<f64>()
        / window.len() as f64;

    1.0 - (2.0 * variance.sqrt()).min(1.0)
}

/// Success rate over the last `count` records, `None` when fewer exist.
pub fn recent_success_rate(window: &VecDeque<PerformanceRecord>, count: usize) -> Option<f64> {
    if count == 0 || window.len() < count {
        return None;
    }
    let correct = window.iter().rev().take(count).filter(|r| r.is_correct).count();
    Some(correct as f64 / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DifficultyLevel;

    fn window(answers: &[(bool, Option<f64>)]) -> VecDeque<PerformanceRecord> {
        answers
            .iter()
            .enumerate()
            .map(|(i, &(is_correct, time_spent_seconds))| PerformanceRecord {
                question_id: format!("q{}", i),
                is_correct,
                time_spent_seconds,
                difficulty: DifficultyLevel::Medium,
                timestamp: i as i64,
            })
            .collect()
    }

    #[test]
    fn test_uniform_window_is_consistent() {
        let m = compute_metrics(&window(&[(true, None), (true, None), (true, None)]));
        assert_eq!(m.success_rate, 1.0);
        assert_eq!(m.consistency, 1.0);
        assert_eq!(m.avg_time_spent, None);
        assert_eq!(m.sample_size, 3);
    }

    #[test]
    fn test_single_entry_consistency() {
        let m = compute_metrics(&window(&[(false, Some(4.0))]));
        assert_eq!(m.success_rate, 0.0);
        assert_eq!(m.consistency, 1.0);
        assert_eq!(m.avg_time_spent, Some(4.0));
    }

    #[test]
    fn test_alternating_window_is_inconsistent() {
        // mean 0.5, sigma 0.5 -> 1 - min(1, 1.0) = 0
        let m = compute_metrics(&window(&[(true, None), (false, None), (true, None), (false, None)]));
        assert_eq!(m.success_rate, 0.5);
        assert!(m.consistency.abs() < 1e-12);
    }

    #[test]
    fn test_two_of_three_consistency() {
        // sigma = sqrt(2/9) ~= 0.4714 -> consistency ~= 0.0572
        let m = compute_metrics(&window(&[(true, None), (true, None), (false, None)]));
        let expected = 1.0 - 2.0 * (2.0f64 / 9.0).sqrt();
        assert!((m.consistency - expected).abs() < 1e-12);
    }

    #[test]
    fn test_avg_time_skips_missing() {
        let m = compute_metrics(&window(&[(true, Some(2.0)), (true, None), (false, Some(6.0))]));
        assert_eq!(m.avg_time_spent, Some(4.0));
    }

    #[test]
    fn test_empty_window() {
        let m = compute_metrics(&VecDeque::new());
        assert_eq!(m.sample_size, 0);
        assert_eq!(m.success_rate, 0.0);
    }

    #[test]
    fn test_recent_success_rate() {
        let w = window(&[(false, None), (true, None), (false, None)]);
        assert_eq!(recent_success_rate(&w, 2), Some(0.5));
        assert_eq!(recent_success_rate(&w, 3), Some(1.0 / 3.0));
        assert_eq!(recent_success_rate(&w, 4), None);
    }
}
