// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance. If two strings differ
//! in length by more than the budget, skip the O(nm) DP entirely. The fuzzy
//! fallback compares every query token against every distinct field token, so
//! most comparisons end here.

/// Edit distance between `a` and `b` if it is at most `max`.
///
/// Two early exits:
/// 1. Length difference exceeds `max`
/// 2. The minimum of a DP row exceeds `max` (rows never decrease after that)
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    // Character counts, not byte lengths
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for (i, ac) in a.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    let distance = dp[b.len()];
    (distance <= max).then_some(distance)
}

/// Edit distance scaled by the longer string: 0.0 identical, 1.0 nothing shared.
///
/// Anything above `threshold` is reported as `None`, which lets the DP bail out
/// early on hopeless pairs.
pub fn normalized_distance(a: &str, b: &str, threshold: f64) -> Option<f64> {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return Some(0.0);
    }
    let budget = (threshold * longest as f64).floor() as usize;
    levenshtein_bounded(a, b, budget).map(|d| d as f64 / longest as f64)
}
