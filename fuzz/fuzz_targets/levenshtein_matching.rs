// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded edit distance.
//!
//! The bounded DP bails out early on hopeless pairs. If an early exit ever
//! fires on a pair that was actually within budget, the fuzzy fallback
//! silently drops good matches. strsim is the reference.

#![no_main]

use arbitrary::Arbitrary;
use ferret::fuzzy::{levenshtein_bounded, normalized_distance};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    target: String,
    max: u8,
    threshold: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let query: String = input.query.chars().take(50).collect();
    let target: String = input.target.chars().take(100).collect();
    let max = usize::from(input.max % 16);

    let expected = strsim::levenshtein(&query, &target);

    // INVARIANT 1: Within budget, the distance is exact
    match levenshtein_bounded(&query, &target, max) {
        Some(d) => assert_eq!(d, expected, "query='{}', target='{}'", query, target),
        None => assert!(
            expected > max,
            "rejected pair within budget: distance {} <= {} for query='{}', target='{}'",
            expected, max, query, target
        ),
    }

    // INVARIANT 2: Length difference is a lower bound
    let len_diff = query.chars().count().abs_diff(target.chars().count());
    assert!(len_diff <= expected);

    // INVARIANT 3: Normalized distance stays within [0, threshold]
    let threshold = f64::from(input.threshold) / 255.0;
    if let Some(d) = normalized_distance(&query, &target, threshold) {
        assert!((0.0..=threshold + 1e-12).contains(&d), "d={} threshold={}", d, threshold);
    }

    // INVARIANT 4: A string is at distance 0 from itself
    assert_eq!(levenshtein_bounded(&query, &query, 0), Some(0));
});
