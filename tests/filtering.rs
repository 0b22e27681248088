//! Properties of the timeout and outlier filters.

use bench_distill::filtering::{filter_outliers, filter_timeouts};
use bench_distill::statistics::tukey_fences;
use bench_distill::{CONNECTIVE_CUTOFF, MODAL_DEPTH_CUTOFF, TIMEOUT_THRESHOLD};

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Check that `subset` is a multiset subsequence of `superset`.
fn is_multiset_subset(subset: &[f64], superset: &[f64]) -> bool {
    let mut remaining = superset.to_vec();
    remaining.sort_unstable_by(|a, b| a.total_cmp(b));

    let mut sorted_subset = subset.to_vec();
    sorted_subset.sort_unstable_by(|a, b| a.total_cmp(b));

    let mut cursor = 0;
    for &value in &sorted_subset {
        match remaining[cursor..].iter().position(|&r| r == value) {
            Some(offset) => cursor += offset + 1,
            None => return false,
        }
    }
    true
}

fn noisy_samples(rng: &mut Xoshiro256PlusPlus, len: usize) -> Vec<f64> {
    (0..len)
        .map(|_| {
            // Mostly a tight cluster, occasionally a spike or a sentinel.
            match rng.gen_range(0..20) {
                0 => rng.gen_range(9_000.0..20_000.0),
                1 => rng.gen_range(50.0..500.0),
                _ => rng.gen_range(5.0..10.0),
            }
        })
        .collect()
}

#[test]
fn timeout_filter_bounds_and_membership() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    for _ in 0..50 {
        let len = rng.gen_range(0..200);
        let samples = noisy_samples(&mut rng, len);
        let filtered = filter_timeouts(&samples, TIMEOUT_THRESHOLD);

        assert!(filtered.iter().all(|&s| s < TIMEOUT_THRESHOLD));
        assert!(is_multiset_subset(&filtered, &samples));
    }
}

#[test]
fn retained_samples_sit_strictly_inside_the_input_fences() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
    for _ in 0..50 {
        let samples: Vec<f64> = (0..rng.gen_range(4..300))
            .map(|_| rng.gen_range(1.0..9_000.0))
            .collect();

        let bounds = tukey_fences(&samples);
        let (cleaned, _) = filter_outliers(&samples, TIMEOUT_THRESHOLD, CONNECTIVE_CUTOFF);

        for &sample in &cleaned {
            assert!(
                bounds.contains(sample),
                "retained {} outside fences ({}, {})",
                sample,
                bounds.low,
                bounds.high
            );
        }
        // Nothing outside the fences survives.
        for &sample in &samples {
            if !bounds.contains(sample) {
                assert!(!cleaned.contains(&sample));
            }
        }
        assert!(is_multiset_subset(&cleaned, &samples));
    }
}

#[test]
fn uniform_run_with_single_spike_drops_only_the_spike() {
    let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
    let (cleaned, stats) = filter_outliers(&samples, TIMEOUT_THRESHOLD, CONNECTIVE_CUTOFF);

    assert_eq!(cleaned, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    assert_eq!(stats.fence_removed, 1);
}

#[test]
fn second_pass_removes_nothing_new_on_benchmark_like_data() {
    // Clustered run-time shapes the harness actually produces. Each second
    // pass recomputes fences on the shrunk sequence and must still keep
    // everything the first pass kept.
    let fixtures: Vec<Vec<f64>> = vec![
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0],
        vec![5.1, 5.3, 5.7, 6.0, 6.2, 6.4, 6.8, 7.1, 7.4, 9.9],
        vec![6.6, 6.8, 7.0, 7.1, 7.3, 7.5, 10.2],
        vec![420.0, 431.0, 417.0, 425.0, 508.0, 548.0, 460.0, 412.0],
    ];

    for samples in fixtures {
        for cutoff in [CONNECTIVE_CUTOFF, MODAL_DEPTH_CUTOFF] {
            let (once, _) = filter_outliers(&samples, TIMEOUT_THRESHOLD, cutoff);
            let (twice, stats) = filter_outliers(&once, TIMEOUT_THRESHOLD, cutoff);
            assert_eq!(twice, once, "second pass changed {:?}", samples);
            assert_eq!(stats.fence_removed, 0);
            assert_eq!(stats.cutoff_removed, 0);
        }
    }
}

#[test]
fn cluster_with_sentinels_cleans_to_the_cluster() {
    let samples = vec![
        6.1, 6.4, 6.2, 10_000.0, 6.6, 6.3, 15_000.0, 6.5, 6.0, 6.7, 55.0,
    ];
    let (cleaned, stats) = filter_outliers(&samples, TIMEOUT_THRESHOLD, CONNECTIVE_CUTOFF);

    assert_eq!(stats.timeouts_removed, 2);
    assert_eq!(stats.fence_removed, 1); // the 55.0 spike
    assert_eq!(cleaned.len(), 8);
    assert!(cleaned.iter().all(|&s| (6.0..=6.7).contains(&s)));
}
