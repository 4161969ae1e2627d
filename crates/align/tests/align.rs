use kairos_align::{AlignError, align, nearest_positions};
use kairos_calendar::{TimeIndex, Timestamp};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Helper: random strictly increasing index with `n` points.
fn random_index(rng: &mut StdRng, n: usize, max_gap: i64) -> TimeIndex {
    let mut t = rng.random_range(-1_000_000i64..1_000_000);
    let mut nanos = Vec::with_capacity(n);
    for _ in 0..n {
        nanos.push(t);
        t += rng.random_range(1..=max_gap);
    }
    TimeIndex::from_nanos(nanos).unwrap()
}

/// Brute-force nearest distance from `target` to any element of `dense`.
fn min_distance(dense: &TimeIndex, target: Timestamp) -> i64 {
    dense
        .iter()
        .map(|t| (t.nanos() - target.nanos()).abs())
        .min()
        .unwrap()
}

#[test]
fn hourly_to_daily() {
    let hour = 3_600_000_000_000i64;
    let dense = TimeIndex::from_nanos((0..72).map(|h| h * hour)).unwrap();
    let reference = TimeIndex::from_nanos([0, 24 * hour, 48 * hour]).unwrap();
    let result = align(&dense, &reference).unwrap();
    assert_eq!(result, reference);
}

#[test]
fn offset_reference_picks_nearest() {
    let dense = TimeIndex::from_nanos([0, 10, 20, 30, 40]).unwrap();
    let reference = TimeIndex::from_nanos([3, 18, 26, 90]).unwrap();
    let result = align(&dense, &reference).unwrap();
    let nanos: Vec<i64> = result.iter().map(Timestamp::nanos).collect();
    assert_eq!(nanos, vec![0, 20, 30, 40]);
}

#[test]
fn reference_outside_range_maps_to_boundaries() {
    let dense = TimeIndex::from_nanos([100, 200, 300]).unwrap();
    let reference = TimeIndex::from_nanos([-500, 0, 1_000, 5_000]).unwrap();
    let result = align(&dense, &reference).unwrap();
    let nanos: Vec<i64> = result.iter().map(Timestamp::nanos).collect();
    assert_eq!(nanos, vec![100, 300]);
}

#[test]
fn single_dense_element() {
    let dense = TimeIndex::from_nanos([7]).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    for n in [0, 1, 5, 50] {
        let reference = random_index(&mut rng, n, 1_000);
        assert_eq!(align(&dense, &reference).unwrap(), dense);
    }
}

#[test]
fn empty_dense_is_rejected() {
    let reference = TimeIndex::from_nanos([1, 2]).unwrap();
    assert!(matches!(
        align(&TimeIndex::default(), &reference),
        Err(AlignError::EmptyIndex { field: "dense" })
    ));
}

#[test]
fn random_alignment_is_nearest_subsequence() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let n_dense = rng.random_range(2..200);
        let n_ref = rng.random_range(0..50);
        let dense = random_index(&mut rng, n_dense, 100);
        let reference = random_index(&mut rng, n_ref, 1_000);

        let result = align(&dense, &reference).unwrap();

        // Subsequence of dense, strictly increasing, no longer than reference.
        assert!(result.len() <= reference.len());
        for t in result.iter() {
            assert!(dense.contains(t));
        }
        assert!(
            result
                .as_slice()
                .windows(2)
                .all(|w| w[0] < w[1])
        );

        // Every reference point is represented by a nearest dense element.
        let positions = nearest_positions(&dense, &reference).unwrap();
        for r in reference.iter() {
            let best = min_distance(&dense, r);
            assert!(
                positions
                    .iter()
                    .any(|&p| (dense[p].nanos() - r.nanos()).abs() == best),
                "reference {} has no nearest representative",
                r.nanos()
            );
        }
    }
}
