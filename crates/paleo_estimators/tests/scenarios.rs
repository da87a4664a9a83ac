//! Scenario tests for the estimator kernels on synthetic data with a known
//! answer.

use approx::assert_abs_diff_eq;
use paleo_core::math::{eigen_decompose, fisher_mean};
use paleo_core::rng::ResampleRng;
use paleo_core::synthetic::{elliptical_ring, fisher_sample, flatten, tilt};
use paleo_core::types::{Bedding, Direction};
use paleo_estimators::{
    tk03_elongation, EstimatorKernel, UnflattenEstimator, UnfoldConfig, UnfoldEstimator,
};
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

const RING_SIZE: usize = 20;

/// Ring around `mean` whose elongation sits `margin` above the TK03.GAD
/// reference at its own mean inclination.
///
/// The meridional half-width is found by bisection with a fixed transverse
/// half-width of 8 degrees.
fn ring_on_reference(mean: &Direction, margin: f64) -> Vec<Direction> {
    let excess = |meridional: f64| {
        let ring = elliptical_ring(mean, meridional, 8.0, RING_SIZE);
        let inc = fisher_mean(&ring).unwrap().inclination.abs();
        eigen_decompose(&ring).unwrap().elongation() - tk03_elongation(inc) - margin
    };

    let (mut lo, mut hi) = (8.0, 30.0);
    assert!(excess(lo) < 0.0 && excess(hi) > 0.0);
    for _ in 0..100 {
        let mid = 0.5 * (lo + hi);
        if excess(mid) > 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    elliptical_ring(mean, hi, 8.0, RING_SIZE)
}

fn folding_beddings() -> Vec<Bedding> {
    (0..30)
        .map(|i| Bedding::new((i * 47 % 360) as f64, 25.0 + (i % 4) as f64 * 10.0))
        .collect()
}

// ============================================================================
// E/I Scenarios
// ============================================================================

/// A set flattened by 0.6 from a field direction on the reference curve is
/// recovered at exactly f = 0.6.
#[test]
fn test_unflatten_recovers_known_flattening() {
    let field_inc = (45.0f64.to_radians().tan() / 0.6).atan().to_degrees();
    let field = ring_on_reference(&Direction::new(0.0, field_inc), 2e-3);
    let observed = flatten(&field, 0.6);

    let observed_inc = fisher_mean(&observed).unwrap().inclination;
    assert!(observed_inc < 50.0);

    let result = UnflattenEstimator::new().unflatten(&observed).unwrap();
    assert!(result.intersects());
    assert_abs_diff_eq!(result.flattening(), 0.6, epsilon = 1e-12);
    assert_abs_diff_eq!(
        result.inclination(),
        fisher_mean(&field).unwrap().inclination,
        epsilon = 1e-6
    );
    assert!(result.inclination() > 45.0);
}

/// The path runs from f = 1 without gaps down to the crossing.
#[test]
fn test_unflatten_curve_contiguous() {
    let field_inc = (45.0f64.to_radians().tan() / 0.6).atan().to_degrees();
    let observed = flatten(&ring_on_reference(&Direction::new(0.0, field_inc), 2e-3), 0.6);

    let result = UnflattenEstimator::new().unflatten(&observed).unwrap();
    let curve = result.curve();
    assert_eq!(curve.len(), 41);
    assert_abs_diff_eq!(curve[0].flattening, 1.0);
    for point in &curve[..curve.len() - 1] {
        assert!(tk03_elongation(point.inclination).abs() > point.elongation);
    }
}

/// Kernel output carries the crossing inclination and the full path.
#[test]
fn test_unflatten_kernel_output_matches_result() {
    let field_inc = (45.0f64.to_radians().tan() / 0.6).atan().to_degrees();
    let observed = flatten(&ring_on_reference(&Direction::new(0.0, field_inc), 2e-3), 0.6);

    let estimator = UnflattenEstimator::new();
    let output = estimator.estimate(&observed).unwrap();
    let result = estimator.unflatten(&observed).unwrap();
    assert!(!output.degenerate);
    assert_eq!(output.value, result.inclination());
    assert_eq!(output.curve.as_slice(), result.curve());
}

// ============================================================================
// Fold Test Scenarios
// ============================================================================

/// Noisy pre-folding magnetisation peaks close to full unfolding.
#[test]
fn test_unfold_pre_folding_noisy() {
    let mut rng = ResampleRng::from_seed(7);
    let restored = fisher_sample(rng.inner_mut(), &Direction::new(340.0, 50.0), 200.0, 30).unwrap();
    let in_situ: Vec<Direction> = restored
        .iter()
        .zip(folding_beddings())
        .flat_map(|(d, b)| tilt(std::slice::from_ref(d), &b))
        .collect();

    let result = UnfoldEstimator::default().unfold(&in_situ).unwrap();
    assert!((80..=120).contains(&result.argmax()), "argmax {}", result.argmax());
}

/// Noisy post-folding magnetisation peaks close to no unfolding.
#[test]
fn test_unfold_post_folding_noisy() {
    let mut rng = ResampleRng::from_seed(11);
    let in_situ: Vec<Direction> =
        fisher_sample(rng.inner_mut(), &Direction::new(340.0, 50.0), 200.0, 30)
            .unwrap()
            .into_iter()
            .zip(folding_beddings())
            .map(|(d, b)| d.with_bedding(b))
            .collect();

    let result = UnfoldEstimator::default().unfold(&in_situ).unwrap();
    assert!((-20..=20).contains(&result.argmax()), "argmax {}", result.argmax());
}

/// Kernel output reports the argmax as the scalar outcome.
#[test]
fn test_unfold_kernel_output() {
    let in_situ: Vec<Direction> = folding_beddings()
        .into_iter()
        .map(|b| Direction::new(340.0, 50.0).with_bedding(b))
        .collect();

    let output = UnfoldEstimator::default().estimate(&in_situ).unwrap();
    assert!(!output.degenerate);
    assert_eq!(output.value, 0.0);
    assert_eq!(output.curve.len(), 21);
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_unfold_search_invariants(
        seed in any::<u64>(),
        kappa in 5.0f64..200.0,
        min in -100i32..0,
        span in 20i32..250,
    ) {
        let mut rng = ResampleRng::from_seed(seed);
        let set: Vec<Direction> =
            fisher_sample(rng.inner_mut(), &Direction::new(10.0, 40.0), kappa, 12)
                .unwrap()
                .into_iter()
                .zip(folding_beddings())
                .map(|(d, b)| d.with_bedding(b))
                .collect();
        let config = UnfoldConfig::new(min, min + span).unwrap();

        let result = UnfoldEstimator::new(config).unfold(&set).unwrap();
        let curve_max = result
            .curve()
            .iter()
            .map(|p| p.tau1)
            .fold(f64::NEG_INFINITY, f64::max);

        prop_assert!(result.argmax() >= config.min() && result.argmax() <= config.max());
        prop_assert!((result.argmax() - result.coarse_argmax()).abs() <= 9);
        prop_assert!(result.max_tau1() >= curve_max);
        prop_assert!(result.curve().iter().all(|p| p.tau1 >= 0.0 && p.tau1 <= 1.0 + 1e-12));
    }

    #[test]
    fn test_unflatten_curve_invariants(
        seed in any::<u64>(),
        kappa in 10.0f64..100.0,
        inclination in 10.0f64..70.0,
        f in 0.3f64..1.0,
    ) {
        let mut rng = ResampleRng::from_seed(seed);
        let field = fisher_sample(rng.inner_mut(), &Direction::new(0.0, inclination), kappa, 25)
            .unwrap();
        let result = UnflattenEstimator::new().unflatten(&flatten(&field, f)).unwrap();
        let curve = result.curve();

        for pair in curve.windows(2) {
            prop_assert!(pair[0].flattening > pair[1].flattening);
        }
        if let Some((last, rest)) = curve.split_last() {
            prop_assert!(curve.len() >= 2);
            prop_assert!(tk03_elongation(last.inclination).abs() <= last.elongation);
            for point in rest {
                prop_assert!(tk03_elongation(point.inclination).abs() > point.elongation);
            }
        }
    }
}
