//! Integration tests for the bootstrap engine driving the real kernels.

use paleo_bootstrap::{
    BootstrapEngine, BootstrapError, BootstrapOptions, ConfidenceSummary, ImmediateScheduler,
    RunController, TokioScheduler,
};
use paleo_core::rng::ResampleRng;
use paleo_core::synthetic::{elliptical_ring, fisher_sample, flatten, tilt};
use paleo_core::types::{Bedding, Direction};
use paleo_estimators::{EstimatorKind, UnflattenEstimator, UnfoldEstimator};
use proptest::prelude::*;

// ============================================================================
// Fixtures
// ============================================================================

fn flattened_set() -> Vec<Direction> {
    let mut rng = ResampleRng::from_seed(21);
    let field = fisher_sample(rng.inner_mut(), &Direction::new(0.0, 55.0), 30.0, 40).unwrap();
    flatten(&field, 0.6)
}

fn pre_folding_set() -> Vec<Direction> {
    let mut rng = ResampleRng::from_seed(5);
    fisher_sample(rng.inner_mut(), &Direction::new(340.0, 50.0), 200.0, 30)
        .unwrap()
        .iter()
        .enumerate()
        .flat_map(|(i, d)| {
            let bedding = Bedding::new((i * 47 % 360) as f64, 25.0 + (i % 4) as f64 * 10.0);
            tilt(std::slice::from_ref(d), &bedding)
        })
        .collect()
}

fn options(iterations: usize, seed: u64) -> BootstrapOptions {
    BootstrapOptions::builder()
        .iterations(iterations)
        .seed(seed)
        .build()
        .unwrap()
}

// ============================================================================
// Mutual Exclusion
// ============================================================================

/// A second start of the same kind is rejected and leaves the active run intact.
#[test]
fn test_second_run_of_same_kind_rejected() {
    let engine = BootstrapEngine::new(RunController::shared());
    let set = flattened_set();

    let mut first = engine
        .start(&set, UnflattenEstimator::new(), options(30, 1))
        .unwrap();
    first.step().unwrap();
    let progress_before = first.iteration();

    let err = engine
        .start(&set, UnflattenEstimator::new(), options(30, 2))
        .err()
        .unwrap();
    assert_eq!(err, BootstrapError::already_running(EstimatorKind::Unflatten));
    assert!(err.is_recoverable());

    assert!(first.is_active());
    assert_eq!(first.iteration(), progress_before);
    let report = first.run_blocking().unwrap();
    assert_eq!(report.summary.attempted, 30);
    assert!(!engine.is_running(EstimatorKind::Unflatten));
}

/// Runs of different kinds may overlap.
#[test]
fn test_different_kinds_run_concurrently() {
    let engine = BootstrapEngine::new(RunController::shared());
    let ei = engine
        .start(&flattened_set(), UnflattenEstimator::new(), options(10, 1))
        .unwrap();
    let fold = engine
        .start(&pre_folding_set(), UnfoldEstimator::default(), options(10, 1))
        .unwrap();

    assert!(engine.is_running(EstimatorKind::Unflatten));
    assert!(engine.is_running(EstimatorKind::Unfold));
    assert!(ei.run_blocking().is_ok());
    assert!(fold.run_blocking().is_ok());
}

/// Directions without bedding are rejected before the fold test starts.
#[test]
fn test_fold_without_bedding_rejected() {
    let engine = BootstrapEngine::new(RunController::shared());
    let set = elliptical_ring(&Direction::new(0.0, 40.0), 5.0, 5.0, 10);

    let err = engine
        .start(&set, UnfoldEstimator::default(), options(10, 1))
        .err()
        .unwrap();
    assert!(matches!(err, BootstrapError::InvalidInput(_)));
    assert!(!engine.is_running(EstimatorKind::Unfold));
}

// ============================================================================
// Determinism and Results
// ============================================================================

/// The same seed reproduces the same distribution.
#[test]
fn test_seeded_runs_reproducible() {
    let engine = BootstrapEngine::new(RunController::shared());
    let set = flattened_set();

    let a = engine
        .start(&set, UnflattenEstimator::new(), options(40, 99))
        .unwrap()
        .run_blocking()
        .unwrap();
    let b = engine
        .start(&set, UnflattenEstimator::new(), options(40, 99))
        .unwrap()
        .run_blocking()
        .unwrap();

    assert_eq!(a.summary, b.summary);
    assert_eq!(a.seed, 99);
    assert_eq!(a.sampled_curves, b.sampled_curves);
}

/// Pre-folding magnetisation gives a confidence interval around full unfolding.
#[test]
fn test_fold_bootstrap_brackets_full_unfolding() {
    let engine = BootstrapEngine::new(RunController::shared());
    let task = engine
        .start(&pre_folding_set(), UnfoldEstimator::default(), options(60, 4))
        .unwrap();
    let report = tokio_test::block_on(task.drive(&ImmediateScheduler)).unwrap();

    assert!((80.0..=120.0).contains(&report.actual.value));
    assert!(report.summary.lower > 50.0, "lower {}", report.summary.lower);
    assert!(report.summary.upper < 150.0, "upper {}", report.summary.upper);
    assert_eq!(report.summary.successful, 60);
    assert_eq!(report.sampled_curves.len(), 25);
}

/// The E/I bootstrap reports every iteration and a steeper corrected mean.
#[test]
fn test_ei_bootstrap_on_flattened_set() {
    let engine = BootstrapEngine::new(RunController::shared());
    let report = engine
        .start(&flattened_set(), UnflattenEstimator::new(), options(50, 8))
        .unwrap()
        .run_blocking()
        .unwrap();

    assert_eq!(report.summary.attempted, 50);
    assert_eq!(report.summary.successful, 50);
    assert!(report.summary.lower <= report.summary.upper);
    assert!(report.sampled_curves.len() <= 25);
}

// ============================================================================
// Async Driving
// ============================================================================

#[tokio::test]
async fn test_drive_on_tokio_runtime() {
    let engine = BootstrapEngine::new(RunController::shared());
    let task = engine
        .start(&pre_folding_set(), UnfoldEstimator::default(), options(20, 2))
        .unwrap();

    let report = task.drive(&TokioScheduler).await.unwrap();
    assert_eq!(report.summary.attempted, 20);
    assert!(!engine.is_running(EstimatorKind::Unfold));
}

#[tokio::test]
async fn test_cancel_from_another_task() {
    let engine = BootstrapEngine::new(RunController::shared());
    let task = engine
        .start(&pre_folding_set(), UnfoldEstimator::default(), options(10_000, 2))
        .unwrap();
    let handle = task.cancel_handle();

    tokio::spawn(async move {
        handle.cancel();
    });

    let err = task.drive(&TokioScheduler).await.unwrap_err();
    assert_eq!(err, BootstrapError::Cancelled);
    assert!(!engine.is_running(EstimatorKind::Unfold));
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_bounds_ordered(outcomes in prop::collection::vec(-90.0f64..90.0, 1..500)) {
        let summary = ConfidenceSummary::from_outcomes(outcomes.clone(), outcomes.len());

        prop_assert!(summary.lower <= summary.upper);
        prop_assert_eq!(summary.cdf.len(), outcomes.len());
        for pair in summary.cdf.windows(2) {
            prop_assert!(pair[0].value <= pair[1].value);
            prop_assert!(pair[0].probability < pair[1].probability);
        }
    }

    #[test]
    fn test_mean_within_bounds_for_small_samples(
        outcomes in prop::collection::vec(-90.0f64..90.0, 2..40)
    ) {
        // Below 40 outcomes the nearest-rank bounds are the extremes.
        let summary = ConfidenceSummary::from_outcomes(outcomes.clone(), outcomes.len());
        prop_assert!(summary.lower <= summary.mean + 1e-9);
        prop_assert!(summary.mean <= summary.upper + 1e-9);
    }
}
