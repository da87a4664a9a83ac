//! Per-estimator mutual exclusion.
//!
//! A [`RunController`] owns one running flag per [`EstimatorKind`]. Starting a
//! run acquires the flag for its kind and hands back a [`RunGuard`]; the flag
//! is cleared when the guard is released or dropped, so cancelled, failed
//! and abandoned runs all free their slot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use paleo_estimators::EstimatorKind;

use crate::error::BootstrapError;

/// Running flags, one per estimator kind.
#[derive(Debug, Default)]
pub struct RunController {
    running: [AtomicBool; EstimatorKind::ALL.len()],
}

impl RunController {
    /// Creates a controller with every flag cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shared controller.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Whether a run of `kind` currently holds the flag.
    pub fn is_running(&self, kind: EstimatorKind) -> bool {
        self.running[kind.index()].load(Ordering::Acquire)
    }

    /// Sets the flag for `kind` if it is clear.
    ///
    /// # Errors
    ///
    /// Returns `BootstrapError::AlreadyRunning` if the flag is already set;
    /// the running flag is left untouched.
    pub fn try_acquire(self: &Arc<Self>, kind: EstimatorKind) -> Result<RunGuard, BootstrapError> {
        self.running[kind.index()]
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| BootstrapError::already_running(kind))?;

        Ok(RunGuard {
            controller: Arc::clone(self),
            kind,
        })
    }
}

/// Holds the running flag of one estimator kind.
#[derive(Debug)]
#[must_use = "dropping the guard releases the running flag immediately"]
pub struct RunGuard {
    controller: Arc<RunController>,
    kind: EstimatorKind,
}

impl RunGuard {
    /// Estimator kind whose flag this guard holds.
    pub fn kind(&self) -> EstimatorKind {
        self.kind
    }

    /// Releases the flag.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.controller.running[self.kind.index()].store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_sets_flag() {
        let controller = RunController::shared();
        let guard = controller.try_acquire(EstimatorKind::Unflatten).unwrap();

        assert!(controller.is_running(EstimatorKind::Unflatten));
        assert!(!controller.is_running(EstimatorKind::Unfold));
        assert_eq!(guard.kind(), EstimatorKind::Unflatten);
    }

    #[test]
    fn test_second_acquire_rejected() {
        let controller = RunController::shared();
        let _guard = controller.try_acquire(EstimatorKind::Unfold).unwrap();

        let err = controller.try_acquire(EstimatorKind::Unfold).unwrap_err();
        assert_eq!(err, BootstrapError::already_running(EstimatorKind::Unfold));
        assert!(controller.is_running(EstimatorKind::Unfold));
    }

    #[test]
    fn test_kinds_are_independent() {
        let controller = RunController::shared();
        let _a = controller.try_acquire(EstimatorKind::Unflatten).unwrap();
        let _b = controller.try_acquire(EstimatorKind::Unfold).unwrap();
        assert!(controller.is_running(EstimatorKind::Unflatten));
        assert!(controller.is_running(EstimatorKind::Unfold));
    }

    #[test]
    fn test_release_and_drop_clear_flag() {
        let controller = RunController::shared();

        let guard = controller.try_acquire(EstimatorKind::Unflatten).unwrap();
        guard.release();
        assert!(!controller.is_running(EstimatorKind::Unflatten));

        {
            let _guard = controller.try_acquire(EstimatorKind::Unflatten).unwrap();
        }
        assert!(!controller.is_running(EstimatorKind::Unflatten));
        assert!(controller.try_acquire(EstimatorKind::Unflatten).is_ok());
    }
}
