//! Shrinking driver for minimizing failing values.
//!
//! The engine reads each shrink sequence lazily and stops at the first
//! candidate that still fails, so shrink sequences are never materialized in
//! full.

use std::time::{Duration, Instant};

use crate::arbitrary::{Arbitrary, Shrinks};
use crate::config::ShrinkConfig;
use crate::error::PropertyError;

/// Result of a shrinking operation
#[derive(Debug, Clone)]
pub struct ShrinkResult<T> {
    /// Original value that failed
    pub original: T,
    /// Minimal value that still fails
    pub minimal: T,
    /// Number of shrinking steps taken
    pub shrink_steps: usize,
    /// Number of candidates the property was evaluated on
    pub candidates_tried: usize,
    /// Time spent shrinking
    pub shrink_duration: Duration,
    /// Whether shrinking reached a fixed point rather than a budget limit
    pub completed: bool,
}

impl<T> ShrinkResult<T> {
    /// Create a shrink result for when no shrinking was performed
    pub fn no_shrinking(original: T) -> Self
    where
        T: Clone,
    {
        Self {
            minimal: original.clone(),
            original,
            shrink_steps: 0,
            candidates_tried: 0,
            shrink_duration: Duration::from_secs(0),
            completed: true,
        }
    }
}

/// Shrinking engine that coordinates the shrinking process
#[derive(Debug, Clone, Default)]
pub struct ShrinkEngine {
    config: ShrinkConfig,
}

impl ShrinkEngine {
    /// Create a new shrinking engine with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new shrinking engine with custom configuration
    pub fn with_config(config: ShrinkConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ShrinkConfig {
        &self.config
    }

    /// Shrink a failing value using its [`Arbitrary::shrink`] candidates
    pub fn shrink<T, F>(&self, value: T, property: F) -> ShrinkResult<T>
    where
        T: Arbitrary + Clone,
        F: Fn(&T) -> Result<(), PropertyError>,
    {
        self.shrink_with(value, property, T::shrink)
    }

    /// Shrink a value with a custom candidate function
    pub fn shrink_with<T, F, S>(&self, value: T, property: F, candidates: S) -> ShrinkResult<T>
    where
        T: Clone,
        F: Fn(&T) -> Result<(), PropertyError>,
        S: Fn(&T) -> Shrinks<T>,
    {
        let start_time = Instant::now();

        // Original value doesn't fail, no shrinking needed
        if property(&value).is_ok() {
            return ShrinkResult::no_shrinking(value);
        }

        let mut current = value.clone();
        let mut shrink_steps = 0;
        let mut candidates_tried = 0;
        let mut completed = false;

        'steps: while shrink_steps < self.config.max_iterations {
            let mut found_smaller = false;

            for shrunk in candidates(&current) {
                if start_time.elapsed() >= self.config.timeout {
                    log::warn!("shrinking timed out after {shrink_steps} steps");
                    break 'steps;
                }

                candidates_tried += 1;
                if property(&shrunk).is_err() {
                    current = shrunk;
                    shrink_steps += 1;
                    found_smaller = true;
                    log::debug!("shrink step {shrink_steps}: found smaller failing value");
                    break;
                }
            }

            if !found_smaller {
                completed = true;
                break;
            }
        }

        log::debug!(
            "shrinking finished after {shrink_steps} steps and {candidates_tried} candidates (completed: {completed})"
        );

        ShrinkResult {
            original: value,
            minimal: current,
            shrink_steps,
            candidates_tried,
            shrink_duration: start_time.elapsed(),
            completed,
        }
    }
}
