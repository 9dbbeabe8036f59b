//! Parallel sampling across scoped worker threads.
//!
//! Strategies are stateless, so workers share one strategy by reference and
//! only own their rng. Filter budgets stay per `generate` call on each worker.

use crate::config::{GeneratorConfig, ParallelConfig};
use crate::error::PropertyError;
use crate::rng::{DefaultRngProvider, RngProvider};
use crate::strategy::Strategy;

/// Draw `count` values from `strategy`, spread over worker threads
///
/// With a seed, each worker's rng is derived from `seed + worker index`, so
/// the output is reproducible for a fixed thread count. Values are returned
/// grouped by worker, in worker order.
pub fn sample_parallel<S>(
    strategy: &S,
    count: usize,
    seed: Option<u64>,
    generator_config: &GeneratorConfig,
    parallel_config: &ParallelConfig,
) -> Result<Vec<S::Value>, PropertyError>
where
    S: Strategy + Sync,
    S::Value: Send,
{
    sample_parallel_with(
        &DefaultRngProvider,
        strategy,
        count,
        seed,
        generator_config,
        parallel_config,
    )
}

/// [`sample_parallel`] with a custom rng provider
pub fn sample_parallel_with<P, S>(
    provider: &P,
    strategy: &S,
    count: usize,
    seed: Option<u64>,
    generator_config: &GeneratorConfig,
    parallel_config: &ParallelConfig,
) -> Result<Vec<S::Value>, PropertyError>
where
    P: RngProvider,
    S: Strategy + Sync,
    S::Value: Send,
{
    parallel_config
        .validate()
        .map_err(|e| PropertyError::internal_error(e.to_string()))?;

    let num_threads = if parallel_config.enabled {
        parallel_config.num_threads.min(count).max(1)
    } else {
        1
    };

    if num_threads == 1 {
        let mut rng = provider.create_worker_rng(seed, 0);
        return Ok(strategy.sample(&mut rng, generator_config, count)?);
    }

    let per_thread = count / num_threads;
    let remaining = count % num_threads;
    log::debug!("sampling {count} values on {num_threads} threads");

    let batches = crossbeam::scope(|s| {
        let handles: Vec<_> = (0..num_threads)
            .map(|worker| {
                let batch = if worker < remaining {
                    per_thread + 1
                } else {
                    per_thread
                };

                s.spawn(move |_| {
                    let mut rng = provider.create_worker_rng(seed, worker);
                    strategy.sample(&mut rng, generator_config, batch)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle.join().map_err(|_| {
                    PropertyError::internal_error("Thread panicked during parallel sampling")
                })
            })
            .collect::<Vec<_>>()
    })
    .map_err(|_| PropertyError::internal_error("Parallel sampling scope panicked"))?;

    let mut values = Vec::with_capacity(count);
    for batch in batches {
        values.extend(batch??);
    }
    Ok(values)
}
