//! Batch tokenization.
//!
//! Small batches run on the calling thread. Larger ones fan out over a
//! scoped rayon pool that is torn down before the call returns; rayon's
//! indexed `collect` keeps results in input order.

use std::num::NonZeroUsize;
use std::thread;

use rayon::prelude::*;

/// Upper bound on the default worker count. More threads than this gain
/// nothing for tokenization-sized work items.
const DEFAULT_MAX_WORKERS: usize = 4;

/// Batch scheduling options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Pool width; `None` means `min(4, available_parallelism)`.
    pub max_workers: Option<NonZeroUsize>,
    /// Batches smaller than this run sequentially.
    pub sequential_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_workers: None,
            sequential_threshold: 8,
        }
    }
}

impl BatchConfig {
    /// Configuration that never starts a pool.
    pub fn sequential() -> Self {
        Self {
            max_workers: None,
            sequential_threshold: usize::MAX,
        }
    }

    /// Number of pool threads a parallel batch uses.
    pub fn workers(&self) -> usize {
        self.max_workers.map_or_else(
            || {
                thread::available_parallelism()
                    .map_or(DEFAULT_MAX_WORKERS, NonZeroUsize::get)
                    .min(DEFAULT_MAX_WORKERS)
            },
            NonZeroUsize::get,
        )
    }
}

/// Apply `f` to every item, preserving order.
pub(crate) fn map_batch<T, R, F>(items: &[T], config: &BatchConfig, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    if items.len() < config.sequential_threshold {
        tracing::trace!(items = items.len(), "batch below threshold, running sequentially");
        return items.iter().map(f).collect();
    }

    let workers = config.workers();
    tracing::debug!(items = items.len(), workers, "running batch on scoped pool");
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| items.par_iter().map(&f).collect::<Vec<_>>())
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), running sequentially");
            items.iter().map(&f).collect()
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config() {
        let config = BatchConfig::default();
        assert_eq!(config.sequential_threshold, 8);
        assert!((1..=DEFAULT_MAX_WORKERS).contains(&config.workers()));
    }

    #[test]
    fn explicit_worker_count() {
        let config = BatchConfig {
            max_workers: NonZeroUsize::new(2),
            ..BatchConfig::default()
        };
        assert_eq!(config.workers(), 2);
    }

    #[test]
    fn order_is_preserved_on_both_paths() {
        let items: Vec<usize> = (0..100).collect();
        let expected: Vec<usize> = items.iter().map(|i| i * 2).collect();
        let parallel = map_batch(&items, &BatchConfig::default(), |i| i * 2);
        let sequential = map_batch(&items, &BatchConfig::sequential(), |i| i * 2);
        assert_eq!(parallel, expected);
        assert_eq!(sequential, expected);
    }

    #[test]
    fn small_and_empty_batches() {
        let config = BatchConfig::default();
        assert_eq!(map_batch(&[1, 2, 3], &config, |i| i + 1), vec![2, 3, 4]);
        assert_eq!(map_batch(&[] as &[u8], &config, |&i| i), Vec::<u8>::new());
    }
}
