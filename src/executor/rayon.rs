//! Rayon-based parallel executor.

use super::Executor;
use rayon::prelude::*;

/// A parallel executor using rayon's global work-stealing pool.
///
/// To limit the thread count, configure `rayon::ThreadPoolBuilder::build_global`
/// before the first executor is created.
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            num_threads: rayon::current_num_threads(),
        }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Send + Sync,
    {
        // Indexed parallel iterators collect in input order.
        items.par_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn results_keep_input_order() {
        let items: Vec<usize> = (0..200).collect();
        let results = RayonExecutor::new().execute_all(&items, |x| x * 2);
        let expected: Vec<usize> = (0..200).map(|x| x * 2).collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn every_item_is_processed_once() {
        let counter = AtomicUsize::new(0);
        let items: Vec<usize> = (0..100).collect();
        let _ = RayonExecutor::new().execute_all(&items, |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(counter.load(Ordering::SeqCst), 100);
    }

    #[test]
    fn parallelism_is_positive() {
        assert!(RayonExecutor::new().parallelism() > 0);
    }
}
