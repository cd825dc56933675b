//! Executors for batch rendering.
//!
//! - [`SyncExecutor`]: sequential, always available
//! - [`RayonExecutor`]: work-stealing thread pool (feature: `rayon-executor`)
//!
//! Every executor returns results in input order.

#[cfg(feature = "rayon-executor")]
mod rayon;
mod sync;

#[cfg(feature = "rayon-executor")]
pub use self::rayon::RayonExecutor;
pub use self::sync::SyncExecutor;

/// Runs a function over a slice of work items.
pub trait Executor {
    /// Applies `f` to every item. `result[i]` corresponds to `items[i]`.
    fn execute_all<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Send + Sync;

    /// Number of items that may be processed concurrently.
    fn parallelism(&self) -> usize;

    fn name(&self) -> &'static str;
}

/// A concrete executor choice that can be stored without generics.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    Sync(SyncExecutor),

    #[cfg(feature = "rayon-executor")]
    Rayon(RayonExecutor),
}

impl ExecutorImpl {
    /// The parallel executor when it is compiled in, otherwise sequential.
    pub fn preferred() -> Self {
        #[cfg(feature = "rayon-executor")]
        {
            ExecutorImpl::Rayon(RayonExecutor::new())
        }
        #[cfg(not(feature = "rayon-executor"))]
        {
            ExecutorImpl::Sync(SyncExecutor::new())
        }
    }
}

impl Default for ExecutorImpl {
    fn default() -> Self {
        Self::preferred()
    }
}

impl Executor for ExecutorImpl {
    fn execute_all<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Send + Sync,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all(items, f),
            #[cfg(feature = "rayon-executor")]
            ExecutorImpl::Rayon(exec) => exec.execute_all(items, f),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            ExecutorImpl::Sync(exec) => exec.parallelism(),
            #[cfg(feature = "rayon-executor")]
            ExecutorImpl::Rayon(exec) => exec.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon-executor")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}
