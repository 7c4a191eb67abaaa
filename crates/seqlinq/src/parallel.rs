//! Parallel for-each on a rayon pool.

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::error::{Result, SeqError};
use crate::seq::Seq;

/// Settings for [`Seq::par_for_each`].
///
/// By default work runs on rayon's global pool. Setting
/// [`threads`](ParallelOptions::threads) builds a dedicated pool of that size
/// for the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelOptions {
    threads: Option<usize>,
    min_len: usize,
}

impl Default for ParallelOptions {
    fn default() -> Self {
        ParallelOptions::new()
    }
}

impl ParallelOptions {
    /// Global pool, no minimum split length.
    pub fn new() -> Self {
        ParallelOptions {
            threads: None,
            min_len: 1,
        }
    }

    /// Runs on a dedicated pool of `count` worker threads.
    ///
    /// Zero is rejected when the work is started.
    pub fn threads(mut self, count: usize) -> Self {
        self.threads = Some(count);
        self
    }

    /// Keeps at least `len` elements per task.
    pub fn min_len(mut self, len: usize) -> Self {
        self.min_len = len.max(1);
        self
    }

    /// Returns the dedicated pool size, if any.
    pub fn thread_count(&self) -> Option<usize> {
        self.threads
    }

    /// Returns the minimum number of elements per task.
    pub fn min_chunk_len(&self) -> usize {
        self.min_len
    }
}

impl<I: Iterator> Seq<I>
where
    I::Item: Send,
{
    /// Buffers the sequence and calls `f` on every element in parallel.
    ///
    /// Elements are visited in no particular order.
    ///
    /// ```
    /// use std::sync::atomic::{AtomicU64, Ordering};
    /// use seqlinq::{IntoSeq, ParallelOptions};
    ///
    /// let total = AtomicU64::new(0);
    /// (1..=100u64)
    ///     .into_seq()
    ///     .par_for_each(&ParallelOptions::new().threads(2), |n| {
    ///         total.fetch_add(n, Ordering::Relaxed);
    ///     })?;
    /// assert_eq!(total.into_inner(), 5050);
    /// # Ok::<(), seqlinq::SeqError>(())
    /// ```
    pub fn par_for_each<F>(self, options: &ParallelOptions, f: F) -> Result<()>
    where
        F: Fn(I::Item) + Send + Sync,
    {
        if options.threads == Some(0) {
            return Err(SeqError::invalid_argument("threads", "must be at least 1"));
        }

        let items: Vec<I::Item> = self.iter.collect();
        let len = items.len();
        let min_len = options.min_len;
        let run = move || {
            items
                .into_par_iter()
                .with_min_len(min_len)
                .for_each(&f)
        };

        match options.threads {
            Some(threads) => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|idx| format!("seqlinq-worker-{idx}"))
                    .build()?;
                tracing::debug!(len, threads, "parallel for-each on dedicated pool");
                pool.install(run);
            }
            None => {
                tracing::debug!(
                    len,
                    threads = rayon::current_num_threads(),
                    "parallel for-each on global pool"
                );
                run();
            }
        }
        Ok(())
    }
}
