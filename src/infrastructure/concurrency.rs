/// Concurrency management for awaitcheck.
/// Sizes the global rayon pool used to check files in parallel.

use anyhow::Result;

/// Initialize the global rayon thread pool, one worker per core.
/// Trees are per-file and never shared, so workers need no coordination.
pub fn init_thread_pool() -> Result<()> {
    let workers = std::cmp::max(1, num_cpus::get());

    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_global()?;

    Ok(())
}
