use std::sync::atomic::AtomicUsize;
use log::{debug, info};

pub fn default_thread_count() -> usize {
    num_cpus::get()
}

pub trait ParallelProcessor {
    /// Sizes the global rayon pool. `0` means one thread per CPU.
    /// A pool that is already built is left as is.
    fn init_parallel_processing(num_threads: usize) {
        let num_threads = if num_threads == 0 { default_thread_count() } else { num_threads };
        match rayon::ThreadPoolBuilder::new().num_threads(num_threads).build_global() {
            Ok(()) => info!("Using {} CPU threads for processing", rayon::current_num_threads()),
            Err(e) => debug!("Keeping existing thread pool: {}", e),
        }
    }

    fn get_progress_counter() -> AtomicUsize {
        AtomicUsize::new(0)
    }
}
