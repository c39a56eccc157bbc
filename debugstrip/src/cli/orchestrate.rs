use super::args::Args;
use super::worker::{strip_file, ProcessResult};
use debugstrip_core::Markers;
use std::path::PathBuf;
use std::thread::{available_parallelism, scope};

/// Run `strip_file` on all files in parallel and collect results in input order.
pub(crate) fn strip_all(files: &[PathBuf], args: &Args, markers: &Markers) -> Vec<ProcessResult> {
    if files.is_empty() {
        return Vec::new();
    }

    let num_threads = available_parallelism().map_or(1, |n| n.get());
    let oversubscribe = 4;
    let total_chunks = num_threads * oversubscribe;
    let chunk_size = files.len().div_ceil(total_chunks).max(1);

    scope(|s| {
        let handles: Vec<_> = files
            .chunks(chunk_size)
            .map(|chunk| {
                s.spawn(|| {
                    chunk
                        .iter()
                        .map(|file| strip_file(file, args, markers))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        // Flatten results from all threads
        handles
            .into_iter()
            .flat_map(|h| {
                h.join().unwrap_or_else(|_| {
                    vec![ProcessResult::Error("worker thread panicked".to_string())]
                })
            })
            .collect()
    })
}
