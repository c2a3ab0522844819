//! Splitting a key set across worker threads.
//!
//! Each worker gets a contiguous range of `total / workers` keys; the first
//! `total % workers` workers take one extra key each.

use crate::error::{Result, TableError};
use core::ops::Range;

/// Range of key indices owned by `worker` out of `workers`.
pub fn partition_range(total: usize, workers: usize, worker: usize) -> Result<Range<usize>> {
    if workers == 0 {
        return Err(no_workers());
    }
    if worker >= workers {
        return Err(TableError::InvalidArgument {
            argument: "worker",
            reason: "must be below the worker count",
        });
    }
    let base = total / workers;
    let extra = total % workers;
    let start = base * worker + worker.min(extra);
    let len = base + usize::from(worker < extra);
    Ok(start..start + len)
}

fn no_workers() -> TableError {
    TableError::InvalidArgument {
        argument: "workers",
        reason: "must be at least 1",
    }
}

/// Ranges for every worker, in worker order.
pub fn partition(total: usize, workers: usize) -> Result<Vec<Range<usize>>> {
    if workers == 0 {
        return Err(no_workers());
    }
    (0..workers)
        .map(|w| partition_range(total, workers, w))
        .collect()
}
