use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The row stride must be valid.
    #[error("row stride must be > 0, got {0}")]
    InvalidRowStride(usize),

    /// The destination length is not a whole number of rows.
    #[error("destination length is not a multiple of the row stride")]
    SizeMismatch,
}

/// Controls how row-wise operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

/// Fill a destination buffer row by row.
///
/// `dst` is split into rows of `row_stride` values and `f` is called with the
/// row index and the mutable row. Rows never alias, so `f` may run on any
/// thread in any order. The first error returned by `f` is propagated; the
/// content of `dst` is unspecified in that case.
///
/// # Arguments
///
/// * `dst` - The destination buffer, a whole number of rows long.
/// * `row_stride` - The number of values in a row (width * channels).
/// * `strategy` - The execution strategy.
/// * `f` - The operation producing row `y` into its slice.
///
/// # Example
///
/// ```
/// use pixfx_imgproc::parallel::{par_iter_rows_indexed, ExecutionStrategy, ParallelError};
///
/// let mut dst = vec![0usize; 6];
/// par_iter_rows_indexed(&mut dst, 3, ExecutionStrategy::ParallelRows, |y, row| {
///     row.iter_mut().enumerate().for_each(|(x, v)| *v = y * 3 + x);
///     Ok::<(), ParallelError>(())
/// })
/// .unwrap();
///
/// assert_eq!(dst, vec![0, 1, 2, 3, 4, 5]);
/// ```
pub fn par_iter_rows_indexed<T, E, F>(
    dst: &mut [T],
    row_stride: usize,
    strategy: ExecutionStrategy,
    f: F,
) -> Result<(), E>
where
    T: Send,
    E: Send + From<ParallelError>,
    F: Fn(usize, &mut [T]) -> Result<(), E> + Send + Sync,
{
    if row_stride == 0 {
        return Err(ParallelError::InvalidRowStride(row_stride).into());
    }

    if dst.len() % row_stride != 0 {
        return Err(ParallelError::SizeMismatch.into());
    }

    match strategy {
        ExecutionStrategy::Serial => dst
            .chunks_exact_mut(row_stride)
            .enumerate()
            .try_for_each(|(y, row)| f(y, row)),
        ExecutionStrategy::ParallelRows => dst
            .par_chunks_exact_mut(row_stride)
            .enumerate()
            .try_for_each(|(y, row)| f(y, row)),
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n).into());
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| {
                dst.par_chunks_exact_mut(row_stride)
                    .enumerate()
                    .try_for_each(|(y, row)| f(y, row))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(strategy: ExecutionStrategy) -> Result<Vec<usize>, ParallelError> {
        let mut dst = vec![0; 8];
        par_iter_rows_indexed(&mut dst, 2, strategy, |y, row| {
            row.iter_mut().for_each(|v| *v = y);
            Ok::<(), ParallelError>(())
        })?;
        Ok(dst)
    }

    #[test]
    fn test_rows_serial() -> Result<(), ParallelError> {
        assert_eq!(fill(ExecutionStrategy::Serial)?, vec![0, 0, 1, 1, 2, 2, 3, 3]);
        Ok(())
    }

    #[test]
    fn test_rows_parallel() -> Result<(), ParallelError> {
        assert_eq!(
            fill(ExecutionStrategy::ParallelRows)?,
            vec![0, 0, 1, 1, 2, 2, 3, 3]
        );
        Ok(())
    }

    #[test]
    fn test_rows_fixed() -> Result<(), ParallelError> {
        assert_eq!(fill(ExecutionStrategy::Fixed(2))?, vec![0, 0, 1, 1, 2, 2, 3, 3]);
        Ok(())
    }

    #[test]
    fn test_rows_fixed_invalid() {
        assert_eq!(
            fill(ExecutionStrategy::Fixed(0)),
            Err(ParallelError::InvalidThreadCount(0))
        );
    }

    #[test]
    fn test_rows_invalid_stride() {
        let mut dst = vec![0u8; 4];
        let res = par_iter_rows_indexed(&mut dst, 0, ExecutionStrategy::Serial, |_, _| {
            Ok::<(), ParallelError>(())
        });
        assert_eq!(res, Err(ParallelError::InvalidRowStride(0)));

        let res = par_iter_rows_indexed(&mut dst, 3, ExecutionStrategy::Serial, |_, _| {
            Ok::<(), ParallelError>(())
        });
        assert_eq!(res, Err(ParallelError::SizeMismatch));
    }

    #[test]
    fn test_rows_error_propagates() {
        let mut dst = vec![0u8; 4];
        let res = par_iter_rows_indexed(&mut dst, 2, ExecutionStrategy::ParallelRows, |y, _| {
            if y == 1 {
                Err(ParallelError::SizeMismatch)
            } else {
                Ok(())
            }
        });
        assert_eq!(res, Err(ParallelError::SizeMismatch));
    }
}
