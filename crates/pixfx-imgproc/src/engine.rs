use log::debug;

use pixfx_image::{Image, PixelBuffer};

use crate::{
    error::FilterError,
    parallel::{self, ExecutionStrategy},
    registry::{FilterKind, FilterRegistry, FilterSpec},
};

/// Applies registered filters to whole buffers.
///
/// The input buffer is only read. Every call allocates a fresh output buffer of
/// the same size and evaluates the filter at every coordinate of it.
///
/// # Example
///
/// ```
/// use pixfx_image::{Color, PixelBuffer};
/// use pixfx_imgproc::FilterEngine;
///
/// let image = PixelBuffer::create([4, 3].into(), Color::new(0, 100, 255));
///
/// let negative = FilterEngine::new().apply(&image, "Negative").unwrap();
///
/// assert_eq!(negative.size(), image.size());
/// assert_eq!(negative.get(3, 2).unwrap(), Color::new(255, 155, 0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterEngine {
    strategy: ExecutionStrategy,
}

impl FilterEngine {
    /// Create an engine running on the global thread pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how the rows of the output are scheduled.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The configured execution strategy.
    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// Apply the filter registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownFilter`] before touching the input if the
    /// name is not registered.
    pub fn apply(&self, src: &PixelBuffer, name: &str) -> Result<PixelBuffer, FilterError> {
        let spec = FilterRegistry::global().lookup(name)?;
        self.apply_spec(src, spec)
    }

    /// Apply a filter selected by kind.
    pub fn apply_kind(
        &self,
        src: &PixelBuffer,
        kind: FilterKind,
    ) -> Result<PixelBuffer, FilterError> {
        self.apply_spec(src, FilterRegistry::global().get(kind))
    }

    /// Apply the given filter spec.
    ///
    /// An image without pixels is returned unchanged.
    pub fn apply_spec(
        &self,
        src: &PixelBuffer,
        spec: &FilterSpec,
    ) -> Result<PixelBuffer, FilterError> {
        if src.is_empty() {
            debug!("{}: empty input {}, nothing to do", spec.name(), src.size());
            return Ok(src.clone());
        }

        debug!(
            "applying {} to {} with {:?}",
            spec.name(),
            src.size(),
            self.strategy
        );

        let cols = src.cols();
        let mut data = vec![0u8; src.as_slice().len()];

        parallel::par_iter_rows_indexed(&mut data, cols * 3, self.strategy, |y, row| {
            for (x, dst_pixel) in row.chunks_exact_mut(3).enumerate() {
                let color = spec.eval(src, x, y)?;
                dst_pixel.copy_from_slice(&color.to_array());
            }
            Ok::<(), FilterError>(())
        })?;

        Ok(Image::new(src.size(), data)?)
    }

    /// Apply several filters in sequence, each one reading the previous result.
    ///
    /// All names are resolved before any filter runs.
    pub fn apply_chain<S: AsRef<str>>(
        &self,
        src: &PixelBuffer,
        names: &[S],
    ) -> Result<PixelBuffer, FilterError> {
        let registry = FilterRegistry::global();
        let specs = names
            .iter()
            .map(|name| registry.lookup(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut current = src.clone();
        for spec in specs {
            current = self.apply_spec(&current, spec)?;
        }

        Ok(current)
    }
}
