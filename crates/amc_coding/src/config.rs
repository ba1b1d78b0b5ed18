/// Runtime settings of [`Encoder`] and [`Decoder`].
///
/// ```
/// use amc_coding::CodingConfig;
///
/// let config = CodingConfig::new().with_max_depth(16);
/// assert_eq!(config.max_depth, 16);
/// assert_eq!(CodingConfig::default().max_depth, CodingConfig::DEFAULT_MAX_DEPTH);
/// ```
///
/// [`Encoder`]: crate::codec::Encoder
/// [`Decoder`]: crate::codec::Decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodingConfig {
    /// Deepest nesting of objects and collections before coding fails
    /// with [`CodingError::DepthLimitExceeded`](crate::CodingError::DepthLimitExceeded).
    pub max_depth: usize,
}

impl CodingConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    #[inline]
    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    #[inline]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for CodingConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
