//! Failures raised while validating render parameters.  Every one of
//! these is a configuration mistake caught before any pixel is
//! computed; the numeric pipeline itself is total.

/// The ways a render request can be rejected up front.
#[derive(Debug, Fail, PartialEq)]
pub enum ConfigError {
    /// The image has a zero width or height.
    #[fail(display = "image dimensions must be positive, got {}x{}", _0, _1)]
    EmptyPlane(usize, usize),

    /// The view window's corners are swapped or degenerate.
    #[fail(
        display = "the left lower corner is not below and to the left of the right upper corner"
    )]
    MisorderedCorners,

    /// The iteration cap is zero, which would report every point as
    /// interior and render an all-black image.
    #[fail(display = "iteration limit must be positive")]
    ZeroIterations,

    /// A threaded render was requested with no threads.
    #[fail(display = "thread count must be positive")]
    ZeroThreads,
}
