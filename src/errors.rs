//! The error taxonomy for a plot run.  Every error here is terminal:
//! a render either produces a complete image file or nothing at all.

use std::io;

/// Everything that can go wrong between configuration and the final
/// file rename.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The requested configuration cannot describe a renderable image.
    #[fail(display = "invalid configuration: {}", _0)]
    Config(String),

    /// The pixel buffer for the requested dimensions cannot be sized.
    /// Raised before any pixel computation happens.
    #[fail(display = "cannot allocate a pixel buffer for a {}x{} image", _0, _1)]
    Allocation(usize, usize),

    /// The buffer handed to the image writer disagrees with the
    /// dimensions it was declared with.  This is an internal invariant
    /// violation and indicates a defect, not an operational condition.
    #[fail(display = "pixel buffer holds {} bytes, expected {}", actual, expected)]
    Encoding {
        /// The length of the buffer as found.
        actual: usize,
        /// The length the declared width, height, and stride require.
        expected: usize,
    },

    /// The output file could not be created, written, or renamed into
    /// place.  No partial file is left behind.
    #[fail(display = "{}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> RenderError {
        RenderError::Io(err)
    }
}
