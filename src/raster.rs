//! The pixel buffer and the render loop.  The buffer is the packed,
//! stride-aware byte region the image writer will serialize; all of
//! the stride and channel-order arithmetic lives here, behind a
//! bounds-checked `set_pixel`, rather than being scattered through the
//! render loop as offset math.

extern crate crossbeam;

use itertools::iproduct;

use config::RenderConfig;
use errors::RenderError;
use escape::escape_time;
use palette::{Palette, Rgb};
use view::{Pixel, ViewMapper};

/// Bytes per pixel in the 24-bit packed layout.
pub const BYTES_PER_PIXEL: usize = 3;

/// Rows are padded to a four-byte boundary, as the bitmap format
/// requires.
fn aligned_stride(width: usize) -> Option<usize> {
    width
        .checked_mul(BYTES_PER_PIXEL)
        .and_then(|row| row.checked_add(3))
        .map(|row| row & !3)
}

/// Writes one pixel's three channels into a row-major byte region.
/// The single place that knows the layout is B,G,R.
fn put_pixel(bytes: &mut [u8], stride: usize, column: usize, row: usize, colour: Rgb) {
    let offset = row * stride + column * BYTES_PER_PIXEL;
    bytes[offset] = colour.2;
    bytes[offset + 1] = colour.1;
    bytes[offset + 2] = colour.0;
}

/// A packed 24-bit pixel buffer: `stride * height` contiguous bytes,
/// row 0 at the top, channels stored B,G,R within each pixel.
#[derive(Debug)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    stride: usize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Allocates a zeroed buffer for a `width` by `height` image.
    /// Dimension arithmetic that overflows `usize` is an allocation
    /// error; an allocation the system cannot satisfy aborts outright.
    pub fn new(width: usize, height: usize) -> Result<PixelBuffer, RenderError> {
        let stride =
            aligned_stride(width).ok_or_else(|| RenderError::Allocation(width, height))?;
        let length = stride
            .checked_mul(height)
            .ok_or_else(|| RenderError::Allocation(width, height))?;
        Ok(PixelBuffer {
            width,
            height,
            stride,
            bytes: vec![0; length],
        })
    }

    /// Wraps an existing byte region as a pixel buffer, checking that
    /// its length matches what the dimensions require.
    pub fn from_raw(
        width: usize,
        height: usize,
        bytes: Vec<u8>,
    ) -> Result<PixelBuffer, RenderError> {
        let stride =
            aligned_stride(width).ok_or_else(|| RenderError::Allocation(width, height))?;
        let expected = stride
            .checked_mul(height)
            .ok_or_else(|| RenderError::Allocation(width, height))?;
        if bytes.len() != expected {
            return Err(RenderError::Encoding {
                actual: bytes.len(),
                expected,
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            stride,
            bytes,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Byte width of one row, padding included.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The raw bytes, `stride * height` of them.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Writes one pixel.  Panics if the pixel lies outside the image.
    pub fn set_pixel(&mut self, pixel: &Pixel, colour: Rgb) {
        assert!(
            pixel.0 < self.width && pixel.1 < self.height,
            "pixel {},{} outside a {}x{} buffer",
            pixel.0,
            pixel.1,
            self.width,
            self.height
        );
        put_pixel(&mut self.bytes, self.stride, pixel.0, pixel.1, colour);
    }

    /// Reads one pixel back.  Panics if the pixel lies outside the
    /// image.
    pub fn pixel(&self, pixel: &Pixel) -> Rgb {
        assert!(pixel.0 < self.width && pixel.1 < self.height);
        let offset = pixel.1 * self.stride + pixel.0 * BYTES_PER_PIXEL;
        Rgb(
            self.bytes[offset + 2],
            self.bytes[offset + 1],
            self.bytes[offset],
        )
    }

    /// Splits the buffer into disjoint bands of whole rows, each at
    /// most `rows_per_band` tall.  The bands partition the byte region
    /// exactly, so the render threads share nothing.
    fn bands_mut(&mut self, rows_per_band: usize) -> Vec<RowBand> {
        let stride = self.stride;
        let width = self.width;
        self.bytes
            .chunks_mut(stride * rows_per_band)
            .enumerate()
            .map(|(index, bytes)| RowBand {
                bytes,
                width,
                stride,
                first_row: index * rows_per_band,
            })
            .collect()
    }
}

/// A mutable view of a contiguous run of whole rows, handed to one
/// render thread.
struct RowBand<'a> {
    bytes: &'a mut [u8],
    width: usize,
    stride: usize,
    first_row: usize,
}

impl<'a> RowBand<'a> {
    /// The image row this band starts at.
    fn first_row(&self) -> usize {
        self.first_row
    }

    /// The number of rows in this band.  The final band may be
    /// shorter than the rest.
    fn rows(&self) -> usize {
        self.bytes.len() / self.stride
    }

    /// Writes one pixel, addressed by its row within the band.
    fn set_pixel(&mut self, column: usize, band_row: usize, colour: Rgb) {
        assert!(column < self.width && band_row < self.rows());
        put_pixel(self.bytes, self.stride, column, band_row, colour);
    }
}

/// Runs the pixel pipeline (coordinate, escape time, colour) over
/// every pixel of the configured image.
pub struct Renderer<'a> {
    config: &'a RenderConfig,
    view: ViewMapper,
    palette: &'a dyn Palette,
}

impl<'a> Renderer<'a> {
    /// Constructor.  The view mapping is derived from the
    /// configuration here, once.
    pub fn new(config: &'a RenderConfig, palette: &'a dyn Palette) -> Renderer<'a> {
        Renderer {
            config,
            view: ViewMapper::new(config),
            palette,
        }
    }

    /// The full pipeline for a single pixel.
    fn plot_point(&self, column: usize, row: usize) -> Rgb {
        let c = self.view.pixel_to_point(&Pixel(column, row));
        let count = escape_time(c, self.config.iterations, self.config.breakout);
        self.palette.colorize(count, self.config.iterations)
    }

    /// The single-threaded reference render.
    pub fn render(&self) -> Result<PixelBuffer, RenderError> {
        let mut buffer = PixelBuffer::new(self.config.width, self.config.height)?;
        for (row, column) in iproduct!(0..self.config.height, 0..self.config.width) {
            let colour = self.plot_point(column, row);
            buffer.set_pixel(&Pixel(column, row), colour);
        }
        Ok(buffer)
    }

    /// A multi-threaded render that takes a thread count as an
    /// option.  The buffer is partitioned into row bands, one scoped
    /// thread per band, with no synchronization beyond the final
    /// join.  Every pixel is independent, so the output is identical
    /// to the single-threaded render.
    pub fn render_threaded(&self, threads: usize) -> Result<PixelBuffer, RenderError> {
        if threads <= 1 {
            return self.render();
        }
        let mut buffer = PixelBuffer::new(self.config.width, self.config.height)?;
        let rows_per_band = (self.config.height + threads - 1) / threads;
        {
            let bands = buffer.bands_mut(rows_per_band);
            crossbeam::scope(|spawner| {
                for mut band in bands {
                    spawner.spawn(move |_| {
                        for band_row in 0..band.rows() {
                            let row = band.first_row() + band_row;
                            for column in 0..self.config.width {
                                band.set_pixel(column, band_row, self.plot_point(column, row));
                            }
                        }
                    });
                }
            })
            .unwrap();
        }
        Ok(buffer)
    }
}
