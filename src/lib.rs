#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot escape-time plotter
//!
//! The Mandelbrot set lives on the complex plane: a point c belongs
//! to it when the orbit of z' = z² + c stays bounded forever.  This
//! crate plots the set by measuring, for each pixel of the output
//! image, how many iterations the corresponding point takes to
//! escape a magnitude threshold (its "escape time") and mapping that
//! count through a colour palette.  Captured points, the ones that
//! survive the full iteration cap, are painted black, and the
//! finished raster is serialized as an uncompressed 24-bit bitmap.
//!
//! The pipeline runs strictly downward, pixel by pixel: an index
//! becomes a complex coordinate, then an escape time, then a colour,
//! then three bytes in the packed buffer, and finally part of the
//! file.  Pixels are independent of one another, so the renderer can
//! also split the image into row bands and plot them on worker
//! threads.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate itertools;
extern crate num;
extern crate tempfile;

pub mod bmp;
pub mod config;
pub mod errors;
pub mod escape;
pub mod palette;
pub mod raster;
pub mod view;

pub use bmp::write_bmp;
pub use config::RenderConfig;
pub use errors::RenderError;
pub use escape::escape_time;
pub use palette::{CosinePalette, MonoPalette, Palette, Rgb};
pub use raster::{PixelBuffer, Renderer};
pub use view::{Pixel, ViewMapper};
