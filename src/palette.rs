//! Maps escape times to colours.  The mapping is a swappable strategy:
//! the original program shipped two variants, a flat black-and-white
//! plot and a smooth cosine-gradient plot, and both survive here as
//! interchangeable implementations of the same trait.

use num::clamp;

/// An R, G, B triple.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// The colour of a captured point.
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}

/// Maps an iteration count to an RGB colour.  `limit` is the iteration
/// cap; a count equal to the cap means the point was captured by the
/// set.  Implementations must be shareable across render threads.
pub trait Palette: Sync {
    /// Returns the colour for a point that escaped after `count`
    /// iterations, or was captured if `count >= limit`.
    fn colorize(&self, count: u32, limit: u32) -> Rgb;
}

/// A smooth, periodic gradient keyed to escape speed.  Three cosine
/// waves, phase-shifted per channel, avoid the banding a direct linear
/// count-to-colour mapping produces.  Captured points are black.
#[derive(Copy, Clone, Debug, Default)]
pub struct CosinePalette;

fn wave(t: f64) -> u8 {
    let v = 0.5 + 0.5 * t.cos();
    // Scale to the byte range before inverting, and clamp in case
    // rounding lands fractionally outside it.
    clamp(255.0 - v * 255.0, 0.0, 255.0) as u8
}

impl Palette for CosinePalette {
    fn colorize(&self, count: u32, limit: u32) -> Rgb {
        if count >= limit {
            return Rgb::BLACK;
        }
        let t = 3.0 + f64::from(count) * 0.15;
        Rgb(wave(t), wave(t + 0.6), wave(t + 1.0))
    }
}

/// The flat colouring of the original single-threaded plot: escaped
/// points are white, captured points are black.
#[derive(Copy, Clone, Debug, Default)]
pub struct MonoPalette;

impl Palette for MonoPalette {
    fn colorize(&self, count: u32, limit: u32) -> Rgb {
        if count >= limit {
            Rgb::BLACK
        } else {
            Rgb(255, 255, 255)
        }
    }
}
