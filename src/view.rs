//! Contains the ViewMapper struct, which describes the relationship
//! between the integral pixel plane with an origin at 0,0 and the
//! window onto the complex plane being plotted.  The window is centred
//! on the origin of the complex plane and spans 4.0 units along each
//! axis, which comfortably contains the whole Mandelbrot set.

use num::Complex;

use config::RenderConfig;

/// Describes the column, row of a point on the pixel plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels to points on the complex plane.  The shifts recentre
/// the pixel grid on the image's midpoint and the scales stretch the
/// grid over the 4.0-wide window; all four are derived once from the
/// configuration and never change mid-render.
#[derive(Copy, Clone, Debug)]
pub struct ViewMapper {
    width_shift: f64,
    height_shift: f64,
    width_scale: f64,
    height_scale: f64,
}

impl ViewMapper {
    /// Constructor.  Derives the shift and scale constants from the
    /// image dimensions.  The shifts floor odd dimensions, matching
    /// integer division of the midpoint.
    pub fn new(config: &RenderConfig) -> ViewMapper {
        ViewMapper {
            width_shift: (config.width / 2) as f64,
            height_shift: (config.height / 2) as f64,
            width_scale: 4.0 / (config.width as f64),
            height_scale: 4.0 / (config.height as f64),
        }
    }

    /// Given a pixel on the integral plane, return the point on the
    /// complex plane that corresponds to it.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            ((pixel.0 as f64) - self.width_shift) * self.width_scale,
            ((pixel.1 as f64) - self.height_shift) * self.height_scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(width: usize, height: usize) -> ViewMapper {
        ViewMapper::new(&RenderConfig::new(width, height, 100, 4.0).unwrap())
    }

    #[test]
    fn centre_pixel_maps_to_origin() {
        let vm = mapper(8192, 8192);
        assert_eq!(
            vm.pixel_to_point(&Pixel(4096, 4096)),
            Complex::new(0.0, 0.0)
        );
    }

    #[test]
    fn corner_pixels_span_the_window() {
        let vm = mapper(4, 4);
        assert_eq!(vm.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -2.0));
        assert_eq!(vm.pixel_to_point(&Pixel(3, 3)), Complex::new(1.0, 1.0));
    }

    #[test]
    fn mapping_is_deterministic() {
        let vm = mapper(640, 480);
        let p = Pixel(123, 456);
        assert_eq!(vm.pixel_to_point(&p), vm.pixel_to_point(&p));
    }

    #[test]
    fn doubling_the_resolution_preserves_coordinates() {
        // Supersampling consistency: pixel (2i, 2j) at twice the
        // resolution lands on the same point (i, j) did.  Exact for
        // power-of-two dimensions.
        let lo = mapper(64, 64);
        let hi = mapper(128, 128);
        for i in 0..64 {
            for j in 0..64 {
                assert_eq!(
                    lo.pixel_to_point(&Pixel(i, j)),
                    hi.pixel_to_point(&Pixel(2 * i, 2 * j))
                );
            }
        }
    }
}
