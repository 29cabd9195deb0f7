//! The per-run render configuration.  The original formulation of this
//! program baked the image size, iteration cap, and breakout threshold
//! in as compile-time constants; here they are gathered into one
//! immutable value, validated once, and handed by reference to each
//! stage of the pipeline.

use errors::RenderError;

/// The fixed-for-the-run parameters of a plot.
#[derive(Copy, Clone, Debug)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Iteration cap.  An orbit that survives this many steps is
    /// considered captured by the set.
    pub iterations: u32,
    /// Squared-magnitude threshold beyond which an orbit has escaped.
    pub breakout: f64,
}

impl RenderConfig {
    /// Constructor.  Rejects empty images, a zero iteration cap, and
    /// non-positive breakout thresholds.
    pub fn new(
        width: usize,
        height: usize,
        iterations: u32,
        breakout: f64,
    ) -> Result<RenderConfig, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::Config(format!(
                "image dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        if iterations == 0 {
            return Err(RenderError::Config(
                "iteration cap must be at least one".to_string(),
            ));
        }
        if breakout <= 0.0 {
            return Err(RenderError::Config(format!(
                "breakout threshold must be positive, got {}",
                breakout
            )));
        }
        Ok(RenderConfig {
            width,
            height,
            iterations,
            breakout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_dimensions() {
        assert!(RenderConfig::new(0, 600, 100, 4.0).is_err());
        assert!(RenderConfig::new(800, 0, 100, 4.0).is_err());
    }

    #[test]
    fn config_rejects_zero_iteration_cap() {
        assert!(RenderConfig::new(800, 600, 0, 4.0).is_err());
    }

    #[test]
    fn config_rejects_nonpositive_breakout() {
        assert!(RenderConfig::new(800, 600, 100, 0.0).is_err());
        assert!(RenderConfig::new(800, 600, 100, -4.0).is_err());
    }

    #[test]
    fn config_passes_on_reference_parameters() {
        assert!(RenderConfig::new(8192, 8192, 100, 4.0).is_ok());
    }
}
