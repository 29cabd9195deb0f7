//! The escape-time evaluation at the heart of the plot.  A point c on
//! the complex plane is iterated under z' = z² + c and the number of
//! steps it takes for the orbit's squared magnitude to exceed the
//! breakout threshold is its escape time.  Points whose orbits survive
//! the full iteration cap are captured by the set.

use num::Complex;

/// Returns the number of iterations, in [0, limit], before the orbit
/// of `c` exceeds the breakout threshold.  A return value equal to
/// `limit` is the captured sentinel: callers distinguish escaped from
/// captured points by comparing the count against the cap, not by a
/// separate flag.
///
/// The magnitude is checked before each counted step, so a point
/// already outside the threshold escapes with a count of zero.
pub fn escape_time(c: Complex<f64>, limit: u32, breakout: f64) -> u32 {
    let mut z = c;
    let mut count = 0;
    while count < limit && z.norm_sqr() <= breakout {
        z = z * z + c;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 100, 4.0), 100);
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 1000, 65536.0), 1000);
    }

    #[test]
    fn points_beyond_breakout_escape_immediately() {
        assert_eq!(escape_time(Complex::new(-2.0, -2.0), 100, 4.0), 0);
        assert_eq!(escape_time(Complex::new(3.0, 0.0), 100, 4.0), 0);
        assert_eq!(escape_time(Complex::new(0.0, -2.5), 100, 4.0), 0);
    }

    #[test]
    fn known_interior_points_are_captured() {
        // c = -1 cycles between -1 and 0; c = 0.25 is on the boundary
        // of the main cardioid and stays bounded.
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 100, 4.0), 100);
        assert_eq!(escape_time(Complex::new(0.25, 0.0), 100, 4.0), 100);
    }

    #[test]
    fn near_boundary_point_escapes_before_the_cap() {
        let count = escape_time(Complex::new(0.26, 0.0), 1000, 4.0);
        assert!(count > 0 && count < 1000);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let c = Complex::new(-0.743, 0.131);
        assert_eq!(escape_time(c, 500, 4.0), escape_time(c, 500, 4.0));
    }
}
