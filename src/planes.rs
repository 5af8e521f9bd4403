//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane with an arbitrary pair of
//! corners defining the leftlower and rightupper corners.  Pixel row
//! zero is the *top* of the image, so increasing rows walk down the
//! imaginary axis while increasing columns walk up the real axis.

use errors::ConfigError;
use num::Complex;

/// Describes the width and height of an integral plane that is
/// assumed to start at 0,0 and all values are assumed to be
/// non-negative integers.
#[derive(Copy, Clone, Debug)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// Describes the column and row of a point in a region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian
/// plane, and a complex cartesian plane.  Maps pixels from one to
/// points on the other.  'leftlower' may seem ungrammatical, but it
/// fits with our x,y schema.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The right-upper hand corner of the integral cartesian plane.
    /// The left-lower is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    /// The two coordinates defining the complex cartesian plane,
    /// left-lower and right-upper
    pub complex_plane: ComplexPlane,
    // The per-pixel step along each axis.  Endpoints land exactly on
    // the window corners, so the divisor is (dimension - 1), not the
    // dimension.
    steps: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the width and height of the integral
    /// plane, and two points describing the complex plane.  A
    /// one-pixel axis maps every pixel to the window's lower bound on
    /// the real axis and its upper bound on the imaginary axis, so
    /// its step is simply zero.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyPlane(width, height));
        }

        if rightupper.re < leftlower.re || rightupper.im < leftlower.im {
            return Err(ConfigError::MisorderedCorners);
        }

        let region_width = rightupper.re - leftlower.re;
        let region_height = rightupper.im - leftlower.im;

        let steps = (
            if width > 1 {
                region_width / ((width - 1) as f64)
            } else {
                0.0
            },
            if height > 1 {
                region_height / ((height - 1) as f64)
            } else {
                0.0
            },
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(leftlower, rightupper),
            steps,
        })
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// complex number at the equivalent location on the complex
    /// cartesian plane.  Column zero sits on the left edge of the
    /// window, row zero on its *top* edge: the imaginary component
    /// counts down from the rightupper corner as the row increases.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.complex_plane.0.re + (pixel.0 as f64) * self.steps.0,
            self.complex_plane.1.im - (pixel.1 as f64) * self.steps.1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(pixels: usize) -> PlaneMapper {
        PlaneMapper::new(
            pixels,
            pixels,
            Complex::new(-1.6, -1.6),
            Complex::new(1.6, 1.6),
        )
        .unwrap()
    }

    #[test]
    fn planemapper_fails_on_bad_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, 1.0), Complex::new(1.0, -1.0));
        assert_eq!(pm.unwrap_err(), ConfigError::MisorderedCorners);
    }

    #[test]
    fn planemapper_fails_on_empty_plane() {
        let pm = PlaneMapper::new(0, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert_eq!(pm.unwrap_err(), ConfigError::EmptyPlane(0, 4));
    }

    #[test]
    fn planemapper_passes_on_good_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_ok());
    }

    #[test]
    fn corners_land_on_the_window_bounds() {
        let pm = square(2);
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-1.6, 1.6));
        assert_eq!(pm.pixel_to_point(&Pixel(1, 0)), Complex::new(1.6, 1.6));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 1)), Complex::new(-1.6, -1.6));
        assert_eq!(pm.pixel_to_point(&Pixel(1, 1)), Complex::new(1.6, -1.6));
    }

    #[test]
    fn row_zero_is_the_top_of_the_image() {
        let pm = square(65);
        assert!(pm.pixel_to_point(&Pixel(0, 0)).im > pm.pixel_to_point(&Pixel(0, 64)).im);
    }

    #[test]
    fn odd_grid_center_is_the_origin() {
        let pm = square(65);
        assert_eq!(pm.pixel_to_point(&Pixel(32, 32)), Complex::new(0.0, 0.0));
    }

    #[test]
    fn one_pixel_plane_has_a_zero_step() {
        let pm = square(1);
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-1.6, 1.6));
        assert_eq!(pm.len(), 1);
    }
}
