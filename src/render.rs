// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel sweep.  Walks every pixel of the image, maps it to a
//! point on the complex plane, classifies the point with the escape
//! evaluator, and shades it: solid black for interior points, a
//! hue/value ramp driven by the smooth iteration count for everything
//! else.  Each pixel depends only on its own coordinates, so the
//! threaded sweep just hands disjoint row bands to scoped threads.

extern crate crossbeam;

use num::{clamp, Complex};

use color::hsv_to_rgb;
use errors::ConfigError;
use escape::{evaluate, EscapeResult};
use planes::{Pixel, PlaneMapper};

/// The "starfish" Julia constant.
pub const STARFISH: Complex<f64> = Complex { re: -0.4, im: 0.6 };

/// Left-lower corner of the reference view window.
pub const VIEW_LEFTLOWER: Complex<f64> = Complex { re: -1.6, im: -1.6 };

/// Right-upper corner of the reference view window.
pub const VIEW_RIGHTUPPER: Complex<f64> = Complex { re: 1.6, im: 1.6 };

/// Bytes per RGBA pixel.
const CHANNELS: usize = 4;

/// Renders one Julia set image.  Holds the plane mapping, the Julia
/// constant, and the iteration cap; once built, nothing here is
/// mutable.  The output is a row-major RGBA byte buffer with the top
/// row at the window's maximum imaginary coordinate.
#[derive(Debug)]
pub struct JuliaRenderer {
    plane: PlaneMapper,
    c: Complex<f64>,
    limit: usize,
}

impl JuliaRenderer {
    /// Requires the width and height of the image, the Julia
    /// constant, the left-lower and right-upper corners of the
    /// complex plane window, and the iteration cap.  All validation
    /// happens here, before any pixel is computed.
    pub fn new(
        width: usize,
        height: usize,
        c: Complex<f64>,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
        limit: usize,
    ) -> Result<Self, ConfigError> {
        if limit == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        let plane = PlaneMapper::new(width, height, leftlower, rightupper)?;
        Ok(JuliaRenderer { plane, c, limit })
    }

    /// The reference "starfish" configuration: `c = -0.4 + 0.6i` over
    /// the square window `[-1.6, 1.6]` on both axes.
    pub fn starfish(size: usize, limit: usize) -> Result<Self, ConfigError> {
        JuliaRenderer::new(size, size, STARFISH, VIEW_LEFTLOWER, VIEW_RIGHTUPPER, limit)
    }

    /// Width of the output image in pixels.
    pub fn width(&self) -> usize {
        self.plane.integral_plane.0
    }

    /// Height of the output image in pixels.
    pub fn height(&self) -> usize {
        self.plane.integral_plane.1
    }

    /// Shade one classified point.  Interior points are pure black.
    /// Escaped points normalize the smooth count into [0, 1] and ride
    /// a fixed hue/value ramp: hue from 0.66 wrapping through 1.4
    /// turns of the wheel fraction, saturation pinned at 0.85, value
    /// from the dim 0.15 floor up toward full brightness.  Alpha is
    /// always opaque.
    fn shade(&self, result: EscapeResult) -> [u8; 4] {
        match result {
            EscapeResult::Interior => [0, 0, 0, 255],
            EscapeResult::Escaped(nu) => {
                let t = clamp(nu / (self.limit as f64), 0.0, 1.0);
                let h = (0.66 + 1.4 * t) % 1.0;
                let v = 0.15 + 0.95 * t;
                let (r, g, b) = hsv_to_rgb(h, 0.85, v);
                [r, g, b, 255]
            }
        }
    }

    /// Sweep one row of the image into `row`, which must hold exactly
    /// `width * 4` bytes.
    fn render_row(&self, top: usize, row: &mut [u8]) {
        for (left, rgba) in row.chunks_mut(CHANNELS).enumerate() {
            let z0 = self.plane.pixel_to_point(&Pixel(left, top));
            rgba.copy_from_slice(&self.shade(evaluate(z0, self.c, self.limit)));
        }
    }

    /// The single-threaded sweep.  Every pixel of the returned buffer
    /// is written exactly once.
    pub fn render(&self) -> Vec<u8> {
        let mut pixels = vec![0 as u8; self.plane.len() * CHANNELS];
        for (top, row) in pixels.chunks_mut(self.width() * CHANNELS).enumerate() {
            self.render_row(top, row);
        }
        pixels
    }

    /// The multi-threaded sweep.  Splits the buffer into contiguous
    /// row bands, one per thread; bands never overlap, so the threads
    /// share nothing but the read-only renderer.  Produces the same
    /// bytes as `render` in the same order.
    pub fn render_threaded(&self, threads: usize) -> Result<Vec<u8>, ConfigError> {
        if threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }

        let row_bytes = self.width() * CHANNELS;
        let band_rows = self.height() / threads + 1;
        let mut pixels = vec![0 as u8; self.plane.len() * CHANNELS];
        crossbeam::scope(|spawner| {
            for (band, rows) in pixels.chunks_mut(band_rows * row_bytes).enumerate() {
                spawner.spawn(move |_| {
                    for (offset, row) in rows.chunks_mut(row_bytes).enumerate() {
                        self.render_row(band * band_rows + offset, row);
                    }
                });
            }
        })
        .unwrap();
        Ok(pixels)
    }
}
