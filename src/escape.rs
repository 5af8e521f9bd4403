// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.  Given a starting point, iterate
//! `z = z * z + c` until the point leaves the escape radius or the
//! iteration cap is reached.  Escaping points carry a *smooth*
//! iteration count: the integer step is refined by the magnitude at
//! escape, which removes the visible banding a raw integer count
//! produces.

use num::Complex;
use std::f64::consts::LN_2;

/// The squared escape radius.  Comparing against the squared
/// magnitude saves a square root per iteration.
const ESCAPE2: f64 = 4.0;

/// What happened to a point under iteration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EscapeResult {
    /// The point stayed within the escape radius for the full
    /// iteration budget; it belongs to the set.
    Interior,
    /// The point left the escape radius, carrying the smooth
    /// (fractional) iteration count at which it did.
    Escaped(f64),
}

/// Iterate `z = z * z + c` from `z0` up to `limit` times, testing the
/// squared magnitude against the escape radius before each update.  A
/// starting point already outside the radius escapes at step zero
/// without any update at all.  An escape landing exactly on the final
/// permitted update still counts as interior: the budget was spent
/// before the test could run again.
///
/// The smooth count is `i + 1 - ln(ln(|z|)) / ln 2`, taken from the
/// magnitude after the triggering update.  The inner logarithm is
/// always defined on the escape branch, because the magnitude there
/// is never below the escape radius of 2 (rounding can land it on
/// the radius exactly, but no lower).
pub fn evaluate(z0: Complex<f64>, c: Complex<f64>, limit: usize) -> EscapeResult {
    let mut zr = z0.re;
    let mut zi = z0.im;
    let mut zr2 = zr * zr;
    let mut zi2 = zi * zi;

    let mut i = 0;
    while i < limit && zr2 + zi2 <= ESCAPE2 {
        zi = (zr + zr) * zi + c.im;
        zr = (zr2 - zi2) + c.re;
        zr2 = zr * zr;
        zi2 = zi * zi;
        i += 1;
    }

    if i >= limit {
        EscapeResult::Interior
    } else {
        // The square root of a sum one ulp above 4.0 can round to
        // exactly 2.0, so the radius itself is a reachable magnitude.
        let mag = (zr2 + zi2).sqrt();
        debug_assert!(mag >= 2.0);
        EscapeResult::Escaped((i as f64) + 1.0 - mag.ln().ln() / LN_2)
    }
}
