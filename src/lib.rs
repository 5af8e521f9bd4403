#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set renderer
//!
//! A Julia set is drawn by taking every point of a rectangle on the
//! complex plane and repeatedly applying `z = z * z + c` for a fixed
//! constant `c`, measuring how quickly the point goes to infinity.
//! Points that never leave the escape radius belong to the set and
//! are drawn black; points that escape are coloured by their
//! "velocity", refined to a fractional iteration count so the bands
//! between discrete iteration levels blend smoothly into each other.
//!
//! This crate renders the "starfish" variant, `c = -0.4 + 0.6i`, over
//! the square window from `-1.6 - 1.6i` to `1.6 + 1.6i`.  The pixel
//! sweep is a pure per-pixel transform with no cross-pixel
//! dependency, so the renderer can also split the image into disjoint
//! row bands and sweep them on separate threads.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate num;

pub mod color;
pub mod errors;
pub mod escape;
pub mod planes;
pub mod render;

pub use errors::ConfigError;
pub use escape::{evaluate, EscapeResult};
pub use render::{JuliaRenderer, STARFISH, VIEW_LEFTLOWER, VIEW_RIGHTUPPER};
