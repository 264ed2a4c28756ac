/*
    RingPlot

    Copyright 2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/
//! # ringplot_svg
//! An SVG [Canvas](ringplot::Canvas) backend for `ringplot`, built on the `svg` crate.
//!
//! ```no_run
//! use ringplot::prelude::*;
//! use ringplot_svg::SvgCanvas;
//!
//! let ring = Highlight::new(Some(VizColor::BLUE), Arc::complete(Angle::ZERO), 80.0, 100.0)
//!     .unwrap()
//!     .with_position(128.0, 128.0);
//! let mut canvas = SvgCanvas::new(256.0, 256.0);
//! ring.plot(&mut canvas);
//! canvas.save("ring.svg").unwrap();
//! ```

mod canvas;
pub mod render_path;

pub use canvas::SvgCanvas;
