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
//! Bézier curves of arbitrary degree, evaluated with the algorithm of Robert D. Miller
//! (Graphics Gems V, "Quick and Simple Bézier Curve Drawing", pp. 206-209).
//!
//! [Curve] is a standalone evaluator: it samples points along a curve and leaves drawing them to
//! the caller.

use crate::types::VizPoint2d;

/// A Bézier curve defined by its control points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve {
    // Control points pre-multiplied by their binomial coefficients.
    weighted: Vec<VizPoint2d<f64>>,
}

impl Curve {
    /// Create a curve from its control points. The curve has degree `points.len() - 1`.
    pub fn new(points: &[VizPoint2d<f64>]) -> Curve {
        let n = points.len();
        let mut w = 1.0;
        let weighted = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                w = match i {
                    0 => 1.0,
                    1 => (n - 1) as f64,
                    _ => w * (n - i) as f64 / i as f64,
                };
                *p * w
            })
            .collect();
        Curve { weighted }
    }

    pub fn is_empty(&self) -> bool {
        self.weighted.is_empty()
    }

    /// Return the point at `t` along the curve, where `0 ≤ t ≤ 1`. An empty curve evaluates to
    /// the origin.
    pub fn point(&self, t: f64) -> VizPoint2d<f64> {
        let mut u = 1.0;
        let terms: Vec<VizPoint2d<f64>> = self
            .weighted
            .iter()
            .map(|c| {
                let term = *c * u;
                u *= t;
                term
            })
            .collect();

        let Some((last, rest)) = terms.split_last()
        else {
            return VizPoint2d::default();
        };

        // Horner-like descent applying the (1-t)^(n-i) factors.
        let t1 = 1.0 - t;
        let mut tt = t1;
        let mut p = *last;
        for term in rest.iter().rev() {
            p = p + *term * tt;
            tt *= t1;
        }
        p
    }

    /// Return `n` equally spaced (in `t`) points along the curve, from its first control point to
    /// its last.
    pub fn curve(&self, n: usize) -> Vec<VizPoint2d<f64>> {
        match n {
            0 => Vec::new(),
            1 => vec![self.point(0.0)],
            _ => {
                let nf = (n - 1) as f64;
                (0..n).map(|i| self.point(i as f64 / nf)).collect()
            }
        }
    }
}
