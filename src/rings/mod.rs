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
//! # Ring primitives
//! Each primitive draws a concentric band about a center point, querying a shared layout for the
//! span of every feature it draws so that all primitives agree on where a feature lies.
//!
//! Primitives validate their inputs when constructed. Rendering never fails; a feature that cannot
//! be resolved at render time indicates a layout that changed underneath the primitive, and panics.

pub mod axis;
pub mod blocks;
pub mod highlight;

pub use axis::{default_placement, default_ticks, Axis, AxisLabel, TextPlacement, Tick, TickConfig};
pub use blocks::Blocks;
pub use highlight::Highlight;

use crate::{
    arc::Arcer,
    canvas::{Canvas, RingPath},
    rectangular,
    types::{VizPoint2d, VizRect},
    Arc,
    RingError,
};

/// A renderable ring.
pub trait Ring: Arcer {
    /// Render the ring centered at `center`.
    fn draw_at(&self, canvas: &mut dyn Canvas, center: VizPoint2d<f64>);

    /// The position the ring is drawn at by [Ring::plot].
    fn xy(&self) -> VizPoint2d<f64>;

    /// A liberal bounding box for the ring, relative to its center.
    fn glyph_box(&self) -> VizRect<f64>;

    /// Render the ring at its own position.
    fn plot(&self, canvas: &mut dyn Canvas) {
        self.draw_at(canvas, self.xy());
    }
}

pub(crate) fn check_radii(inner: f64, outer: f64) -> Result<(), RingError> {
    if !inner.is_finite() || !outer.is_finite() {
        return Err(RingError::InvalidRange(format!(
            "radii must be finite (inner: {}, outer: {})",
            inner, outer
        )));
    }
    if inner > outer {
        return Err(RingError::InvalidRange(format!(
            "inner radius {} is greater than outer radius {}",
            inner, outer
        )));
    }
    Ok(())
}

/// A square box of half-width `radius` about the origin.
pub(crate) fn radial_box(radius: f64) -> VizRect<f64> {
    VizRect::from_tuple((-radius, -radius), (radius, radius))
}

/// Build the outline of an annular sector over `arc` between two radii. When `reanchor` is set the
/// outer arc starts with a fresh move to its start point, so that a full ring has no seam.
pub(crate) fn sector_path(path: &mut RingPath, center: VizPoint2d<f64>, arc: Arc, inner: f64, outer: f64, reanchor: bool) {
    path.clear();
    path.move_to(center + rectangular(arc.theta, inner));
    path.arc(center, inner, arc.theta, arc.phi);
    if reanchor {
        path.move_to(center + rectangular(arc.end(), outer));
    }
    path.arc(center, outer, arc.end(), -arc.phi);
    path.close();
}
