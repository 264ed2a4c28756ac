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
//! The drawing surface ring primitives render to.
//!
//! A [Canvas] receives paths built from [PathComp] components in y-up coordinates with the origin
//! at the bottom left. Backends decide how to turn [PathComp::Arc] into their own primitives; those
//! without native arcs can expand them with [RingPath::cubics].

use crate::{
    types::{VizArc, VizColor, VizPoint2d},
    Angle,
};

/// Stroke parameters. A style without a color, or with zero width, draws nothing.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineStyle {
    pub color: Option<VizColor>,
    pub width: f64,
    /// Alternating dash and gap lengths. Empty for a solid line.
    pub dashes: Vec<f64>,
    pub dash_offset: f64,
}

impl LineStyle {
    pub fn solid(color: VizColor, width: f64) -> LineStyle {
        LineStyle {
            color: Some(color),
            width,
            ..Default::default()
        }
    }

    pub fn with_dashes(mut self, dashes: &[f64], offset: f64) -> LineStyle {
        self.dashes = dashes.to_vec();
        self.dash_offset = offset;
        self
    }

    /// Return true if stroking with this style produces any output.
    pub fn is_visible(&self) -> bool {
        matches!(self.color, Some(c) if !c.is_transparent()) && self.width > 0.0
    }
}

/// Text parameters. `size` is in canvas units.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Option<VizColor>,
    pub font: String,
    pub size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            color: Some(VizColor::BLACK),
            font: String::from("sans-serif"),
            size: 12.0,
        }
    }
}

impl TextStyle {
    pub fn new(font: impl Into<String>, size: f64) -> TextStyle {
        TextStyle {
            font: font.into(),
            size,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: VizColor) -> TextStyle {
        self.color = Some(color);
        self
    }
}

/// A single component of a [RingPath].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathComp {
    MoveTo(VizPoint2d<f64>),
    LineTo(VizPoint2d<f64>),
    /// A circular arc about `center`, starting at angle `start` and sweeping the signed `extent`.
    /// A line is implied from the current point to the start of the arc.
    Arc {
        center: VizPoint2d<f64>,
        radius: f64,
        start: Angle,
        extent: Angle,
    },
    Close,
}

/// A path made of lines and circular arcs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RingPath {
    comps: Vec<PathComp>,
}

impl RingPath {
    pub fn new() -> RingPath {
        RingPath::default()
    }

    pub fn move_to(&mut self, p: VizPoint2d<f64>) {
        self.comps.push(PathComp::MoveTo(p));
    }

    pub fn line_to(&mut self, p: VizPoint2d<f64>) {
        self.comps.push(PathComp::LineTo(p));
    }

    pub fn arc(&mut self, center: VizPoint2d<f64>, radius: f64, start: Angle, extent: Angle) {
        self.comps.push(PathComp::Arc {
            center,
            radius,
            start,
            extent,
        });
    }

    pub fn close(&mut self) {
        self.comps.push(PathComp::Close);
    }

    pub fn clear(&mut self) {
        self.comps.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.comps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.comps.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathComp> {
        self.comps.iter()
    }

    pub fn components(&self) -> &[PathComp] {
        &self.comps
    }

    /// Expand an arc component into cubic Bézier segments. Other components expand to nothing.
    pub fn cubics(comp: &PathComp) -> Vec<VizArc> {
        match comp {
            PathComp::Arc {
                center,
                radius,
                start,
                extent,
            } => VizArc::segments(center, *radius, *start, *extent),
            _ => Vec::new(),
        }
    }
}

/// A 2D vector drawing surface with a transform stack.
///
/// Alignment arguments to [Canvas::fill_text] are fractions of the text's extent added to the
/// anchor point: `0.0` aligns the left (or bottom) edge, `-0.5` centers and `-1.0` aligns the
/// right (or top) edge.
pub trait Canvas {
    fn set_line_style(&mut self, style: &LineStyle);
    fn set_color(&mut self, color: VizColor);
    fn stroke(&mut self, path: &RingPath);
    fn fill(&mut self, path: &RingPath);
    fn fill_text(&mut self, style: &TextStyle, at: VizPoint2d<f64>, x_align: f64, y_align: f64, text: &str);
    /// Save the current transform.
    fn push(&mut self);
    /// Restore the transform saved by the matching [Canvas::push].
    fn pop(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    fn rotate(&mut self, angle: Angle);
}
