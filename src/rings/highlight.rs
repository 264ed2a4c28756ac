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
//! # Highlight
//! [Highlight] fills a single annular band over a fixed span, independent of any feature layout.

use crate::{
    arc::{Arc, Arcer},
    canvas::{Canvas, LineStyle, RingPath},
    rings::{check_radii, radial_box, sector_path, Ring},
    types::{VizColor, VizPoint2d, VizRect},
    RingError,
};

/// A single colored band over a fixed span.
#[derive(Clone, Debug)]
pub struct Highlight {
    pub base: Arc,
    pub color: Option<VizColor>,
    pub line_style: LineStyle,
    pub inner: f64,
    pub outer: f64,
    pub x: f64,
    pub y: f64,
}

impl Highlight {
    pub fn new(color: Option<VizColor>, base: Arc, inner: f64, outer: f64) -> Result<Highlight, RingError> {
        check_radii(inner, outer)?;
        base.validate()?;
        Ok(Highlight {
            base,
            color,
            line_style: LineStyle::default(),
            inner,
            outer,
            x: 0.0,
            y: 0.0,
        })
    }

    pub fn with_line_style(mut self, style: LineStyle) -> Highlight {
        self.line_style = style;
        self
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Highlight {
        self.x = x;
        self.y = y;
        self
    }
}

impl Arcer for Highlight {
    fn arc(&self) -> Arc {
        self.base
    }
}

impl Ring for Highlight {
    fn draw_at(&self, canvas: &mut dyn Canvas, center: VizPoint2d<f64>) {
        let visible_line = self.line_style.is_visible();
        if self.color.is_none() && !visible_line {
            return;
        }

        // A full ring is drawn as two separate circles so the fill has a hole and no radial seam.
        let mut path = RingPath::new();
        sector_path(&mut path, center, self.base, self.inner, self.outer, self.base.is_closed());

        if let Some(color) = self.color {
            canvas.set_color(color);
            canvas.fill(&path);
        }
        if visible_line {
            canvas.set_line_style(&self.line_style);
            canvas.stroke(&path);
        }
    }

    fn xy(&self) -> VizPoint2d<f64> {
        VizPoint2d::new(self.x, self.y)
    }

    fn glyph_box(&self) -> VizRect<f64> {
        radial_box(self.outer)
    }
}
