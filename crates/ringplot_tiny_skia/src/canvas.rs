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
use ringplot::prelude::*;
use tiny_skia::{FillRule, Paint, Pixmap, Transform};
use web_time::Instant;

use crate::{
    render_path::skia_path,
    styles::{skia_stroke, vizcolor_to_color},
};

/// A [Canvas] rasterizing into a [Pixmap].
///
/// Ring coordinates are y-up with the origin at the bottom left; the base transform flips them
/// into the pixmap's y-down space. Text is not rasterized.
pub struct SkiaCanvas {
    pixmap: Pixmap,
    paint: Paint<'static>,
    color: VizColor,
    line_style: LineStyle,
    transform: Transform,
    saved: Vec<Transform>,
    created: Instant,
}

impl SkiaCanvas {
    /// Create a canvas of the given size in pixels. Returns `None` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Option<SkiaCanvas> {
        let pixmap = Pixmap::new(width, height)?;
        let mut paint = Paint::default();
        paint.anti_alias = true;

        Some(SkiaCanvas {
            pixmap,
            paint,
            color: VizColor::BLACK,
            line_style: LineStyle::default(),
            transform: Transform::from_row(1.0, 0.0, 0.0, -1.0, 0.0, height as f32),
            saved: Vec::new(),
            created: Instant::now(),
        })
    }

    /// Fill the whole pixmap with `color`.
    pub fn with_background(mut self, color: VizColor) -> SkiaCanvas {
        self.pixmap.fill(vizcolor_to_color(color));
        self
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        log::trace!(
            "SkiaCanvas::into_pixmap(): rendered in {:.3}ms",
            self.created.elapsed().as_secs_f64() * 1000.0
        );
        self.pixmap
    }
}

impl Canvas for SkiaCanvas {
    fn set_line_style(&mut self, style: &LineStyle) {
        self.line_style = style.clone();
    }

    fn set_color(&mut self, color: VizColor) {
        self.color = color;
    }

    fn stroke(&mut self, path: &RingPath) {
        if !self.line_style.is_visible() {
            return;
        }
        let Some(path) = skia_path(path)
        else {
            log::trace!("SkiaCanvas::stroke(): empty path");
            return;
        };
        if let Some(color) = self.line_style.color {
            self.paint.set_color(vizcolor_to_color(color));
        }
        let stroke = skia_stroke(&self.line_style);
        self.pixmap.stroke_path(&path, &self.paint, &stroke, self.transform, None);
    }

    fn fill(&mut self, path: &RingPath) {
        let Some(path) = skia_path(path)
        else {
            log::trace!("SkiaCanvas::fill(): empty path");
            return;
        };
        self.paint.set_color(vizcolor_to_color(self.color));
        self.pixmap
            .fill_path(&path, &self.paint, FillRule::Winding, self.transform, None);
    }

    fn fill_text(&mut self, _style: &TextStyle, _at: VizPoint2d<f64>, _x_align: f64, _y_align: f64, text: &str) {
        log::debug!("SkiaCanvas::fill_text(): text is not supported, skipping '{}'", text);
    }

    fn push(&mut self) {
        self.saved.push(self.transform);
    }

    fn pop(&mut self) {
        match self.saved.pop() {
            Some(transform) => self.transform = transform,
            None => log::warn!("SkiaCanvas::pop(): pop without matching push"),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform.pre_translate(dx as f32, dy as f32);
    }

    fn rotate(&mut self, angle: Angle) {
        self.transform = self.transform.pre_rotate(angle.to_degrees() as f32);
    }
}
