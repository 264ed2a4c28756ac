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
//! [SvgCanvas] collects drawing operations into a tree of SVG groups.
//!
//! Every [Canvas::push] and every transform opens a new `<g>` element. Transforms are never
//! applied to content drawn before them, so a transform issued mid-frame wraps only what follows.

use std::path::Path as FsPath;

use ringplot::prelude::*;
use svg::{
    node::element::{Group, Path, Rectangle, Text},
    Document,
    Node,
};
use web_time::Instant;

use crate::render_path::{svg_path_data, svg_stroke_style, viz_color_to_value};

struct Frame {
    group: Group,
    // True if the frame was opened by push() rather than by a transform.
    saved: bool,
}

/// A [Canvas] producing an SVG [Document].
///
/// Ring coordinates are y-up with the origin at the bottom left. The root group flips them into
/// SVG's y-down space, and text is flipped back locally so that it reads upright.
pub struct SvgCanvas {
    width: f64,
    height: f64,
    background: Option<VizColor>,
    frames: Vec<Frame>,
    color: VizColor,
    line_style: LineStyle,
    created: Instant,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> SvgCanvas {
        let root = Group::new().set("transform", format!("translate(0 {}) scale(1 -1)", height));
        SvgCanvas {
            width,
            height,
            background: None,
            frames: vec![Frame {
                group: root,
                saved: true,
            }],
            color: VizColor::BLACK,
            line_style: LineStyle::default(),
            created: Instant::now(),
        }
    }

    /// Fill the whole document with `color` before any other content.
    pub fn with_background(mut self, color: VizColor) -> SvgCanvas {
        self.background = Some(color);
        self
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    fn append<T>(&mut self, node: T)
    where
        T: Into<Box<dyn Node>>,
    {
        if let Some(frame) = self.frames.last_mut() {
            let group = std::mem::replace(&mut frame.group, Group::new());
            frame.group = group.add(node);
        }
    }

    /// Close the innermost frame into its parent, returning whether it was opened by push().
    fn close_frame(&mut self) -> bool {
        match self.frames.pop() {
            Some(frame) => {
                let saved = frame.saved;
                self.append(frame.group);
                saved
            }
            None => true,
        }
    }

    /// Close any open frames and assemble the final document.
    pub fn finish(mut self) -> Document {
        if self.frames.len() > 1 {
            log::warn!(
                "SvgCanvas::finish(): {} unbalanced frame(s) left open",
                self.frames.iter().skip(1).filter(|f| f.saved).count()
            );
        }
        while self.frames.len() > 1 {
            self.close_frame();
        }

        let mut document = Document::new()
            .set("viewBox", format!("0 0 {} {}", self.width, self.height))
            .set("width", self.width as f32)
            .set("height", self.height as f32);

        if let Some(color) = self.background {
            document = document.add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", viz_color_to_value(color)),
            );
        }
        if let Some(root) = self.frames.pop() {
            document = document.add(root.group);
        }

        log::trace!(
            "SvgCanvas::finish(): assembled document in {:.3}ms",
            self.created.elapsed().as_secs_f64() * 1000.0
        );
        document
    }

    /// Finish the document and write it to `path`.
    pub fn save(self, path: impl AsRef<FsPath>) -> std::io::Result<()> {
        let document = self.finish();
        svg::save(path, &document)
    }
}

impl Canvas for SvgCanvas {
    fn set_line_style(&mut self, style: &LineStyle) {
        self.line_style = style.clone();
    }

    fn set_color(&mut self, color: VizColor) {
        self.color = color;
    }

    fn stroke(&mut self, path: &RingPath) {
        if path.is_empty() || !self.line_style.is_visible() {
            return;
        }
        let node = Path::new().set("d", svg_path_data(path)).set("fill", "none");
        let node = svg_stroke_style(node, &self.line_style);
        self.append(node);
    }

    fn fill(&mut self, path: &RingPath) {
        if path.is_empty() {
            return;
        }
        let node = Path::new()
            .set("d", svg_path_data(path))
            .set("fill", viz_color_to_value(self.color))
            .set("stroke", "none");
        self.append(node);
    }

    fn fill_text(&mut self, style: &TextStyle, at: VizPoint2d<f64>, x_align: f64, y_align: f64, text: &str) {
        let Some(color) = style.color
        else {
            log::trace!("SvgCanvas::fill_text(): no color for '{}', skipping", text);
            return;
        };

        let anchor = if x_align <= -0.75 {
            "end"
        }
        else if x_align <= -0.25 {
            "middle"
        }
        else {
            "start"
        };
        let baseline = if y_align <= -0.75 {
            "hanging"
        }
        else if y_align <= -0.25 {
            "central"
        }
        else {
            "alphabetic"
        };

        let node = Text::new(text)
            .set("transform", format!("translate({} {}) scale(1 -1)", at.x, at.y))
            .set("font-family", style.font.as_str())
            .set("font-size", style.size as f32)
            .set("fill", viz_color_to_value(color))
            .set("text-anchor", anchor)
            .set("dominant-baseline", baseline);
        self.append(node);
    }

    fn push(&mut self) {
        self.frames.push(Frame {
            group: Group::new(),
            saved: true,
        });
    }

    fn pop(&mut self) {
        loop {
            if self.frames.len() <= 1 {
                log::warn!("SvgCanvas::pop(): pop without matching push");
                return;
            }
            if self.close_frame() {
                return;
            }
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.frames.push(Frame {
            group: Group::new().set("transform", format!("translate({} {})", dx, dy)),
            saved: false,
        });
    }

    fn rotate(&mut self, angle: Angle) {
        self.frames.push(Frame {
            group: Group::new().set("transform", format!("rotate({})", angle.to_degrees())),
            saved: false,
        });
    }
}
