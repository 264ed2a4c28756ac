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

    tests/common/mod.rs

    Common support routines for tests
*/
#![allow(dead_code)]

use ringplot::prelude::*;

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A single call made on a [RecordingCanvas].
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    SetLineStyle(LineStyle),
    SetColor(VizColor),
    Stroke(RingPath),
    Fill(RingPath),
    Text {
        at: VizPoint2d<f64>,
        x_align: f64,
        y_align: f64,
        text: String,
    },
    Push,
    Pop,
    Translate(f64, f64),
    Rotate(Angle),
}

/// A canvas that records every call for later inspection.
#[derive(Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fills(&self) -> Vec<&RingPath> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn strokes(&self) -> Vec<&RingPath> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Stroke(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn colors(&self) -> Vec<VizColor> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::SetColor(c) => Some(*c),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn set_line_style(&mut self, style: &LineStyle) {
        self.ops.push(Op::SetLineStyle(style.clone()));
    }
    fn set_color(&mut self, color: VizColor) {
        self.ops.push(Op::SetColor(color));
    }
    fn stroke(&mut self, path: &RingPath) {
        self.ops.push(Op::Stroke(path.clone()));
    }
    fn fill(&mut self, path: &RingPath) {
        self.ops.push(Op::Fill(path.clone()));
    }
    fn fill_text(&mut self, _style: &TextStyle, at: VizPoint2d<f64>, x_align: f64, y_align: f64, text: &str) {
        self.ops.push(Op::Text {
            at,
            x_align,
            y_align,
            text: text.to_string(),
        });
    }
    fn push(&mut self) {
        self.ops.push(Op::Push);
    }
    fn pop(&mut self) {
        self.ops.push(Op::Pop);
    }
    fn translate(&mut self, dx: f64, dy: f64) {
        self.ops.push(Op::Translate(dx, dy));
    }
    fn rotate(&mut self, angle: Angle) {
        self.ops.push(Op::Rotate(angle));
    }
}

/// Build unlocated features named `chr1..` with the given lengths.
pub fn chromosomes(lens: &[i64]) -> Vec<FeatureRef> {
    lens.iter()
        .enumerate()
        .map(|(i, &len)| BasicFeature::new(format!("chr{}", i + 1), 0, len).into_ref())
        .collect()
}

/// Build a genome feature and chromosomes located within it, laid end to end.
pub fn genome(lens: &[i64]) -> (FeatureRef, Vec<FeatureRef>) {
    let total: i64 = lens.iter().sum();
    let genome = BasicFeature::new("genome", 0, total).into_ref();
    let mut start = 0;
    let chrs = lens
        .iter()
        .enumerate()
        .map(|(i, &len)| {
            let f = BasicFeature::new(format!("chr{}", i + 1), start, start + len)
                .with_location(genome.clone())
                .into_ref();
            start += len;
            f
        })
        .collect();
    (genome, chrs)
}

pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}
