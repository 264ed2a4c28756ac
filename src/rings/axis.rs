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
//! # Axis
//! A radial scale for rings that plot values between an inner and outer radius. The axis is a
//! line at a fixed angle, with perpendicular tick marks, tick labels, an axis label, and
//! optional grid arcs drawn across the span of every location the plotted features belong to.

use std::fmt::{self, Debug, Formatter};

use crate::{
    angle::rectangular,
    arc::ArcOfer,
    canvas::{Canvas, LineStyle, RingPath, TextStyle},
    feature::{Feature, FeatureKey, FeatureRef},
    types::VizPoint2d,
    Angle,
};

/// A mark on an axis. Ticks without a label are minor ticks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: Option<String>,
}

impl Tick {
    pub fn major(value: f64, label: impl Into<String>) -> Tick {
        Tick {
            value,
            label: Some(label.into()),
        }
    }

    pub fn minor(value: f64) -> Tick {
        Tick { value, label: None }
    }

    #[inline]
    pub fn is_minor(&self) -> bool {
        self.label.is_none()
    }
}

/// Returns the text rotation and the x and y alignment for text drawn at a position on the axis
/// angle.
pub type TextPlacement = fn(Angle) -> (Angle, f64, f64);

/// Returns a function producing the ticks between a minimum and maximum value.
pub type TickMarker = std::sync::Arc<dyn Fn(f64, f64) -> Vec<Tick> + Send + Sync>;

/// Place text along a radius, flipping it in the left half of the circle so that it is never
/// upside down. Text reads outwards on the right and inwards on the left, vertically centered.
pub fn default_placement(angle: Angle) -> (Angle, f64, f64) {
    let n = angle.normalized();
    if n > Angle::QUARTER && n <= Angle::QUARTER * 3.0 {
        (n + Angle::HALF, -1.0, -0.5)
    }
    else {
        (n, 0.0, -0.5)
    }
}

/// Suggested number of major ticks.
const SUGGESTED_TICKS: f64 = 3.0;

/// Produce major ticks at "nice" intervals of 1, 2 or 5 times a power of ten, with unlabelled minor
/// ticks halfway between them.
pub fn default_ticks(min: f64, max: f64) -> Vec<Tick> {
    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        return Vec::new();
    }

    let raw = range / SUGGESTED_TICKS;
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * mag);
    let precision = (-step.log10().floor()).max(0.0) as usize;

    let mut ticks = Vec::new();
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    if (first as f64 - 0.5) * step >= min {
        ticks.push(Tick::minor((first as f64 - 0.5) * step));
    }
    for k in first..=last {
        let value = k as f64 * step;
        // Adding zero turns -0.0 into 0.0 so it does not print with a sign.
        ticks.push(Tick::major(value, format!("{:.*}", precision, value + 0.0)));
        let half = (k as f64 + 0.5) * step;
        if half <= max {
            ticks.push(Tick::minor(half));
        }
    }
    ticks
}

/// The axis label text and how it is drawn.
#[derive(Clone, Debug, Default)]
pub struct AxisLabel {
    pub text: String,
    pub style: TextStyle,
    /// Rotation and alignment of the label. [default_placement] is used when `None`.
    pub placement: Option<TextPlacement>,
}

/// Tick mark configuration.
#[derive(Clone, Default)]
pub struct TickConfig {
    /// Style of the tick labels. Labels are not drawn when the style has no color.
    pub label: TextStyle,
    pub line_style: LineStyle,
    /// Rotation and alignment of the tick labels. [default_placement] is used when `None`.
    pub placement: Option<TextPlacement>,
    /// Length of a major tick mark. Minor ticks are half as long.
    pub length: f64,
    /// Tick generator. [default_ticks] is used when `None`. Ticks outside the axis range are not
    /// drawn.
    pub marker: Option<TickMarker>,
}

impl Debug for TickConfig {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("TickConfig")
            .field("label", &self.label)
            .field("line_style", &self.line_style)
            .field("placement", &self.placement)
            .field("length", &self.length)
            .field("marker", &self.marker.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl TickConfig {
    pub fn marks(&self, min: f64, max: f64) -> Vec<Tick> {
        match &self.marker {
            Some(marker) => marker(min, max),
            None => default_ticks(min, max),
        }
    }
}

/// A radial axis.
#[derive(Clone, Debug, Default)]
pub struct Axis {
    /// The angle the axis is drawn at.
    pub angle: Angle,
    pub label: AxisLabel,
    /// Style of the axis line.
    pub line_style: LineStyle,
    pub tick: TickConfig,
    /// Style of the grid arcs.
    pub grid: LineStyle,
}

impl Axis {
    pub fn new(angle: Angle) -> Axis {
        Axis {
            angle,
            ..Default::default()
        }
    }

    /// Render the axis about `center` for values `min..=max` mapped onto `inner..=outer`. Grid arcs
    /// are drawn across the span `base` gives each distinct location of `features`.
    ///
    /// # Panics
    /// Panics if the location of any feature cannot be resolved through `base`.
    pub fn draw_at(
        &self,
        canvas: &mut dyn Canvas,
        center: VizPoint2d<f64>,
        features: &[FeatureRef],
        base: &dyn ArcOfer,
        inner: f64,
        outer: f64,
        min: f64,
        max: f64,
    ) {
        let mut path = RingPath::new();
        let mut marks: Option<Vec<Tick>> = None;
        let ranged = max > min && max.is_finite() && min.is_finite();
        let scale = if ranged { (outer - inner) / (max - min) } else { 0.0 };
        let radius_of = |value: f64| (value - min) * scale + inner;

        if !ranged {
            log::debug!("Axis::draw_at(): empty value range {}..{}, skipping ticks and grid", min, max);
        }

        if ranged && self.grid.is_visible() {
            let mut seen = Vec::new();
            let mut locations: Vec<&dyn Feature> = Vec::new();
            for loc in features.iter().filter_map(|f| f.location()) {
                let key = FeatureKey::of(loc);
                if !seen.contains(&key) {
                    seen.push(key);
                    locations.push(loc);
                }
            }

            let ticks = marks.get_or_insert_with(|| self.tick.marks(min, max));
            canvas.set_line_style(&self.grid);
            for loc in locations {
                let arc = base
                    .arc_of(Some(loc), None)
                    .unwrap_or_else(|e| panic!("Axis::draw_at(): no arc for location '{}': {}", loc.name(), e));
                for mark in ticks.iter().filter(|m| m.value >= min && m.value <= max) {
                    let radius = radius_of(mark.value);
                    path.clear();
                    path.move_to(center + rectangular(arc.theta, radius));
                    path.arc(center, radius, arc.theta, arc.phi);
                    canvas.stroke(&path);
                }
            }
        }

        if self.line_style.is_visible() {
            path.clear();
            path.move_to(center + rectangular(self.angle, inner));
            path.line_to(center + rectangular(self.angle, outer));
            canvas.set_line_style(&self.line_style);
            canvas.stroke(&path);
        }

        if ranged && self.tick.line_style.is_visible() && self.tick.length != 0.0 {
            let ticks = marks.get_or_insert_with(|| self.tick.marks(min, max));
            canvas.set_line_style(&self.tick.line_style);
            for mark in ticks.iter().filter(|m| m.value >= min && m.value <= max) {
                let length = if mark.is_minor() {
                    self.tick.length / 2.0
                }
                else {
                    self.tick.length
                };
                let off = rectangular(self.angle + Angle::QUARTER, length);
                let e = center + rectangular(self.angle, radius_of(mark.value));

                path.clear();
                path.move_to(e);
                path.line_to(e + off);
                canvas.stroke(&path);

                if let (Some(text), Some(_)) = (&mark.label, self.tick.label.color) {
                    place_text(
                        canvas,
                        &self.tick.label,
                        e + off * 2.0,
                        self.tick.placement,
                        self.angle,
                        text,
                    );
                }
            }
        }

        if !self.label.text.is_empty() && self.label.style.color.is_some() {
            let at = center + rectangular(self.angle, (inner + outer) / 2.0);
            place_text(
                canvas,
                &self.label.style,
                at,
                self.label.placement,
                self.angle,
                &self.label.text,
            );
        }
    }
}

/// Draw text at `at`, rotated about that point according to the placement for `angle`.
fn place_text(
    canvas: &mut dyn Canvas,
    style: &TextStyle,
    at: VizPoint2d<f64>,
    placement: Option<TextPlacement>,
    angle: Angle,
    text: &str,
) {
    let (rot, x_align, y_align) = placement.unwrap_or(default_placement)(angle);
    if rot != Angle::ZERO {
        canvas.push();
        canvas.translate(at.x, at.y);
        canvas.rotate(rot);
        canvas.translate(-at.x, -at.y);
        canvas.fill_text(style, at, x_align, y_align, text);
        canvas.pop();
    }
    else {
        canvas.fill_text(style, at, x_align, y_align, text);
    }
}
