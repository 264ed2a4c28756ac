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
//! Conversion of [RingPath]s and styles into SVG path data and attribute values.

use ringplot::{
    canvas::{LineStyle, PathComp, RingPath},
    rectangular,
    types::{VizArc, VizColor, VizPoint2d},
};
use svg::node::{
    element::{path::Data, Path},
    Value,
};

pub fn viz_color_to_value(color: VizColor) -> Value {
    if color.a == 0 {
        // Fully transparent, return 'none' to prevent rendering
        Value::from("none")
    }
    else if color.a < 255 {
        // Convert to rgba() string if alpha is present
        Value::from(format!(
            "rgba({}, {}, {}, {:.3})",
            color.r,
            color.g,
            color.b,
            color.a as f32 / 255.0 // Alpha normalized to [0.0, 1.0]
        ))
    }
    else {
        // Convert to hex string if fully opaque
        Value::from(format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b))
    }
}

#[inline]
fn pt(p: &VizPoint2d<f64>) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

#[inline]
fn svg_render_arc(data: Data, arc: &VizArc) -> Data {
    data.cubic_curve_to((pt(&arc.cp1), pt(&arc.cp2), pt(&arc.end)))
}

/// Build SVG path data from a [RingPath]. Arcs are expanded into cubic Bézier segments.
pub fn svg_path_data(path: &RingPath) -> Data {
    let mut data = Data::new();
    // Whether there is a current point to draw lines from.
    let mut current = false;

    for comp in path.iter() {
        match comp {
            PathComp::MoveTo(p) => {
                data = data.move_to(pt(p));
                current = true;
            }
            PathComp::LineTo(p) => {
                data = if current {
                    data.line_to(pt(p))
                }
                else {
                    data.move_to(pt(p))
                };
                current = true;
            }
            PathComp::Arc {
                center, radius, start, ..
            } => {
                let start_pt = *center + rectangular(*start, *radius);
                data = if current {
                    data.line_to(pt(&start_pt))
                }
                else {
                    data.move_to(pt(&start_pt))
                };
                for arc in RingPath::cubics(comp) {
                    data = svg_render_arc(data, &arc);
                }
                current = true;
            }
            PathComp::Close => {
                data = data.close();
            }
        }
    }
    data
}

/// Apply the stroke attributes of a [LineStyle] to a path.
pub fn svg_stroke_style(path: Path, style: &LineStyle) -> Path {
    let mut path = path
        .set("stroke", viz_color_to_value(style.color.unwrap_or_default()))
        .set("stroke-width", style.width as f32);

    if !style.dashes.is_empty() {
        let dashes = style
            .dashes
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(",");
        path = path.set("stroke-dasharray", dashes);
        if style.dash_offset != 0.0 {
            path = path.set("stroke-dashoffset", style.dash_offset as f32);
        }
    }
    path
}
