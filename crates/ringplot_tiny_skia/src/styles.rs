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
use ringplot::{canvas::LineStyle, types::VizColor};
use tiny_skia::{Stroke, StrokeDash};

pub fn vizcolor_to_color(color: VizColor) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r(), color.g(), color.b(), color.a())
}

/// Build a [Stroke] from a [LineStyle]. Dash patterns tiny-skia cannot represent fall back to a
/// solid line.
pub fn skia_stroke(style: &LineStyle) -> Stroke {
    let mut stroke = Stroke {
        width: style.width as f32,
        ..Stroke::default()
    };

    if !style.dashes.is_empty() {
        let dashes: Vec<f32> = style.dashes.iter().map(|d| *d as f32).collect();
        stroke.dash = StrokeDash::new(dashes, style.dash_offset as f32);
        if stroke.dash.is_none() {
            log::debug!("skia_stroke(): invalid dash pattern {:?}, using a solid line", style.dashes);
        }
    }
    stroke
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_stroke_width() {
        let stroke = skia_stroke(&LineStyle::solid(VizColor::BLACK, 2.5));
        assert_eq!(stroke.width, 2.5);
        assert!(stroke.dash.is_none());
    }

    #[test]
    fn dashed_stroke() {
        let style = LineStyle::solid(VizColor::BLACK, 1.0).with_dashes(&[4.0, 2.0], 1.0);
        assert!(skia_stroke(&style).dash.is_some());

        // An odd-length pattern is rejected by tiny-skia.
        let style = LineStyle::solid(VizColor::BLACK, 1.0).with_dashes(&[4.0], 0.0);
        assert!(skia_stroke(&style).dash.is_none());
    }

    #[test]
    fn color_conversion() {
        let c = vizcolor_to_color(VizColor::from_rgba8(255, 0, 0, 255));
        assert_eq!(c.red(), 1.0);
        assert_eq!(c.alpha(), 1.0);
    }
}
