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
use ringplot::{
    canvas::{PathComp, RingPath},
    rectangular,
    types::VizArc,
};
use tiny_skia::PathBuilder;

#[inline]
fn skia_render_arc(path: &mut PathBuilder, arc: &VizArc) {
    path.cubic_to(
        arc.cp1.x as f32,
        arc.cp1.y as f32,
        arc.cp2.x as f32,
        arc.cp2.y as f32,
        arc.end.x as f32,
        arc.end.y as f32,
    );
}

/// Build a tiny-skia path from a [RingPath]. Arcs are expanded into cubic Bézier segments.
/// Returns `None` for paths tiny-skia considers empty.
pub fn skia_path(ring_path: &RingPath) -> Option<tiny_skia::Path> {
    let mut path = PathBuilder::new();
    let mut current = false;

    for comp in ring_path.iter() {
        match comp {
            PathComp::MoveTo(p) => {
                path.move_to(p.x as f32, p.y as f32);
                current = true;
            }
            PathComp::LineTo(p) => {
                if current {
                    path.line_to(p.x as f32, p.y as f32);
                }
                else {
                    path.move_to(p.x as f32, p.y as f32);
                }
                current = true;
            }
            PathComp::Arc {
                center, radius, start, ..
            } => {
                let p = *center + rectangular(*start, *radius);
                if current {
                    path.line_to(p.x as f32, p.y as f32);
                }
                else {
                    path.move_to(p.x as f32, p.y as f32);
                }
                for arc in RingPath::cubics(comp) {
                    skia_render_arc(&mut path, &arc);
                }
                current = true;
            }
            PathComp::Close => {
                path.close();
            }
        }
    }
    path.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringplot::{types::VizPoint2d, Angle};

    #[test]
    fn arc_bounds() {
        let mut ring_path = RingPath::new();
        ring_path.arc(VizPoint2d::new(0.0, 0.0), 10.0, Angle::ZERO, Angle::COMPLETE);
        ring_path.close();
        let path = skia_path(&ring_path).unwrap();
        let bounds = path.bounds();
        assert!((bounds.left() + 10.0).abs() < 0.01);
        assert!((bounds.right() - 10.0).abs() < 0.01);
        assert!((bounds.top() + 10.0).abs() < 0.01);
        assert!((bounds.bottom() - 10.0).abs() < 0.01);
    }

    #[test]
    fn empty_path_is_none() {
        assert!(skia_path(&RingPath::new()).is_none());
    }
}
