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
//! Basic geometric types shared by the layout engine and the canvas backends.
//!
//! Circular arcs are approximated with cubic Bézier curves. Derived constants for quadrant
//! (90 degree) arcs are taken from:
//! https://spencermortensen.com/articles/bezier-circle/
//!
//! Arcs longer than a quarter turn are split so that no single curve spans more than 90 degrees,
//! which keeps the radial error well under a thousandth of the radius.

use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Div, Mul, Sub},
};

use num_traits::Num;

use crate::Angle;

/// A [VizRect] represents a rectangle in 2D space. It is generic across numeric types, using
/// `num_traits`.
///
/// The rectangle is defined by two points, the top-left and bottom-right corners. Ring plots work
/// in y-up coordinates, so for glyph boxes "top-left" is the minimum corner.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct VizRect<T: Num + Copy + PartialOrd + Default> {
    pub top_left: VizPoint2d<T>,
    pub bottom_right: VizPoint2d<T>,
}

impl<T: Num + Copy + PartialOrd + Default> VizRect<T> {
    #[inline]
    fn min(a: T, b: T) -> T {
        if a < b {
            a
        }
        else {
            b
        }
    }

    #[inline]
    fn max(a: T, b: T) -> T {
        if a > b {
            a
        }
        else {
            b
        }
    }

    pub fn new(top_left: VizPoint2d<T>, bottom_right: VizPoint2d<T>) -> VizRect<T> {
        VizRect { top_left, bottom_right }
    }

    pub fn from_tuple(top_left: (T, T), bottom_right: (T, T)) -> VizRect<T> {
        VizRect {
            top_left: VizPoint2d::from(top_left),
            bottom_right: VizPoint2d::from(bottom_right),
        }
    }

    pub fn width(&self) -> T {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> T {
        self.bottom_right.y - self.top_left.y
    }

    /// Returns the bounding box that includes both [VizRect]s
    pub fn bounding_box(&self, other: &VizRect<T>) -> VizRect<T> {
        let top_left = VizPoint2d::new(
            Self::min(self.top_left.x, other.top_left.x),
            Self::min(self.top_left.y, other.top_left.y),
        );

        let bottom_right = VizPoint2d::new(
            Self::max(self.bottom_right.x, other.bottom_right.x),
            Self::max(self.bottom_right.y, other.bottom_right.y),
        );

        VizRect::new(top_left, bottom_right)
    }

    /// Return whether the specified point is within Self
    pub fn contains_point(&self, point: &VizPoint2d<T>) -> bool {
        point.x >= self.top_left.x
            && point.x <= self.bottom_right.x
            && point.y >= self.top_left.y
            && point.y <= self.bottom_right.y
    }

    /// Return a copy of the rectangle moved by `offset`.
    pub fn translate(&self, offset: VizPoint2d<T>) -> VizRect<T> {
        VizRect {
            top_left: self.top_left + offset,
            bottom_right: self.bottom_right + offset,
        }
    }

    pub fn to_tuple(&self) -> (T, T, T, T) {
        (
            self.top_left.x,
            self.top_left.y,
            self.bottom_right.x,
            self.bottom_right.y,
        )
    }
}

impl<T> VizRect<T>
where
    T: Num + Copy + Add<T, Output = T> + Div<T, Output = T> + From<f32> + PartialOrd + Default,
{
    pub fn center(&self) -> VizPoint2d<T> {
        VizPoint2d::new(
            self.top_left.x + self.width() / T::from(2.0),
            self.top_left.y + self.height() / T::from(2.0),
        )
    }
}

/// A [VizPoint2d] represents a point in 2D space.
/// It is generic across numeric types, using `num_traits`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VizPoint2d<T> {
    pub x: T,
    pub y: T,
}

impl<T: Num + Copy + Default + Display> Display for VizPoint2d<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Num + Copy + Default> Default for VizPoint2d<T> {
    fn default() -> Self {
        VizPoint2d {
            x: T::default(),
            y: T::default(),
        }
    }
}

impl<T: Num + Copy + Default> From<(T, T)> for VizPoint2d<T> {
    fn from(tuple: (T, T)) -> Self {
        VizPoint2d { x: tuple.0, y: tuple.1 }
    }
}

impl<T: Num + Copy + Default> VizPoint2d<T> {
    pub fn new(x: T, y: T) -> Self {
        VizPoint2d { x, y }
    }

    pub fn to_tuple(&self) -> (T, T) {
        (self.x, self.y)
    }

    pub fn scale(&self, factor: T) -> VizPoint2d<T> {
        VizPoint2d {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl VizPoint2d<f64> {
    /// Euclidean distance from the origin.
    #[inline]
    pub fn hypot(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &VizPoint2d<f64>) -> f64 {
        (*self - *other).hypot()
    }
}

impl<T: Num + Copy + Default> Add for VizPoint2d<T> {
    type Output = VizPoint2d<T>;
    fn add(self, rhs: VizPoint2d<T>) -> Self::Output {
        VizPoint2d {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Num + Copy + Default> Sub for VizPoint2d<T> {
    type Output = VizPoint2d<T>;
    fn sub(self, rhs: VizPoint2d<T>) -> Self::Output {
        VizPoint2d {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T> Mul<T> for VizPoint2d<T>
where
    T: Num + Copy + Default,
{
    type Output = VizPoint2d<T>;
    fn mul(self, rhs: T) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// A [VizArc] represents a cubic Bezier curve in 2D space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VizArc {
    pub start: VizPoint2d<f64>, // Start point of arc
    pub end:   VizPoint2d<f64>, // End point of arc
    pub cp1:   VizPoint2d<f64>, // 1st control point
    pub cp2:   VizPoint2d<f64>, // 2nd control point
}

impl VizArc {
    /// The largest sweep a single [VizArc] is allowed to approximate.
    pub const MAX_SWEEP: Angle = Angle::QUARTER;
    /// Sweeps smaller than this are treated as zero.
    pub const MIN_SWEEP: Angle = Angle(1e-12);

    /// Calculate cubic Bézier parameters from a center point, radius, and start and end angles.
    /// This assumes the curve represents a segment of a circle. The sweep may be negative
    /// (clockwise) but should not be zero.
    pub fn from_angles(center: &VizPoint2d<f64>, radius: f64, start_angle: Angle, end_angle: Angle) -> VizArc {
        let (sin1, cos1) = start_angle.radians().sin_cos();
        let (sin4, cos4) = end_angle.radians().sin_cos();

        // Relative vectors from the center to each end point
        let ax = radius * cos1;
        let ay = radius * sin1;
        let bx = radius * cos4;
        let by = radius * sin4;

        // Circular cubic approximation using (4/3).
        // q1 = |A|^2 = ax² + ay²
        // q2 = q1 + (A · B) = q1 + ax*bx + ay*by
        let q1 = ax * ax + ay * ay;
        let q2 = q1 + ax * bx + ay * by;
        let cross = ax * by - ay * bx;
        // Coincident end points leave the control points on them.
        let k2 = if cross == 0.0 {
            0.0
        }
        else {
            (4.0 / 3.0) * ((2.0 * q1 * q2).sqrt() - q2) / cross
        };

        // Reapply center offset
        let (x2, y2) = (center.x + ax - k2 * ay, center.y + ay + k2 * ax);
        let (x3, y3) = (center.x + bx + k2 * by, center.y + by - k2 * bx);

        VizArc {
            start: VizPoint2d::new(center.x + ax, center.y + ay),
            end:   VizPoint2d::new(center.x + bx, center.y + by),
            cp1:   VizPoint2d::new(x2, y2),
            cp2:   VizPoint2d::new(x3, y3),
        }
    }

    /// Split a circular arc of the given signed `extent` into cubic segments, none of which sweeps
    /// more than [VizArc::MAX_SWEEP]. An extent below [VizArc::MIN_SWEEP] or a non-finite extent
    /// produces no segments.
    pub fn segments(center: &VizPoint2d<f64>, radius: f64, start: Angle, extent: Angle) -> Vec<VizArc> {
        let sweep = extent.radians();
        if !sweep.is_finite() || sweep.abs() < Self::MIN_SWEEP.radians() {
            return Vec::new();
        }

        // Tolerate float fuzz so that an exact full turn yields four segments, not five.
        let count = ((sweep.abs() / Self::MAX_SWEEP.radians()) - 1e-9).ceil().max(1.0) as usize;
        let step = extent / count as f64;

        let mut segments = Vec::with_capacity(count);
        let mut angle = start;
        for i in 0..count {
            // Pin the final end point to the exact requested end angle.
            let next = if i + 1 == count { start + extent } else { angle + step };
            segments.push(VizArc::from_angles(center, radius, angle, next));
            angle = next;
        }
        segments
    }

    /// Evaluate the curve at `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> VizPoint2d<f64> {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        VizPoint2d::new(
            a * self.start.x + b * self.cp1.x + c * self.cp2.x + d * self.end.x,
            a * self.start.y + b * self.cp1.y + c * self.cp2.y + d * self.end.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn quarter_arc_end_points_on_circle() {
        let center = VizPoint2d::new(10.0, -5.0);
        let arc = VizArc::from_angles(&center, 4.0, Angle::ZERO, Angle::QUARTER);
        assert!((arc.start.x - 14.0).abs() < EPS && (arc.start.y + 5.0).abs() < EPS);
        assert!((arc.end.x - 10.0).abs() < EPS && (arc.end.y + 1.0).abs() < EPS);
        // The standard quadrant control offset is ~0.5523 * radius.
        assert!((arc.cp1.y - (-5.0 + 4.0 * 0.552284749831)).abs() < 1e-6);
    }

    #[test]
    fn clockwise_arc_bends_outward() {
        let center = VizPoint2d::new(0.0, 0.0);
        let arc = VizArc::from_angles(&center, 1.0, Angle::ZERO, -Angle::QUARTER);
        let mid = arc.point_at(0.5);
        assert!((mid.hypot() - 1.0).abs() < 1e-3);
        assert!(mid.x > 0.0 && mid.y < 0.0);
    }

    #[test]
    fn full_turn_is_four_segments() {
        let center = VizPoint2d::new(0.0, 0.0);
        let segments = VizArc::segments(&center, 2.0, Angle::ZERO, Angle::COMPLETE);
        assert_eq!(segments.len(), 4);
        let last = segments[3].end;
        assert!((last.x - 2.0).abs() < EPS && last.y.abs() < EPS);
    }

    #[test]
    fn segments_stay_near_circle() {
        let center = VizPoint2d::new(3.0, 3.0);
        for segment in VizArc::segments(&center, 5.0, Angle::from_degrees(17.0), Angle::from_degrees(-250.0)) {
            for i in 0..=8 {
                let p = segment.point_at(i as f64 / 8.0);
                assert!((p.distance(&center) - 5.0).abs() < 5.0 * 1e-3);
            }
        }
    }

    #[test]
    fn zero_extent_has_no_segments() {
        let center = VizPoint2d::default();
        assert!(VizArc::segments(&center, 1.0, Angle::QUARTER, Angle::ZERO).is_empty());
    }

    #[test]
    fn vanishing_extent_stays_finite() {
        let center = VizPoint2d::default();
        assert!(VizArc::segments(&center, 100.0, Angle(1.0), Angle(1e-17)).is_empty());
        assert!(VizArc::segments(&center, 100.0, Angle(1.0), Angle(-1e-13)).is_empty());

        // Coincident end points collapse the control points onto them.
        let arc = VizArc::from_angles(&center, 100.0, Angle(1.0), Angle(1.0));
        for p in [arc.cp1, arc.cp2] {
            assert!(p.x.is_finite() && p.y.is_finite());
            assert!((p.x - arc.start.x).abs() < EPS && (p.y - arc.start.y).abs() < EPS);
        }
    }

    #[test]
    fn rect_bounding_box_and_translate() {
        let a = VizRect::from_tuple((-1.0, -1.0), (1.0, 1.0));
        let b = VizRect::from_tuple((0.0, 0.0), (3.0, 2.0));
        let bb = a.bounding_box(&b);
        assert_eq!(bb.to_tuple(), (-1.0, -1.0, 3.0, 2.0));
        let moved = a.translate(VizPoint2d::new(5.0, 5.0));
        assert!(moved.contains_point(&VizPoint2d::new(5.0, 5.0)));
        assert_eq!(moved.width(), 2.0);
    }
}
