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
//! Angular values and the polar to cartesian conversion every ring primitive is built on.
//!
//! Angles are measured in radians, counter-clockwise from the positive x axis, in a y-up
//! coordinate system.

use std::{
    f64::consts::{PI, TAU},
    fmt::{self, Display, Formatter},
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

use crate::types::VizPoint2d;

/// An [Angle] is a plain `f64` count of radians.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    /// One complete revolution.
    pub const COMPLETE: Angle = Angle(TAU);
    pub const HALF: Angle = Angle(PI);
    pub const QUARTER: Angle = Angle(TAU / 4.0);

    #[inline]
    pub const fn from_radians(radians: f64) -> Angle {
        Angle(radians)
    }

    #[inline]
    pub fn from_degrees(degrees: f64) -> Angle {
        Angle(degrees.to_radians())
    }

    #[inline]
    pub fn radians(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_degrees(&self) -> f64 {
        self.0.to_degrees()
    }

    #[inline]
    pub fn abs(&self) -> Angle {
        Angle(self.0.abs())
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Wrap the angle into `[0, COMPLETE)`.
    pub fn normalized(&self) -> Angle {
        let wrapped = self.0.rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs.
        if wrapped >= TAU {
            Angle::ZERO
        }
        else {
            Angle(wrapped)
        }
    }

    /// Return true if the two angles are within `epsilon` radians of each other.
    #[inline]
    pub fn approx_eq(&self, other: Angle, epsilon: f64) -> bool {
        (self.0 - other.0).abs() <= epsilon
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:.4}°", self.to_degrees())
    }
}

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Angle) {
        self.0 += rhs.0;
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Angle) {
        self.0 -= rhs.0;
    }
}

impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: Angle) -> Angle {
        Angle(self * rhs.0)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn div(self, rhs: f64) -> Angle {
        Angle(self.0 / rhs)
    }
}

/// The ratio of two angles.
impl Div<Angle> for Angle {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Angle) -> f64 {
        self.0 / rhs.0
    }
}

/// Determines the direction in which a span is swept around the ring, starting from its start
/// angle. The discriminant is the sign applied to a magnitude, so `direction * magnitude` yields a
/// signed [Angle].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TurningDirection {
    Clockwise = -1,
    #[default]
    CounterClockwise = 1,
}

impl TurningDirection {
    pub fn opposite(&self) -> Self {
        match self {
            TurningDirection::Clockwise => TurningDirection::CounterClockwise,
            TurningDirection::CounterClockwise => TurningDirection::Clockwise,
        }
    }

    #[inline]
    pub fn sign(&self) -> f64 {
        *self as i8 as f64
    }

    /// The direction a signed extent is swept in. Zero counts as counter-clockwise.
    pub fn of(extent: Angle) -> TurningDirection {
        if extent.0 < 0.0 {
            TurningDirection::Clockwise
        }
        else {
            TurningDirection::CounterClockwise
        }
    }
}

impl Mul<Angle> for TurningDirection {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: Angle) -> Angle {
        Angle(self.sign() * rhs.0)
    }
}

/// Convert a polar coordinate about the origin into a cartesian point.
#[inline]
pub fn rectangular(angle: Angle, radius: f64) -> VizPoint2d<f64> {
    let (sin, cos) = angle.0.sin_cos();
    VizPoint2d::new(radius * cos, radius * sin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangular_lies_on_circle() {
        for i in 0..360 {
            let a = Angle::from_degrees(i as f64 * 1.7);
            let p = rectangular(a, 42.5);
            assert!((p.x * p.x + p.y * p.y - 42.5 * 42.5).abs() < 1e-9);
        }
    }

    #[test]
    fn rectangular_quarter_points() {
        let p = rectangular(Angle::QUARTER, 2.0);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_wraps() {
        assert!(Angle::from_degrees(-90.0).normalized().approx_eq(Angle::from_degrees(270.0), 1e-12));
        assert!(Angle::from_degrees(720.0 + 45.0).normalized().approx_eq(Angle::from_degrees(45.0), 1e-12));
        assert_eq!(Angle::COMPLETE.normalized(), Angle::ZERO);
        assert_eq!(Angle(-1e-18).normalized(), Angle::ZERO);
    }

    #[test]
    fn direction_signs_magnitude() {
        let m = Angle::from_degrees(30.0);
        assert_eq!(TurningDirection::Clockwise * m, -m);
        assert_eq!(TurningDirection::CounterClockwise * m, m);
        assert_eq!(TurningDirection::Clockwise.opposite(), TurningDirection::CounterClockwise);
        assert_eq!(TurningDirection::of(-m), TurningDirection::Clockwise);
    }

    #[test]
    fn arithmetic_is_closed() {
        let a = Angle(1.0);
        let b = Angle(0.25);
        assert_eq!(a + b, Angle(1.25));
        assert_eq!(a - b, Angle(0.75));
        assert_eq!(a * 2.0, Angle(2.0));
        assert_eq!(a / 4.0, b);
        assert_eq!(a / b, 4.0);
    }
}
