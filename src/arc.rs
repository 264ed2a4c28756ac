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
//! The [Arc] span type and the two capability contracts built on it: [Arcer] for anything that
//! occupies one span, and [ArcOfer] for anything that can place features within its span.

use std::fmt::{self, Display, Formatter};

use crate::{Angle, Feature, RingError, TurningDirection};

/// Spans within this many radians of a full turn are treated as closed rings.
pub const CLOSED_EPSILON: f64 = 1e-9;

/// An angular span: `theta` is the start angle and `phi` the signed extent, positive for
/// counter-clockwise. `|phi|` never exceeds [Angle::COMPLETE].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Arc {
    pub theta: Angle,
    pub phi: Angle,
}

impl Arc {
    pub fn new(theta: Angle, phi: Angle) -> Arc {
        Arc { theta, phi }
    }

    /// A full counter-clockwise ring starting at `theta`.
    pub fn complete(theta: Angle) -> Arc {
        Arc {
            theta,
            phi: Angle::COMPLETE,
        }
    }

    /// The angle at which the span finishes.
    #[inline]
    pub fn end(&self) -> Angle {
        self.theta + self.phi
    }

    #[inline]
    pub fn direction(&self) -> TurningDirection {
        TurningDirection::of(self.phi)
    }

    /// Return true if the span covers a complete revolution.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.phi.abs().approx_eq(Angle::COMPLETE, CLOSED_EPSILON)
    }

    /// Return true if `|phi|` does not exceed a complete revolution.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.theta.is_finite() && self.phi.is_finite() && self.phi.abs() <= Angle::COMPLETE + Angle(CLOSED_EPSILON)
    }

    pub(crate) fn validate(&self) -> Result<(), RingError> {
        if !self.is_valid() {
            return Err(RingError::InvalidRange(format!(
                "arc extent {} exceeds a complete revolution",
                self.phi
            )));
        }
        Ok(())
    }
}

impl Display for Arc {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[{} +{}]", self.theta, self.phi)
    }
}

/// A shared, read-only handle to an [ArcOfer]. A layout is built once and then handed to every
/// primitive that renders against it.
pub type SharedArcOfer = std::sync::Arc<dyn ArcOfer>;

/// Anything that occupies a single angular span.
pub trait Arcer {
    fn arc(&self) -> Arc;

    /// If this value can also place features within its span, return it as a shareable
    /// [ArcOfer]. Constructors use this to reuse an existing layout instead of building a new one.
    fn arc_ofer(&self) -> Option<SharedArcOfer> {
        None
    }
}

/// Anything that can return the span of a feature within a location.
pub trait ArcOfer: Arcer + Send + Sync {
    /// Return the span of `feature` within `location`. When `location` is `None` the feature's own
    /// parent is used; when `feature` is `None` the span of the location itself is returned.
    fn arc_of(&self, location: Option<&dyn Feature>, feature: Option<&dyn Feature>) -> Result<Arc, RingError>;
}

impl Arcer for Arc {
    fn arc(&self) -> Arc {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_detection_tolerates_fuzz() {
        assert!(Arc::complete(Angle::ZERO).is_closed());
        assert!(Arc::new(Angle::ZERO, -Angle::COMPLETE).is_closed());
        assert!(Arc::new(Angle::ZERO, Angle(std::f64::consts::TAU - 1e-12)).is_closed());
        assert!(!Arc::new(Angle::ZERO, Angle::HALF).is_closed());
    }

    #[test]
    fn validation_rejects_overlong() {
        assert!(Arc::new(Angle::ZERO, Angle::COMPLETE * 1.01).validate().is_err());
        assert!(Arc::new(Angle::QUARTER, -Angle::COMPLETE).validate().is_ok());
    }

    #[test]
    fn end_and_direction() {
        let arc = Arc::new(Angle::QUARTER, -Angle::HALF);
        assert_eq!(arc.end(), -Angle::QUARTER);
        assert_eq!(arc.direction(), TurningDirection::Clockwise);
        assert_eq!(arc.arc(), arc);
    }
}
