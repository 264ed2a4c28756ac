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
//! Linear features to be placed on a ring.
//!
//! A [Feature] has a half-open linear extent `[start, end)` and may be nested within a parent
//! location. Child coordinates share the parent's frame: a gene at `1_200..1_800` within a
//! chromosome at `0..10_000` occupies the corresponding fraction of the chromosome's arc.

use std::{
    fmt::Debug,
    ops::Mul,
};

use crate::{canvas::LineStyle, types::VizColor};

/// A shared handle to a [Feature]. The address of the allocation is the feature's identity.
pub type FeatureRef = std::sync::Arc<dyn Feature>;

/// Identity of a feature within a layout: the address of the feature's data.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureKey(usize);

impl FeatureKey {
    pub fn of(feature: &dyn Feature) -> FeatureKey {
        FeatureKey(feature as *const _ as *const () as usize)
    }
}

/// The strand a feature is read along.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Forward,
    Reverse,
    NotOriented,
}

/// Orientations compose like signs: two reversals cancel, and an unoriented link makes the whole
/// chain unoriented.
impl Mul for Orientation {
    type Output = Orientation;
    fn mul(self, rhs: Orientation) -> Orientation {
        use Orientation::*;
        match (self, rhs) {
            (NotOriented, _) | (_, NotOriented) => NotOriented,
            (Forward, o) | (o, Forward) => o,
            (Reverse, Reverse) => Forward,
        }
    }
}

/// A read-only linear feature.
///
/// The optional capability methods let a feature override the styling of the primitive it is
/// drawn by. Their defaults decline.
pub trait Feature: Debug + Send + Sync {
    fn name(&self) -> &str;
    fn start(&self) -> i64;
    fn end(&self) -> i64;

    fn len(&self) -> i64 {
        self.end() - self.start()
    }

    fn is_empty(&self) -> bool {
        self.len() <= 0
    }

    /// The parent feature this feature's coordinates are relative to, if any.
    fn location(&self) -> Option<&dyn Feature> {
        None
    }

    /// The orientation relative to the parent location. `None` means the feature takes no part
    /// in orientation.
    fn orientation(&self) -> Option<Orientation> {
        None
    }

    fn fill_color(&self) -> Option<VizColor> {
        None
    }

    fn line_style(&self) -> Option<LineStyle> {
        None
    }
}

/// Return the orientation of a feature relative to the root of its location chain.
/// Links without an orientation are skipped.
pub fn global_orientation(feature: &dyn Feature) -> Orientation {
    let mut orientation = Orientation::Forward;
    let mut link = Some(feature);
    while let Some(f) = link {
        if let Some(o) = f.orientation() {
            orientation = orientation * o;
        }
        link = f.location();
    }
    orientation
}

/// Return true if both references point at the same feature.
#[inline]
pub fn same_feature(a: &dyn Feature, b: &dyn Feature) -> bool {
    FeatureKey::of(a) == FeatureKey::of(b)
}

/// A general purpose [Feature] implementation.
#[derive(Clone, Debug, Default)]
pub struct BasicFeature {
    pub name: String,
    pub start: i64,
    pub end: i64,
    pub location: Option<FeatureRef>,
    pub orientation: Option<Orientation>,
    pub fill_color: Option<VizColor>,
    pub line_style: Option<LineStyle>,
}

impl BasicFeature {
    pub fn new(name: impl Into<String>, start: i64, end: i64) -> BasicFeature {
        BasicFeature {
            name: name.into(),
            start,
            end,
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: FeatureRef) -> BasicFeature {
        self.location = Some(location);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> BasicFeature {
        self.orientation = Some(orientation);
        self
    }

    pub fn with_fill_color(mut self, color: VizColor) -> BasicFeature {
        self.fill_color = Some(color);
        self
    }

    pub fn with_line_style(mut self, style: LineStyle) -> BasicFeature {
        self.line_style = Some(style);
        self
    }

    /// Wrap the feature in a shared [FeatureRef].
    pub fn into_ref(self) -> FeatureRef {
        std::sync::Arc::new(self)
    }
}

impl Feature for BasicFeature {
    fn name(&self) -> &str {
        &self.name
    }
    fn start(&self) -> i64 {
        self.start
    }
    fn end(&self) -> i64 {
        self.end
    }
    fn location(&self) -> Option<&dyn Feature> {
        self.location.as_deref()
    }
    fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }
    fn fill_color(&self) -> Option<VizColor> {
        self.fill_color
    }
    fn line_style(&self) -> Option<LineStyle> {
        self.line_style.clone()
    }
}
