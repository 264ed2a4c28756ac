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
//! # Gapped arc layout
//!
//! [GappedArcs] divides a base span between an ordered set of features in proportion to their
//! linear lengths, leaving a fixed angular gap between neighbours.
//!
//! For `n` features the layout reserves `n - 1` gaps on an open base, and `n` gaps on a closed
//! base so that the last feature is also separated from the first. The remaining budget is shared
//! out proportionally:
//!
//! ```text
//!   budget   = |phi| - gaps * gap
//!   extent_i = len_i / Σlen * budget
//!   start_i  = theta + sign * (Σ_{j<i} len_j * scale + i * gap)
//! ```
//!
//! Start angles are computed from an integer prefix sum of lengths rather than by accumulating
//! floating point extents, so the position of each feature depends only on the features before it.
//!
//! A location shared by several laid-out features gets an aggregate span running from its first
//! member to its last. Members are expected to be contiguous in the feature order; any feature
//! laid out between them falls inside the aggregate.
//!
//! Once built the layout is immutable. It is typically wrapped in a [SharedArcOfer] and handed to
//! every primitive drawing against the same base.

use crate::{
    arc::{Arc, ArcOfer, Arcer, SharedArcOfer},
    feature::{global_orientation, Feature, FeatureKey, FeatureRef, Orientation},
    Angle,
    RingError,
    RingHashMap,
};

/// A proportional layout of features around a base [Arc].
#[derive(Clone, Debug)]
pub struct GappedArcs {
    base: Arc,
    gap: Angle,
    gap_count: usize,
    features: Vec<FeatureRef>,
    arcs: RingHashMap<FeatureKey, Arc>,
    locations: RingHashMap<FeatureKey, Arc>,
}

impl GappedArcs {
    /// Lay out `features` in order within the span of `base`, separated by `gap`.
    pub fn new(base: &dyn Arcer, features: &[FeatureRef], gap: Angle) -> Result<GappedArcs, RingError> {
        let base = base.arc();
        base.validate()?;
        if !gap.is_finite() || gap < Angle::ZERO {
            return Err(RingError::InvalidRange(format!("gap {} must be a finite, non-negative angle", gap)));
        }

        let mut total_len: i64 = 0;
        for f in features {
            if f.end() < f.start() {
                log::debug!(
                    "GappedArcs::new(): feature '{}' ends ({}) before it starts ({})",
                    f.name(),
                    f.end(),
                    f.start()
                );
                return Err(RingError::InvalidRange(format!(
                    "feature '{}' has end {} before start {}",
                    f.name(),
                    f.end(),
                    f.start()
                )));
            }
            total_len = total_len.checked_add(f.len()).ok_or_else(|| {
                RingError::InvalidRange("total feature length overflows a 64-bit integer".to_string())
            })?;
        }

        let closed = base.is_closed();
        let n = features.len();
        let gap_count = if closed { n } else { n.saturating_sub(1) };

        let available = base.phi.abs();
        let required = gap * gap_count as f64;
        let budget = available - required;
        if budget < Angle::ZERO {
            log::debug!(
                "GappedArcs::new(): {} gaps of {} exceed the base span of {}",
                gap_count,
                gap,
                available
            );
            return Err(RingError::Overflow {
                required: required.radians(),
                available: available.radians(),
            });
        }

        let scale = if total_len > 0 {
            budget.radians() / total_len as f64
        }
        else {
            if n > 0 {
                log::warn!("GappedArcs::new(): all {} features are degenerate; every extent is zero", n);
            }
            0.0
        };
        let sign = base.direction().sign();

        log::debug!(
            "GappedArcs::new(): laying out {} features over {} ({}), gap: {} x {}, budget: {}",
            n,
            base,
            if closed { "closed" } else { "open" },
            gap_count,
            gap,
            budget
        );

        // Unwrapped offsets from the base start, used to build both the feature arcs and the
        // per-location aggregates.
        let mut offsets = Vec::with_capacity(n);
        let mut prefix: i64 = 0;
        for (i, f) in features.iter().enumerate() {
            let start = prefix as f64 * scale + i as f64 * gap.radians();
            let extent = f.len() as f64 * scale;
            offsets.push((start, extent));
            prefix += f.len();
        }

        let mut arcs = RingHashMap::with_capacity(n);
        for (f, &(start, extent)) in features.iter().zip(offsets.iter()) {
            let mut theta = base.theta + Angle(sign * start);
            if closed && !(Angle::ZERO..Angle::COMPLETE).contains(&theta) {
                theta = theta.normalized();
            }
            let arc = Arc::new(theta, Angle(sign * extent));
            log::trace!("GappedArcs::new(): '{}' [{}, {}) -> {}", f.name(), f.start(), f.end(), arc);
            arcs.insert(FeatureKey::of(f.as_ref()), arc);
        }

        // Aggregates span from the first member of each location to its last, gaps included.
        let mut members: RingHashMap<FeatureKey, (usize, usize, bool)> = RingHashMap::new();
        for (i, f) in features.iter().enumerate() {
            if let Some(loc) = f.location() {
                members
                    .entry(FeatureKey::of(loc))
                    .and_modify(|(_, last, split)| {
                        *split |= *last + 1 != i;
                        *last = i;
                    })
                    .or_insert((i, i, false));
            }
        }
        let mut locations = RingHashMap::with_capacity(members.len());
        for (key, (first, last, split)) in members {
            if split {
                log::warn!(
                    "GappedArcs::new(): members of location '{}' are not contiguous; its span covers '{}' to '{}'",
                    features[first].location().map(|l| l.name()).unwrap_or_default(),
                    features[first].name(),
                    features[last].name()
                );
            }
            let (first_start, _) = offsets[first];
            let (last_start, last_extent) = offsets[last];
            let theta = arcs[&FeatureKey::of(features[first].as_ref())].theta;
            let phi = Angle(sign * (last_start + last_extent - first_start));
            locations.insert(key, Arc::new(theta, phi));
        }

        Ok(GappedArcs {
            base,
            gap,
            gap_count,
            features: features.to_vec(),
            arcs,
            locations,
        })
    }

    /// The features in layout order.
    pub fn features(&self) -> &[FeatureRef] {
        &self.features
    }

    /// Iterate over each feature with its arc, in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (&FeatureRef, Arc)> + '_ {
        self.features
            .iter()
            .filter_map(|f| self.arcs.get(&FeatureKey::of(f.as_ref())).map(|arc| (f, *arc)))
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn gap(&self) -> Angle {
        self.gap
    }

    /// The number of gaps reserved by the layout.
    pub fn gap_count(&self) -> usize {
        self.gap_count
    }

    fn project(location: &dyn Feature, loc_arc: Arc, feature: &dyn Feature) -> Result<Arc, RingError> {
        if feature.start() < location.start() || feature.end() > location.end() || feature.end() < feature.start() {
            return Err(RingError::InvalidRange(format!(
                "feature '{}' [{}, {}) lies outside location '{}' [{}, {})",
                feature.name(),
                feature.start(),
                feature.end(),
                location.name(),
                location.start(),
                location.end()
            )));
        }

        let loc_len = location.len();
        if loc_len == 0 {
            return Ok(Arc::new(loc_arc.theta, Angle::ZERO));
        }

        let offset = match global_orientation(location) {
            Orientation::Reverse => location.end() - feature.end(),
            _ => feature.start() - location.start(),
        };
        let loc_len = loc_len as f64;
        Ok(Arc::new(
            loc_arc.theta + loc_arc.phi * (offset as f64 / loc_len),
            loc_arc.phi * (feature.len() as f64 / loc_len),
        ))
    }
}

impl Arcer for GappedArcs {
    fn arc(&self) -> Arc {
        self.base
    }

    fn arc_ofer(&self) -> Option<SharedArcOfer> {
        Some(std::sync::Arc::new(self.clone()))
    }
}

impl ArcOfer for GappedArcs {
    fn arc_of(&self, location: Option<&dyn Feature>, feature: Option<&dyn Feature>) -> Result<Arc, RingError> {
        if let Some(f) = feature {
            if let Some(arc) = self.arcs.get(&FeatureKey::of(f)) {
                return Ok(*arc);
            }
        }

        let Some(loc) = location.or_else(|| feature.and_then(|f| f.location()))
        else {
            return Err(RingError::NotFound(match feature {
                Some(f) => format!("feature '{}' has no location", f.name()),
                None => "no location or feature given".to_string(),
            }));
        };

        let key = FeatureKey::of(loc);
        if let Some(loc_arc) = self.arcs.get(&key) {
            return match feature {
                Some(f) => Self::project(loc, *loc_arc, f),
                None => Ok(*loc_arc),
            };
        }

        if feature.is_none() {
            if let Some(arc) = self.locations.get(&key) {
                return Ok(*arc);
            }
        }

        // A nested location is placed through its own parent chain first.
        if loc.location().is_some() {
            let loc_arc = self.arc_of(loc.location(), Some(loc))?;
            log::trace!("GappedArcs::arc_of(): nested location '{}' -> {}", loc.name(), loc_arc);
            return match feature {
                Some(f) => Self::project(loc, loc_arc, f),
                None => Ok(loc_arc),
            };
        }

        Err(RingError::NotFound(format!("location '{}' is not part of the layout", loc.name())))
    }
}
