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
//! # Blocks
//! [Blocks] renders each feature of a set as an annular sector between an inner and outer radius,
//! at the span the shared layout assigns it.

use crate::{
    arc::{Arc, ArcOfer, Arcer, SharedArcOfer},
    canvas::{Canvas, LineStyle, RingPath},
    feature::{Feature, FeatureRef},
    gapped_arcs::GappedArcs,
    rings::{check_radii, radial_box, sector_path, Ring},
    types::{VizColor, VizPoint2d, VizRect},
    Angle,
    RingError,
};

/// Radial blocks, one per feature.
///
/// A feature's own [Feature::fill_color] and [Feature::line_style] take precedence over
/// [Blocks::color] and [Blocks::line_style].
#[derive(Clone)]
pub struct Blocks {
    /// The features to render.
    pub set: Vec<FeatureRef>,
    /// The layout the blocks are placed by.
    pub base: SharedArcOfer,
    /// Fill color for features that do not supply their own. `None` disables filling.
    pub color: Option<VizColor>,
    /// Outline style for features that do not supply their own.
    pub line_style: LineStyle,
    pub inner: f64,
    pub outer: f64,
    /// Position used by [Ring::plot].
    pub x: f64,
    pub y: f64,
}

impl Blocks {
    /// Create a [Blocks] over an existing layout, checking that every feature can be rendered.
    pub fn new(features: Vec<FeatureRef>, base: SharedArcOfer, inner: f64, outer: f64) -> Result<Blocks, RingError> {
        check_radii(inner, outer)?;
        for f in &features {
            check_chain(f.as_ref())?;
            base.arc_of(f.location(), Some(f.as_ref())).map_err(|e| {
                log::debug!("Blocks::new(): feature '{}' has no arc: {}", f.name(), e);
                e
            })?;
        }
        log::debug!("Blocks::new(): {} blocks from {} to {}", features.len(), inner, outer);
        Ok(Blocks {
            set: features,
            base,
            color: None,
            line_style: LineStyle::default(),
            inner,
            outer,
            x: 0.0,
            y: 0.0,
        })
    }

    /// Create a [Blocks] over `base`. If `base` already provides a layout that can place every
    /// feature it is reused, otherwise a new [GappedArcs] is built with the given `gap`.
    pub fn new_gapped(
        features: Vec<FeatureRef>,
        base: &dyn Arcer,
        inner: f64,
        outer: f64,
        gap: Angle,
    ) -> Result<Blocks, RingError> {
        check_radii(inner, outer)?;
        let layout = match base.arc_ofer() {
            Some(existing) if features.iter().all(|f| existing.arc_of(f.location(), Some(f.as_ref())).is_ok()) => {
                log::trace!("Blocks::new_gapped(): reusing existing layout");
                existing
            }
            _ => {
                let gapped: SharedArcOfer = std::sync::Arc::new(GappedArcs::new(base, &features, gap)?);
                gapped
            }
        };
        Blocks::new(features, layout, inner, outer)
    }

    pub fn with_color(mut self, color: VizColor) -> Blocks {
        self.color = Some(color);
        self
    }

    pub fn with_line_style(mut self, style: LineStyle) -> Blocks {
        self.line_style = style;
        self
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Blocks {
        self.x = x;
        self.y = y;
        self
    }
}

/// Check that a feature and every link of its location chain lie within their parents.
fn check_chain(feature: &dyn Feature) -> Result<(), RingError> {
    let mut link = feature;
    loop {
        if link.end() < link.start() {
            return Err(RingError::InvalidRange(format!(
                "feature '{}' is inverted: [{}, {})",
                link.name(),
                link.start(),
                link.end()
            )));
        }
        let Some(parent) = link.location()
        else {
            return Ok(());
        };
        if link.start() < parent.start() || link.end() > parent.end() {
            return Err(RingError::InvalidRange(format!(
                "feature '{}' [{}, {}) is out of range of '{}' [{}, {})",
                link.name(),
                link.start(),
                link.end(),
                parent.name(),
                parent.start(),
                parent.end()
            )));
        }
        link = parent;
    }
}

impl Arcer for Blocks {
    fn arc(&self) -> Arc {
        self.base.arc()
    }

    fn arc_ofer(&self) -> Option<SharedArcOfer> {
        Some(self.base.clone())
    }
}

impl ArcOfer for Blocks {
    fn arc_of(&self, location: Option<&dyn Feature>, feature: Option<&dyn Feature>) -> Result<Arc, RingError> {
        self.base.arc_of(location, feature)
    }
}

impl Ring for Blocks {
    fn draw_at(&self, canvas: &mut dyn Canvas, center: VizPoint2d<f64>) {
        let mut path = RingPath::new();
        for f in &self.set {
            let arc = self
                .base
                .arc_of(f.location(), Some(f.as_ref()))
                .unwrap_or_else(|e| panic!("Blocks::draw_at(): no arc for feature '{}': {}", f.name(), e));

            sector_path(&mut path, center, arc, self.inner, self.outer, false);

            if let Some(color) = f.fill_color().or(self.color) {
                canvas.set_color(color);
                canvas.fill(&path);
            }

            let style = f.line_style().unwrap_or_else(|| self.line_style.clone());
            if style.is_visible() {
                canvas.set_line_style(&style);
                canvas.stroke(&path);
            }
        }
    }

    fn xy(&self) -> VizPoint2d<f64> {
        VizPoint2d::new(self.x, self.y)
    }

    fn glyph_box(&self) -> VizRect<f64> {
        radial_box(self.outer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BasicFeature;

    #[test]
    fn chain_checks_every_link() {
        let chr = BasicFeature::new("chr", 0, 100).into_ref();
        let gene = BasicFeature::new("gene", 90, 120).with_location(chr.clone()).into_ref();
        let exon = BasicFeature::new("exon", 95, 100).with_location(gene.clone());
        assert!(check_chain(&exon).is_err());

        let ok_gene = BasicFeature::new("gene", 10, 20).with_location(chr.clone()).into_ref();
        let ok_exon = BasicFeature::new("exon", 12, 14).with_location(ok_gene);
        assert!(check_chain(&ok_exon).is_ok());
        assert!(check_chain(&BasicFeature::new("inverted", 5, 1)).is_err());
    }

    #[test]
    fn gapped_reuses_blocks_layout() {
        let fs: Vec<FeatureRef> = (0..4).map(|i| BasicFeature::new(format!("b{}", i), 0, 10).into_ref()).collect();
        let first = Blocks::new_gapped(fs.clone(), &Arc::complete(Angle::ZERO), 10.0, 20.0, Angle(0.01)).unwrap();
        let second = Blocks::new_gapped(fs.clone(), &first, 25.0, 30.0, Angle(0.5)).unwrap();
        assert!(std::sync::Arc::ptr_eq(&first.base, &second.base));
        for f in &fs {
            assert_eq!(
                first.arc_of(None, Some(f.as_ref())).unwrap(),
                second.arc_of(None, Some(f.as_ref())).unwrap()
            );
        }
    }

    #[test]
    fn gapped_builds_new_layout_for_unknown_features() {
        let fs: Vec<FeatureRef> = (0..2).map(|i| BasicFeature::new(format!("b{}", i), 0, 10).into_ref()).collect();
        let first = Blocks::new_gapped(fs, &Arc::complete(Angle::ZERO), 10.0, 20.0, Angle(0.01)).unwrap();
        let others: Vec<FeatureRef> = vec![BasicFeature::new("other", 0, 5).into_ref()];
        let second = Blocks::new_gapped(others.clone(), &first, 25.0, 30.0, Angle(0.0)).unwrap();
        assert!(!std::sync::Arc::ptr_eq(&first.base, &second.base));
        let arc = second.arc_of(None, Some(others[0].as_ref())).unwrap();
        assert!(arc.phi.approx_eq(Angle::COMPLETE, 1e-9));
    }

    #[test]
    fn glyph_box_is_outer_square() {
        let fs = vec![BasicFeature::new("b", 0, 10).into_ref()];
        let blocks = Blocks::new_gapped(fs, &Arc::complete(Angle::ZERO), 10.0, 20.0, Angle(0.0))
            .unwrap()
            .with_position(3.0, 4.0);
        assert_eq!(blocks.glyph_box().to_tuple(), (-20.0, -20.0, 20.0, 20.0));
        assert_eq!(blocks.xy(), VizPoint2d::new(3.0, 4.0));
    }
}
