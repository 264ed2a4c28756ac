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
//! # RingPlot
//! `ringplot` lays out linear genomic features around one or more concentric rings, in the style
//! of a Circos plot, and renders them through an abstract [Canvas].
//!
//! The general principle is that every ring is drawn about the origin, where angle 0 in radians
//! lies on the positive x axis and angles increase counter-clockwise. A feature's linear
//! coordinates are mapped onto an [Arc] within a base span, with a fixed angular gap between
//! neighbouring features. The mapping is computed once by [GappedArcs] and shared between every
//! primitive that draws against it, so blocks, grid lines and highlights always agree on where a
//! feature lies.
//!
//! ## Ring primitives
//!
//! - [Blocks](rings::Blocks) draws one annular sector per feature.
//! - [Highlight](rings::Highlight) draws a single colored band over a fixed span.
//! - [Axis](rings::Axis) draws a radial scale with ticks, labels and concentric grid arcs.
//!
//! ## Helper crates
//!
//! - The `ringplot_svg` crate provides a [Canvas] that builds SVG documents.
//! - The `ringplot_tiny_skia` crate provides a [Canvas] that rasterizes into a `tiny_skia` pixmap.
//!
//! ## Examples
//! See the `ringviz` demo for a program that renders a ring plot described by a TOML file.

pub mod angle;
pub mod arc;
pub mod bezier;
pub mod canvas;
pub mod feature;
pub mod gapped_arcs;
pub mod palette;
pub mod prelude;
pub mod rings;
pub mod types;

use thiserror::Error;

pub use crate::{
    angle::{rectangular, Angle, TurningDirection},
    arc::{Arc, ArcOfer, Arcer, SharedArcOfer},
    canvas::{Canvas, LineStyle, PathComp, RingPath, TextStyle},
    feature::{global_orientation, BasicFeature, Feature, FeatureKey, FeatureRef, Orientation},
    gapped_arcs::GappedArcs,
};

type RingHashMap<K, V> = std::collections::HashMap<K, V>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RingError {
    #[error("A value was outside its permitted range: {0}")]
    InvalidRange(String),
    #[error("The requested item could not be found: {0}")]
    NotFound(String),
    #[error("The layout requires {required} radians of gaps but only {available} are available")]
    Overflow { required: f64, available: f64 },
    #[error("The operation is not supported for this type: {0}")]
    UnsupportedType(String),
}
