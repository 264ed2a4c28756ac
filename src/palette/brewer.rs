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
//! # ColorBrewer palettes
//! A selection of the ColorBrewer schemes by Cynthia Brewer (http://colorbrewer2.org), grouped
//! by the kind of data they suit:
//!
//! - Diverging schemes put equal emphasis on mid-range critical values and extremes at both ends
//!   of the data range.
//! - Qualitative schemes do not imply magnitude differences between legend classes, and hues are
//!   used to create the primary visual differences between classes.
//! - Sequential schemes suit ordered data that progress from low to high, with light colors for
//!   low values and dark colors for high values.
//!
//! Only `RdBu` and `PuOr` (diverging), `Set1` and `Dark2` (qualitative), and `Blues` and `Greens`
//! (sequential) are included. Any other scheme name is reported as [RingError::NotFound].

use strum::{EnumIter, IntoEnumIterator};

use crate::{types::VizColor, RingError};

/// The smallest number of colors any scheme provides.
pub const MIN_COLORS: usize = 3;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, strum::Display)]
pub enum PaletteKind {
    /// Search every kind of scheme.
    #[default]
    Any,
    Diverging,
    Qualitative,
    Sequential,
}

/// A palette of colors from a named scheme.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BrewerPalette {
    name: &'static str,
    kind: PaletteKind,
    colors: &'static [VizColor],
}

impl BrewerPalette {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The kind of scheme the palette was taken from. Never [PaletteKind::Any].
    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    pub fn colors(&self) -> &'static [VizColor] {
        self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Return the fractional index of the lightest (median) color of a diverging palette.
    pub fn critical_value(&self) -> Result<f64, RingError> {
        match self.kind {
            PaletteKind::Diverging => Ok((self.colors.len() + 1) as f64 / 2.0 - 1.0),
            kind => Err(RingError::UnsupportedType(format!(
                "{} palette '{}' has no critical value",
                kind, self.name
            ))),
        }
    }
}

/// How a scheme stores its sizes.
enum Swatches {
    /// One table per size, starting at [MIN_COLORS].
    Sized(&'static [&'static [VizColor]]),
    /// Every size is a prefix of the full list.
    Prefix(&'static [VizColor]),
}

struct Scheme {
    name: &'static str,
    kind: PaletteKind,
    swatches: Swatches,
}

impl Scheme {
    fn colors(&self, count: usize) -> Option<&'static [VizColor]> {
        if count < MIN_COLORS {
            return None;
        }
        match self.swatches {
            Swatches::Sized(tables) => tables.get(count - MIN_COLORS).copied(),
            Swatches::Prefix(all) => all.get(..count),
        }
    }
}

/// Return the palette `name` of the given kind with exactly `colors` colors.
pub fn get_palette(kind: PaletteKind, name: &str, colors: usize) -> Result<BrewerPalette, RingError> {
    if colors < MIN_COLORS {
        return Err(RingError::InvalidRange(format!(
            "number of colors must be {} or greater, got {}",
            MIN_COLORS, colors
        )));
    }

    let scheme = PaletteKind::iter()
        .filter(|k| *k != PaletteKind::Any && (kind == PaletteKind::Any || *k == kind))
        .flat_map(|k| SCHEMES.iter().filter(move |s| s.kind == k))
        .find(|s| s.name == name)
        .ok_or_else(|| RingError::NotFound(format!("{} palette '{}' not known", kind, name)))?;

    let swatch = scheme.colors(colors).ok_or_else(|| {
        RingError::NotFound(format!("palette '{}' does not support {} colors", name, colors))
    })?;

    log::trace!("get_palette(): {} {} x {}", scheme.kind, scheme.name, colors);
    Ok(BrewerPalette {
        name: scheme.name,
        kind: scheme.kind,
        colors: swatch,
    })
}

/// Return the names of the available schemes of a kind.
pub fn palette_names(kind: PaletteKind) -> Vec<&'static str> {
    SCHEMES
        .iter()
        .filter(|s| kind == PaletteKind::Any || s.kind == kind)
        .map(|s| s.name)
        .collect()
}

macro_rules! swatch {
    ($($rgb:literal),+ $(,)?) => {
        &[$(VizColor::from_rgb24($rgb)),+]
    };
}

static SCHEMES: [Scheme; 6] = [
    Scheme {
        name: "RdBu",
        kind: PaletteKind::Diverging,
        swatches: Swatches::Sized(RD_BU),
    },
    Scheme {
        name: "PuOr",
        kind: PaletteKind::Diverging,
        swatches: Swatches::Sized(PU_OR),
    },
    Scheme {
        name: "Set1",
        kind: PaletteKind::Qualitative,
        swatches: Swatches::Prefix(SET1),
    },
    Scheme {
        name: "Dark2",
        kind: PaletteKind::Qualitative,
        swatches: Swatches::Prefix(DARK2),
    },
    Scheme {
        name: "Blues",
        kind: PaletteKind::Sequential,
        swatches: Swatches::Sized(BLUES),
    },
    Scheme {
        name: "Greens",
        kind: PaletteKind::Sequential,
        swatches: Swatches::Sized(GREENS),
    },
];

#[rustfmt::skip]
const RD_BU: &[&[VizColor]] = &[
    swatch![0xef8a62, 0xf7f7f7, 0x67a9cf],
    swatch![0xca0020, 0xf4a582, 0x92c5de, 0x0571b0],
    swatch![0xca0020, 0xf4a582, 0xf7f7f7, 0x92c5de, 0x0571b0],
    swatch![0xb2182b, 0xef8a62, 0xfddbc7, 0xd1e5f0, 0x67a9cf, 0x2166ac],
    swatch![0xb2182b, 0xef8a62, 0xfddbc7, 0xf7f7f7, 0xd1e5f0, 0x67a9cf, 0x2166ac],
    swatch![0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xd1e5f0, 0x92c5de, 0x4393c3, 0x2166ac],
    swatch![0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xf7f7f7, 0xd1e5f0, 0x92c5de, 0x4393c3, 0x2166ac],
    swatch![0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xd1e5f0, 0x92c5de, 0x4393c3, 0x2166ac, 0x053061],
    swatch![0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xf7f7f7, 0xd1e5f0, 0x92c5de, 0x4393c3, 0x2166ac, 0x053061],
];

#[rustfmt::skip]
const PU_OR: &[&[VizColor]] = &[
    swatch![0xf1a340, 0xf7f7f7, 0x998ec3],
    swatch![0xe66101, 0xfdb863, 0xb2abd2, 0x5e3c99],
    swatch![0xe66101, 0xfdb863, 0xf7f7f7, 0xb2abd2, 0x5e3c99],
    swatch![0xb35806, 0xf1a340, 0xfee0b6, 0xd8daeb, 0x998ec3, 0x542788],
    swatch![0xb35806, 0xf1a340, 0xfee0b6, 0xf7f7f7, 0xd8daeb, 0x998ec3, 0x542788],
    swatch![0xb35806, 0xe08214, 0xfdb863, 0xfee0b6, 0xd8daeb, 0xb2abd2, 0x8073ac, 0x542788],
    swatch![0xb35806, 0xe08214, 0xfdb863, 0xfee0b6, 0xf7f7f7, 0xd8daeb, 0xb2abd2, 0x8073ac, 0x542788],
    swatch![0x7f3b08, 0xb35806, 0xe08214, 0xfdb863, 0xfee0b6, 0xd8daeb, 0xb2abd2, 0x8073ac, 0x542788, 0x2d004b],
    swatch![0x7f3b08, 0xb35806, 0xe08214, 0xfdb863, 0xfee0b6, 0xf7f7f7, 0xd8daeb, 0xb2abd2, 0x8073ac, 0x542788, 0x2d004b],
];

#[rustfmt::skip]
const SET1: &[VizColor] = swatch![
    0xe41a1c, 0x377eb8, 0x4daf4a, 0x984ea3, 0xff7f00, 0xffff33, 0xa65628, 0xf781bf, 0x999999,
];

#[rustfmt::skip]
const DARK2: &[VizColor] = swatch![
    0x1b9e77, 0xd95f02, 0x7570b3, 0xe7298a, 0x66a61e, 0xe6ab02, 0xa6761d, 0x666666,
];

#[rustfmt::skip]
const BLUES: &[&[VizColor]] = &[
    swatch![0xdeebf7, 0x9ecae1, 0x3182bd],
    swatch![0xeff3ff, 0xbdd7e7, 0x6baed6, 0x2171b5],
    swatch![0xeff3ff, 0xbdd7e7, 0x6baed6, 0x3182bd, 0x08519c],
    swatch![0xeff3ff, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x3182bd, 0x08519c],
    swatch![0xeff3ff, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x084594],
    swatch![0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x084594],
    swatch![0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x08519c, 0x08306b],
];

#[rustfmt::skip]
const GREENS: &[&[VizColor]] = &[
    swatch![0xe5f5e0, 0xa1d99b, 0x31a354],
    swatch![0xedf8e9, 0xbae4b3, 0x74c476, 0x238b45],
    swatch![0xedf8e9, 0xbae4b3, 0x74c476, 0x31a354, 0x006d2c],
    swatch![0xedf8e9, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x31a354, 0x006d2c],
    swatch![0xedf8e9, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x005a32],
    swatch![0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x005a32],
    swatch![0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x006d2c, 0x00441b],
];
