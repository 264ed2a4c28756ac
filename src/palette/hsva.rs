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
//! # HSVA colors and generated palettes
//! Colors in the hue, saturation, value and alpha space, and palettes generated by sweeping
//! through it. The generators reproduce the `rainbow`, `heat.colors` and `cm.colors` palettes of
//! R's grDevices package.
//!
//! All components are in `[0, 1]`. Hue wraps, so `1.0` is the same hue as `0.0`.

use crate::types::VizColor;

pub const RED: f64 = 0.0;
pub const YELLOW: f64 = 1.0 / 6.0;
pub const GREEN: f64 = 1.0 / 3.0;
pub const CYAN: f64 = 1.0 / 2.0;
pub const BLUE: f64 = 2.0 / 3.0;
pub const MAGENTA: f64 = 5.0 / 6.0;

/// A color in HSVA space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

impl Hsva {
    pub fn new(h: f64, s: f64, v: f64, a: f64) -> Hsva {
        Hsva { h, s, v, a }
    }

    /// Return the non-premultiplied red, green and blue components in `[0, 1]`.
    pub fn rgb(&self) -> (f64, f64, f64) {
        let h = self.h.rem_euclid(1.0) * 6.0;
        let i = h.floor();
        let f = h - i;
        let (s, v) = (self.s, self.v);

        let x = v * (1.0 - s);
        let y = v * (1.0 - s * f);
        let z = v * (1.0 - s * (1.0 - f));

        match i as u32 % 6 {
            0 => (v, z, x),
            1 => (y, v, x),
            2 => (x, v, z),
            3 => (x, y, v),
            4 => (z, x, v),
            _ => (v, x, y),
        }
    }
}

/// Quantize a component through 16 bits, truncating, so that conversions match those of 16-bit
/// color pipelines exactly.
#[inline]
fn channel(c: f64) -> u8 {
    ((65535.0 * c.clamp(0.0, 1.0)).floor() as u32 >> 8) as u8
}

impl From<Hsva> for VizColor {
    fn from(hsva: Hsva) -> VizColor {
        let (r, g, b) = hsva.rgb();
        VizColor::from_rgba8(channel(r), channel(g), channel(b), channel(hsva.a))
    }
}

impl From<VizColor> for Hsva {
    fn from(color: VizColor) -> Hsva {
        let r = color.r as f64 / 255.0;
        let g = color.g as f64 / 255.0;
        let b = color.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max > 0.0 { delta / max } else { 0.0 };
        let mut h = if delta == 0.0 {
            0.0
        }
        else if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        }
        else if max == g {
            (b - r) / delta + 2.0
        }
        else {
            (r - g) / delta + 4.0
        };
        h /= 6.0;
        if h >= 1.0 {
            h -= 1.0;
        }

        Hsva {
            h,
            s,
            v: max,
            a: color.a as f64 / 255.0,
        }
    }
}

/// Return `len` evenly spaced values from `from` to `to` inclusive.
fn seq(from: f64, to: f64, len: usize) -> impl Iterator<Item = f64> {
    let step = if len > 1 { (to - from) / (len - 1) as f64 } else { 0.0 };
    (0..len).map(move |i| from + step * i as f64)
}

/// Return `colors` colors of evenly spaced hues from `start` to `end`, at the given saturation,
/// value and alpha.
pub fn rainbow(colors: usize, start: f64, end: f64, sat: f64, val: f64, alpha: f64) -> Vec<VizColor> {
    let step = if colors > 1 {
        (end - start).abs() / (colors - 1) as f64
    }
    else {
        0.0
    };
    (0..colors)
        .map(|i| Hsva::new(start + step * i as f64, sat, val, alpha).into())
        .collect()
}

/// Return a palette running from red through yellow to pale yellow.
pub fn heat(colors: usize, alpha: f64) -> Vec<VizColor> {
    let j = colors / 4;
    let i = colors - j;

    let mut palette = rainbow(i, RED, YELLOW, 1.0, 1.0, alpha);
    if j > 0 {
        let half = 1.0 / (2.0 * j as f64);
        palette.extend(seq(1.0 - half, half, j).map(|s| VizColor::from(Hsva::new(YELLOW, s, 1.0, alpha))));
    }
    palette
}

/// Return a diverging palette from the `start` hue, through white, to the `end` hue.
pub fn radial(colors: usize, start: f64, end: f64, alpha: f64) -> Vec<VizColor> {
    if colors == 0 {
        return Vec::new();
    }
    let even = usize::from(colors % 2 == 0);
    let k = colors / 2;
    let l1 = k + 1 - even;
    let l2 = colors - k + even;

    let low = if even == 1 { 0.5 / k as f64 } else { 0.0 };
    let mut palette: Vec<VizColor> = seq(0.5, low, l1)
        .map(|s| Hsva::new(start, s, 1.0, alpha).into())
        .collect();
    palette.extend(
        seq(0.0, 0.5, l2)
            .skip(1)
            .map(|s| VizColor::from(Hsva::new(end, s, 1.0, alpha))),
    );
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(colors: &[VizColor]) -> Vec<String> {
        colors.iter().map(|c| format!("{:02x}{:02x}{:02x}", c.r, c.g, c.b)).collect()
    }

    #[test]
    fn rainbow_matches_reference() {
        assert_eq!(
            hex(&rainbow(10, 0.0, 1.0, 1.0, 1.0, 1.0)),
            vec![
                "ff0000", "ffaa00", "aaff00", "00ff00", "00ffaa", "00aaff", "0000ff", "aa00ff", "ff00aa", "ff0000"
            ]
        );
        assert_eq!(rainbow(1, BLUE, RED, 1.0, 1.0, 1.0), vec![VizColor::BLUE]);
        assert!(rainbow(0, RED, BLUE, 1.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn heat_matches_reference() {
        assert_eq!(
            hex(&heat(10, 1.0)),
            vec![
                "ff0000", "ff2400", "ff4900", "ff6d00", "ff9200", "ffb600", "ffdb00", "ffff00", "ffff3f", "ffffbf"
            ]
        );
    }

    #[test]
    fn radial_matches_reference() {
        assert_eq!(
            hex(&radial(10, CYAN, MAGENTA, 1.0)),
            vec![
                "7fffff", "99ffff", "b3ffff", "ccffff", "e6ffff", "ffe6ff", "ffccff", "ffb3ff", "ff99ff", "ff7fff"
            ]
        );
        assert_eq!(radial(5, CYAN, MAGENTA, 1.0).len(), 5);
        assert_eq!(hex(&radial(3, CYAN, MAGENTA, 1.0))[1], "ffffff");
    }

    #[test]
    fn alpha_is_kept_separate() {
        let c = VizColor::from(Hsva::new(GREEN, 1.0, 1.0, 0.5));
        assert_eq!(c, VizColor::from_rgba8(0, 255, 0, 127));
    }

    #[test]
    fn color_survives_hsva() {
        for &(r, g, b) in &[(0u8, 0u8, 0u8), (255, 255, 255), (12, 200, 99), (250, 5, 130), (40, 40, 41), (7, 0, 255)] {
            let c = VizColor::from_rgba8(r, g, b, 255);
            let hsva = Hsva::from(c);
            assert!((0.0..1.0).contains(&hsva.h), "{:?}", hsva);
            assert_eq!(VizColor::from(hsva), c);
        }
    }
}
