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

    demos/ringviz/src/config.rs

    TOML plot description for ringviz.
*/
use std::{fs, path::Path};

use anyhow::Error;
use ringplot::{canvas::LineStyle, palette::PaletteKind, types::VizColor};
use serde::Deserialize;

// Deserialize colors as either RGBA tuple or u32
#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ConfigColor {
    Rgba(u8, u8, u8, u8),
    U32(u32),
}

// Conversion for ConfigColor to VizColor
impl ConfigColor {
    pub(crate) fn to_viz_color(self) -> VizColor {
        match self {
            ConfigColor::Rgba(r, g, b, a) => VizColor::from_rgba8(r, g, b, a),
            ConfigColor::U32(val) => {
                let r = ((val >> 24) & 0xFF) as u8;
                let g = ((val >> 16) & 0xFF) as u8;
                let b = ((val >> 8) & 0xFF) as u8;
                let a = (val & 0xFF) as u8;
                VizColor::from_rgba8(r, g, b, a)
            }
        }
    }
}

fn default_width() -> f64 {
    1.0
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct OutlineConfig {
    pub(crate) color: ConfigColor,
    #[serde(default = "default_width")]
    pub(crate) width: f64,
    #[serde(default)]
    pub(crate) dashes: Vec<f64>,
}

impl OutlineConfig {
    pub(crate) fn to_line_style(&self) -> LineStyle {
        LineStyle::solid(self.color.to_viz_color(), self.width).with_dashes(&self.dashes, 0.0)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct BlockConfig {
    pub(crate) name: String,
    pub(crate) length: i64,
    pub(crate) color: Option<ConfigColor>,
}

/// Colors for blocks that do not specify their own. `name` is a ColorBrewer scheme, or one of
/// `rainbow` and `heat`.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct PaletteConfig {
    #[serde(default)]
    pub(crate) kind: PaletteKind,
    pub(crate) name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct HighlightConfig {
    pub(crate) start_degrees: f64,
    pub(crate) extent_degrees: f64,
    pub(crate) inner: f64,
    pub(crate) outer: f64,
    pub(crate) color: Option<ConfigColor>,
    pub(crate) outline: Option<OutlineConfig>,
}

fn default_tick_length() -> f64 {
    4.0
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct AxisConfig {
    pub(crate) angle_degrees: f64,
    pub(crate) inner: f64,
    pub(crate) outer: f64,
    pub(crate) min: f64,
    pub(crate) max: f64,
    #[serde(default)]
    pub(crate) label: String,
    #[serde(default)]
    pub(crate) grid: bool,
    #[serde(default = "default_tick_length")]
    pub(crate) tick_length: f64,
}

// Complete plot description
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct PlotConfig {
    /// Gap between adjacent blocks.
    #[serde(default)]
    pub(crate) gap_degrees: f64,
    /// Angle of the start of the first block, counter-clockwise from 3 o'clock.
    #[serde(default)]
    pub(crate) start_degrees: f64,
    #[serde(default)]
    pub(crate) clockwise: bool,
    pub(crate) inner: f64,
    pub(crate) outer: f64,
    pub(crate) outline: Option<OutlineConfig>,
    pub(crate) palette: Option<PaletteConfig>,
    pub(crate) blocks: Vec<BlockConfig>,
    pub(crate) highlight: Option<HighlightConfig>,
    pub(crate) axis: Option<AxisConfig>,
}

pub(crate) fn parse_plot_config(config_str: &str) -> Result<PlotConfig, Error> {
    let config: PlotConfig = toml::from_str(config_str)?;
    log::debug!(
        "parse_plot_config(): {} blocks, gap {} degrees",
        config.blocks.len(),
        config.gap_degrees
    );
    Ok(config)
}

pub(crate) fn load_plot_config(path: impl AsRef<Path>) -> Result<PlotConfig, Error> {
    let config_str = fs::read_to_string(path)?;
    parse_plot_config(&config_str)
}
