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

    demos/ringviz/src/scene.rs

    Build ring primitives from a plot description and draw them to a canvas.
*/

use anyhow::{ensure, Error};
use ringplot::{
    palette::{brewer::get_palette, hsva},
    prelude::*,
    rings::{AxisLabel, TickConfig},
};

use crate::config::{AxisConfig, PaletteConfig, PlotConfig};

pub(crate) struct AxisScene {
    axis: Axis,
    // One feature spanning each block, so the grid follows the blocks.
    tracks: Vec<FeatureRef>,
    inner: f64,
    outer: f64,
    min: f64,
    max: f64,
}

pub(crate) struct Scene {
    center: VizPoint2d<f64>,
    blocks: Blocks,
    highlight: Option<Highlight>,
    axis: Option<AxisScene>,
}

/// Resolve palette colors for `count` blocks. Brewer schemes are requested at the largest size
/// available up to `count` and repeated.
fn palette_colors(palette: &PaletteConfig, count: usize) -> Result<Vec<VizColor>, Error> {
    let colors = match palette.name.as_str() {
        "rainbow" => hsva::rainbow(count, hsva::RED, hsva::MAGENTA, 1.0, 1.0, 1.0),
        "heat" => hsva::heat(count, 1.0),
        name => {
            let scheme = (3..=count.max(3))
                .rev()
                .find_map(|n| get_palette(palette.kind, name, n).ok());
            match scheme {
                Some(scheme) => scheme.colors().to_vec(),
                None => get_palette(palette.kind, name, 3)?.colors().to_vec(),
            }
        }
    };
    log::debug!("palette_colors(): {} colors from '{}'", colors.len(), palette.name);
    Ok(colors)
}

fn build_axis(config: &AxisConfig, features: &[FeatureRef]) -> AxisScene {
    let black = LineStyle::solid(VizColor::BLACK, 1.0);
    let axis = Axis {
        label: AxisLabel {
            text: config.label.clone(),
            ..Default::default()
        },
        line_style: black.clone(),
        tick: TickConfig {
            line_style: black,
            length: config.tick_length,
            label: TextStyle::new("sans-serif", 10.0).with_color(VizColor::BLACK),
            ..Default::default()
        },
        grid: if config.grid {
            LineStyle::solid(VizColor::from_rgba8(0, 0, 0, 48), 0.5)
        }
        else {
            LineStyle::default()
        },
        ..Axis::new(Angle::from_degrees(config.angle_degrees))
    };

    let tracks = features
        .iter()
        .map(|f| {
            BasicFeature::new(format!("{}-track", f.name()), f.start(), f.end())
                .with_location(f.clone())
                .into_ref()
        })
        .collect();

    AxisScene {
        axis,
        tracks,
        inner: config.inner,
        outer: config.outer,
        min: config.min,
        max: config.max,
    }
}

impl Scene {
    pub(crate) fn build(config: &PlotConfig, size: f64) -> Result<Scene, Error> {
        ensure!(!config.blocks.is_empty(), "the plot has no blocks");
        let center = VizPoint2d::new(size / 2.0, size / 2.0);

        let palette = match &config.palette {
            Some(palette) => palette_colors(palette, config.blocks.len())?,
            None => Vec::new(),
        };

        let features: Vec<FeatureRef> = config
            .blocks
            .iter()
            .enumerate()
            .map(|(i, block)| {
                let feature = BasicFeature::new(block.name.clone(), 0, block.length);
                let color = block
                    .color
                    .map(|c| c.to_viz_color())
                    .or_else(|| (!palette.is_empty()).then(|| palette[i % palette.len()]));
                let feature = match color {
                    Some(color) => feature.with_fill_color(color),
                    None => feature,
                };
                feature.into_ref()
            })
            .collect();

        let direction = if config.clockwise {
            TurningDirection::Clockwise
        }
        else {
            TurningDirection::CounterClockwise
        };
        let base = Arc::new(Angle::from_degrees(config.start_degrees), direction * Angle::COMPLETE);

        let mut blocks = Blocks::new_gapped(
            features.clone(),
            &base,
            config.inner,
            config.outer,
            Angle::from_degrees(config.gap_degrees),
        )?
        .with_color(VizColor::from_rgba8(0x80, 0x80, 0x80, 0xFF))
        .with_position(center.x, center.y);
        if let Some(outline) = &config.outline {
            blocks = blocks.with_line_style(outline.to_line_style());
        }

        let highlight = match &config.highlight {
            Some(h) => {
                let span = Arc::new(Angle::from_degrees(h.start_degrees), Angle::from_degrees(h.extent_degrees));
                let mut highlight = Highlight::new(h.color.map(|c| c.to_viz_color()), span, h.inner, h.outer)?
                    .with_position(center.x, center.y);
                if let Some(outline) = &h.outline {
                    highlight = highlight.with_line_style(outline.to_line_style());
                }
                Some(highlight)
            }
            None => None,
        };

        let axis = config.axis.as_ref().map(|a| build_axis(a, &features));

        Ok(Scene {
            center,
            blocks,
            highlight,
            axis,
        })
    }

    pub(crate) fn draw(&self, canvas: &mut dyn Canvas) {
        if let Some(highlight) = &self.highlight {
            highlight.plot(canvas);
        }
        self.blocks.plot(canvas);
        if let Some(a) = &self.axis {
            a.axis.draw_at(
                canvas,
                self.center,
                &a.tracks,
                &self.blocks,
                a.inner,
                a.outer,
                a.min,
                a.max,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_plot_config;
    use ringplot::palette::PaletteKind;

    const PLOT: &str = r#"
        gap_degrees = 2.0
        start_degrees = 90.0
        clockwise = true
        inner = 100.0
        outer = 120.0
        palette = { kind = "Qualitative", name = "Dark2" }

        [[blocks]]
        name = "chr1"
        length = 300

        [[blocks]]
        name = "chr2"
        length = 100
        color = [255, 0, 0, 255]

        [highlight]
        start_degrees = 0.0
        extent_degrees = 360.0
        inner = 125.0
        outer = 130.0
        color = [0, 0, 255, 64]
        "#;

    #[test]
    fn blocks_run_clockwise_from_the_top() {
        let config = parse_plot_config(PLOT).unwrap();
        let scene = Scene::build(&config, 300.0).unwrap();
        assert_eq!(scene.center, VizPoint2d::new(150.0, 150.0));

        let first = scene.blocks.arc_of(None, Some(scene.blocks.set[0].as_ref())).unwrap();
        assert!(first.theta.approx_eq(Angle::QUARTER, 1e-12));
        assert!(first.phi < Angle::ZERO);

        assert_eq!(scene.blocks.set[1].fill_color(), Some(VizColor::RED));
        assert!(scene.blocks.set[0].fill_color().is_some());
        assert!(scene.highlight.is_some());
    }

    #[test]
    fn empty_plot_is_rejected() {
        let config = parse_plot_config("inner = 1.0\nouter = 2.0\nblocks = []").unwrap();
        assert!(Scene::build(&config, 100.0).is_err());
    }

    #[test]
    fn palettes_repeat() {
        let palette = PaletteConfig {
            kind: PaletteKind::Qualitative,
            name: "Set1".to_string(),
        };
        let colors = palette_colors(&palette, 40).unwrap();
        assert!(colors.len() >= 3);

        let rainbow = PaletteConfig {
            kind: PaletteKind::Any,
            name: "rainbow".to_string(),
        };
        assert_eq!(palette_colors(&rainbow, 7).unwrap().len(), 7);

        let unknown = PaletteConfig {
            kind: PaletteKind::Any,
            name: "NoSuchScheme".to_string(),
        };
        assert!(palette_colors(&unknown, 5).is_err());
    }
}
