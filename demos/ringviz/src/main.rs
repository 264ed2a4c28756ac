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

    demos/ringviz/src/main.rs

    A simple example of how to use ringplot to lay out a ring of blocks and
    render it to SVG and PNG.
*/
mod args;
mod config;
mod scene;

use std::path::Path;

use anyhow::Error;
use ringplot::types::VizColor;

use crate::{
    args::{opts, Out},
    config::load_plot_config,
    scene::Scene,
};

fn main() {
    env_logger::init();

    // Get the command line options.
    let opts = opts().run();

    if let Err(e) = run(&opts) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(opts: &Out) -> Result<(), Error> {
    println!("Reading plot description: {}", opts.config.display());
    let config = load_plot_config(&opts.config)?;
    let scene = Scene::build(&config, opts.size as f64)?;

    if let Some(path) = &opts.out_svg {
        render_svg(&scene, opts.size, opts.background, path)?;
        println!("Saved SVG to {}", path.display());
    }
    if let Some(path) = &opts.out_png {
        render_png(&scene, opts.size, opts.background, path)?;
        println!("Saved PNG to {}", path.display());
    }
    Ok(())
}

#[cfg(feature = "use_svg")]
fn render_svg(scene: &Scene, size: u32, background: Option<VizColor>, path: &Path) -> Result<(), Error> {
    use ringplot_svg::SvgCanvas;

    let mut canvas = SvgCanvas::new(size as f64, size as f64);
    if let Some(color) = background {
        canvas = canvas.with_background(color);
    }
    scene.draw(&mut canvas);
    let document: svg::Document = canvas.finish();
    svg::save(path, &document)?;
    Ok(())
}

#[cfg(not(feature = "use_svg"))]
fn render_svg(_scene: &Scene, _size: u32, _background: Option<VizColor>, _path: &Path) -> Result<(), Error> {
    anyhow::bail!("SVG output requires the 'use_svg' feature")
}

#[cfg(feature = "use_tiny_skia")]
fn render_png(scene: &Scene, size: u32, background: Option<VizColor>, path: &Path) -> Result<(), Error> {
    use ringplot_tiny_skia::SkiaCanvas;

    let mut canvas = SkiaCanvas::new(size, size).ok_or_else(|| anyhow::anyhow!("invalid image size {}", size))?;
    if let Some(color) = background {
        canvas = canvas.with_background(color);
    }
    scene.draw(&mut canvas);
    let pixmap: tiny_skia::Pixmap = canvas.into_pixmap();
    pixmap.save_png(path)?;
    Ok(())
}

#[cfg(not(feature = "use_tiny_skia"))]
fn render_png(_scene: &Scene, _size: u32, _background: Option<VizColor>, _path: &Path) -> Result<(), Error> {
    anyhow::bail!("PNG output requires the 'use_tiny_skia' feature")
}
