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

    demos/ringviz/src/args.rs

    Argument parsers for ringviz.
*/

use std::path::PathBuf;

use bpaf::{construct, long, short, OptionParser, Parser};
use ringplot::types::VizColor;

#[derive(Debug, Clone)]
pub(crate) struct Out {
    pub(crate) config: PathBuf,
    pub(crate) out_svg: Option<PathBuf>,
    pub(crate) out_png: Option<PathBuf>,
    pub(crate) size: u32,
    pub(crate) background: Option<VizColor>,
}

/// Set up bpaf argument parsing.
pub(crate) fn opts() -> OptionParser<Out> {
    let config = short('c')
        .long("config")
        .help("Filename of the TOML plot description to read")
        .argument::<PathBuf>("CONFIG_FILE");

    let out_svg = long("svg")
        .help("Filename of SVG image to write")
        .argument::<PathBuf>("OUTPUT_SVG")
        .optional();

    let out_png = long("png")
        .help("Filename of PNG image to write")
        .argument::<PathBuf>("OUTPUT_PNG")
        .optional();

    let size = short('s')
        .long("size")
        .help("Width and height of the output image. Default is 512")
        .argument::<u32>("SIZE")
        .fallback(512);

    let background = long("bg")
        .help("Background color as #RRGGBB, #RRGGBBAA or R,G,B,A. Default is transparent")
        .argument::<String>("COLOR")
        .parse(|input| parse_color(&input))
        .optional();

    construct!(Out {
        config,
        out_svg,
        out_png,
        size,
        background,
    })
    .guard(|out| out.out_svg.is_some() || out.out_png.is_some(), "Specify --svg and/or --png")
    .guard(|out| out.size > 0, "Image size must be greater than zero")
    .to_options()
    .descr("ringviz: render a ring plot described by a TOML file")
}

/// Parse a color from either a hex string (`#RRGGBBAA` or `#RRGGBB`) or an RGBA string (`R,G,B,A`).
pub(crate) fn parse_color(input: &str) -> Result<VizColor, String> {
    if let Some(hex) = input.strip_prefix('#') {
        // Parse hex color: #RRGGBBAA or #RRGGBB
        if !hex.is_ascii() {
            return Err("Invalid hex color".to_string());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| "Invalid hex color".to_string());
        match hex.len() {
            6 => Ok(VizColor::from_rgba8(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Ok(VizColor::from_rgba8(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err("Hex color must be in the format #RRGGBB or #RRGGBBAA".to_string()),
        }
    }
    else {
        // Parse RGBA color: R,G,B,A
        let parts: Vec<&str> = input.split(',').collect();
        if parts.len() != 4 {
            return Err("RGBA color must be in the format R,G,B,A".to_string());
        }
        let mut rgba = [0u8; 4];
        for (channel, part) in rgba.iter_mut().zip(parts) {
            *channel = part.trim().parse::<u8>().map_err(|_| "Invalid RGBA color component")?;
        }
        Ok(VizColor::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_parse() {
        assert_eq!(parse_color("#FF8000"), Ok(VizColor::from_rgba8(255, 128, 0, 255)));
        assert_eq!(parse_color("#FF800080"), Ok(VizColor::from_rgba8(255, 128, 0, 128)));
        assert_eq!(parse_color("1, 2, 3, 4"), Ok(VizColor::from_rgba8(1, 2, 3, 4)));
        assert!(parse_color("#FFF").is_err());
        assert!(parse_color("1,2,3").is_err());
        assert!(parse_color("1,2,3,256").is_err());
    }
}
