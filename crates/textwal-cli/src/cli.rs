//! CLI argument definitions using Clap v4
//!
//! `-h` is taken by `--height`, so clap's automatic help flag is disabled
//! and `--help` is re-added as an explicit long-only success action.

use clap::Parser;
use std::path::PathBuf;

use textwal_core::{CharAlign, Color, RenderOptions, TextAlign, DEFAULT_FONT_PATH};

/// textwal - render stdin text onto a solid-color canvas and save it as PNG
#[derive(Parser, Debug)]
#[command(name = "textwal")]
#[command(version, about, long_about = None, disable_help_flag = true)]
#[command(after_help = "Text is read from standard input up to end-of-stream; \
embedded newlines start new lines.\n\nExample:\n  \
echo 'hello world' | textwal -s 96 -A top-left -o hello.png")]
pub struct Cli {
    /// Font file path (.ttf, .otf)
    #[arg(short = 'f', long = "font", default_value = DEFAULT_FONT_PATH)]
    pub font: PathBuf,

    /// Output image path
    #[arg(short = 'o', long = "output", default_value = "output.png")]
    pub output: PathBuf,

    /// Background color in hex (e.g. '#FFFFFF' for white)
    #[arg(short = 'b', long = "bg_color", default_value = "#FFFFFF", value_parser = parse_color)]
    pub bg_color: Color,

    /// Text color in hex (e.g. '#000000' for black)
    #[arg(short = 't', long = "text_color", default_value = "#000000", value_parser = parse_color)]
    pub text_color: Color,

    /// Font size in pixels
    #[arg(short = 's', long = "size", default_value_t = 48, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// Canvas width in pixels
    #[arg(short = 'w', long = "width", default_value_t = 1920, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'h', long = "height", default_value_t = 1080, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Where the text block sits: centre, top, bottom, left, right,
    /// top-left, top-right, bottom-left, bottom-right
    #[arg(short = 'A', long = "text-align", default_value = "centre", value_parser = parse_text_align)]
    pub text_align: TextAlign,

    /// Which way glyphs advance within a line: left or right
    #[arg(short = 'a', long = "char-align", default_value = "right", value_parser = parse_char_align)]
    pub char_align: CharAlign,

    /// Suppress the success message
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Print usage information
    #[arg(long, action = clap::ArgAction::HelpLong)]
    help: Option<bool>,
}

impl Cli {
    /// Freeze the parsed arguments into the immutable options aggregate
    pub fn into_options(self) -> RenderOptions {
        RenderOptions {
            font: self.font,
            output: self.output,
            font_size: self.size,
            width: self.width,
            height: self.height,
            bg_color: self.bg_color,
            text_color: self.text_color,
            text_align: self.text_align,
            char_align: self.char_align,
        }
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_hex(s).map_err(|err| err.to_string())
}

fn parse_text_align(s: &str) -> Result<TextAlign, String> {
    match s {
        "centre" => Ok(TextAlign::Centre),
        "top" => Ok(TextAlign::Top),
        "bottom" => Ok(TextAlign::Bottom),
        "left" => Ok(TextAlign::Left),
        "right" => Ok(TextAlign::Right),
        "top-left" => Ok(TextAlign::TopLeft),
        "top-right" => Ok(TextAlign::TopRight),
        "bottom-left" => Ok(TextAlign::BottomLeft),
        "bottom-right" => Ok(TextAlign::BottomRight),
        _ => Err(format!(
            "invalid alignment {s:?} (expected centre, top, bottom, left, right, \
             top-left, top-right, bottom-left or bottom-right)"
        )),
    }
}

fn parse_char_align(s: &str) -> Result<CharAlign, String> {
    match s {
        "left" => Ok(CharAlign::Left),
        "right" => Ok(CharAlign::Right),
        _ => Err(format!("invalid character alignment {s:?} (expected left or right)")),
    }
}
