//! textwal - render stdin text onto a solid-color canvas and save it as PNG

mod cli;

use std::fs::File;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use textwal_core::error::{Result, TextwalError};
use textwal_core::traits::Exporter;
use textwal_export::PngExporter;
use textwal_font::Font;
use textwal_render::render;

fn main() -> ExitCode {
    env_logger::init();

    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are success paths; anything else is a
            // usage error and exits 1
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        },
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("textwal: {err}");
            ExitCode::FAILURE
        },
    }
}

fn run(cli: cli::Cli) -> Result<()> {
    let quiet = cli.quiet;

    let text = read_input()?;
    let options = cli.into_options();
    log::debug!(
        "rendering {} bytes of text at {}px onto {}x{}",
        text.len(),
        options.font_size,
        options.width,
        options.height,
    );

    let font = Font::from_file(&options.font)?;
    let bitmap = render(&text, &font, &options)?;

    let exporter = PngExporter::new();
    let encoded = exporter.export(&bitmap)?;

    let mut file = File::create(&options.output)?;
    file.write_all(&encoded)?;

    if !quiet {
        println!("Image saved as {}", options.output.display());
    }

    Ok(())
}

/// Read standard input to end-of-stream; zero bytes is an error
fn read_input() -> Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    if text.is_empty() {
        return Err(TextwalError::EmptyInput);
    }
    Ok(text)
}
