//! # quillview
//!
//! Render Quill delta documents in the terminal.
//!
//! ## Usage
//!
//! Render a document:
//! ```sh
//! quillview post.json
//! ```
//!
//! Dump the render blocks:
//! ```sh
//! quillview -o json post.json
//! ```
//!
//! Compose a delta from plain text:
//! ```sh
//! echo "Nice post!" | quillview --encode
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, OutputFormat};
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::process;

use quillview::terminal::compat::ColorChoice;
use quillview::terminal::{self, PaintOptions, ansi};
use quillview::{Config, QuillParser, ThemedStyle, encode_plain_text, is_blank, logging};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    logging::init(args.verbose);

    let config = match args.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    if args.print_config {
        print!("{}", config.to_toml().wrap_err("Failed to serialize config")?);
        return Ok(());
    }

    let input = read_input(args.file.as_deref())?;

    if args.encode {
        let text = input
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(&input);
        println!("{}", encode_plain_text(text));
        return Ok(());
    }

    if args.check_empty {
        if is_blank(&input) {
            println!("empty");
            return Ok(());
        }
        println!("not empty");
        process::exit(1);
    }

    render(&args, &config, &input)
}

/// Read the whole document from a file, or stdin for `None` and `-`.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn render(args: &Cli, config: &Config, input: &str) -> Result<()> {
    let style = ThemedStyle::from_config(&config.style);
    let parser = QuillParser::with_style(style);
    let blocks = parser.parse(input);
    tracing::debug!(blocks = blocks.len(), "rendered document");

    // Priority: CLI args > config file > auto-detection
    let color_choice = args
        .color
        .map(ColorChoice::from)
        .unwrap_or_else(|| ColorChoice::from_config(&config.output.color));
    let format = args.output.unwrap_or(if color_choice.resolve() {
        OutputFormat::Ansi
    } else {
        OutputFormat::Plain
    });

    if format == OutputFormat::Json {
        let json =
            serde_json::to_string_pretty(&blocks).wrap_err("Failed to serialize render blocks")?;
        println!("{}", json);
        return Ok(());
    }

    let width = args
        .width
        .or((config.output.width > 0).then_some(config.output.width))
        .unwrap_or_else(terminal_width);
    let options = PaintOptions::from_style(parser.style(), width, config.output.quote_margin);
    let text = terminal::paint(&blocks, &options);

    match format {
        OutputFormat::Ansi => {
            ansi::write_text(&mut io::stdout().lock(), &text).wrap_err("Failed to write output")?
        }
        _ => println!("{}", terminal::to_plain(&text)),
    }

    Ok(())
}

/// Width of the attached terminal, or 0 (no wrapping) when piped.
fn terminal_width() -> u16 {
    if !io::stdout().is_terminal() {
        return 0;
    }
    crossterm::terminal::size()
        .map(|(columns, _)| columns)
        .unwrap_or(0)
}
