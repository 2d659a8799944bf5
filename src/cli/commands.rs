use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use quillview::terminal::compat::ColorChoice;

#[derive(Parser, Debug)]
#[command(name = "quillview")]
#[command(version)]
#[command(about = "Render Quill delta documents in the terminal")]
#[command(
    long_about = "quillview - render Quill delta rich text (posts, comments) as styled terminal text.\n\n\
    Reads a delta JSON document and prints one paragraph per line, with headers,\n\
    lists, quotes, links and inline styles. Input that is not a delta is printed as-is.\n\n\
    Examples:\n  \
    quillview post.json               # Render a delta file\n  \
    curl -s $URL | quillview          # Render from stdin\n  \
    quillview -o json post.json       # Dump render blocks as JSON\n  \
    echo 'hello' | quillview --encode # Wrap plain text as a delta\n  \
    quillview --check-empty draft.json"
)]
pub struct Cli {
    /// Delta JSON file to render, or '-' for stdin
    ///
    /// When omitted, input is read from stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Output format
    ///
    ///   ansi  - Styled terminal text (default when colors are enabled)
    ///   plain - Unstyled text, with indentation and wrapping
    ///   json  - Render blocks as JSON
    #[arg(short = 'o', long = "output", value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Wrap width in columns (0 disables wrapping)
    ///
    /// Defaults to the config file setting, then the terminal width.
    #[arg(short = 'w', long = "width", value_name = "COLUMNS")]
    pub width: Option<u16>,

    /// When to use colors (auto, always, never)
    #[arg(long = "color", value_name = "WHEN")]
    pub color: Option<ColorArg>,

    /// Treat input as plain text and print it as a delta document
    #[arg(long = "encode", conflicts_with_all = ["output", "check_empty"])]
    pub encode: bool,

    /// Report whether the delta has any non-whitespace text
    ///
    /// Prints "empty" and exits 0 when blank, prints "not empty" and exits 1
    /// otherwise.
    #[arg(long = "check-empty")]
    pub check_empty: bool,

    /// Use this config file instead of the default location
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long = "print-config")]
    pub print_config: bool,

    /// Log debug information to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled terminal output
    Ansi,
    /// Plain text output
    Plain,
    /// JSON output
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["quillview", "-o", "json", "-w", "40", "post.json"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.width, Some(40));
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("post.json")));
    }

    #[test]
    fn test_encode_conflicts_with_output() {
        assert!(Cli::try_parse_from(["quillview", "--encode", "-o", "json"]).is_err());
    }
}
