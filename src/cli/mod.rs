mod commands;

pub use commands::{Cli, ColorArg, OutputFormat};
