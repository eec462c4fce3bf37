//! CLI binary for html-fmt.

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use html_fmt::{rewrite_html_with_builder, FormatterBuilder};

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Spaces per indentation level
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Treat NAME as a void element in addition to br, hr, img, and input
    #[arg(long = "void", value_name = "NAME")]
    void: Vec<String>,

    /// Input file
    input: PathBuf,

    /// Output file (default: overwrite input)
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();

    let src = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let mut builder = FormatterBuilder::default();
    builder.indent(" ".repeat(cli.indent));
    for name in cli.void {
        builder.extra_void_element(name);
    }

    let mut out = rewrite_html_with_builder(&src, builder)?;
    out.push('\n');

    let out_path = cli.output.as_ref().unwrap_or(&cli.input);
    fs::write(out_path, out).with_context(|| format!("failed to write {}", out_path.display()))?;
    Ok(())
}
