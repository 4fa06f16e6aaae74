use anyhow::{Context, Result};
use clap::Parser;
use worddiff::commands::diff::{DiffOptions, Reporter};
use worddiff::pager::{self, PagerWriter};
use worddiff::{Granularity, OutputFormat};

#[derive(Parser)]
#[command(
    name = "worddiff",
    version = "0.1.0",
    about = "Word-level text diffs in the terminal",
    long_about = "Computes a minimal edit script between two texts with the \
    Myers shortest-edit-distance algorithm and renders it in the terminal, \
    word by word, line by line, or character by character.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "Path to the old text")]
    old: String,
    #[arg(index = 2, help = "Path to the new text")]
    new: String,
    #[arg(
        short,
        long,
        value_enum,
        default_value = "words",
        help = "Tokenization granularity"
    )]
    mode: Granularity,
    #[arg(
        short,
        long,
        value_enum,
        default_value = "stream",
        help = "Shape of the report"
    )]
    format: OutputFormat,
    #[arg(long, help = "Write straight to stdout even on a terminal")]
    no_pager: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let old = std::fs::read_to_string(&cli.old)
        .with_context(|| format!("failed to read old text: {}", cli.old))?;
    let new = std::fs::read_to_string(&cli.new)
        .with_context(|| format!("failed to read new text: {}", cli.new))?;

    let opts = DiffOptions {
        granularity: cli.mode,
        format: cli.format,
    };

    if pager::use_pager(cli.no_pager) {
        let pager = minus::Pager::new();
        let reporter = Reporter::new(Box::new(PagerWriter::new(pager.clone())));
        reporter.diff(&old, &new, &opts)?;
        pager::page_all(pager)?;
    } else {
        let reporter = Reporter::new(Box::new(std::io::stdout()));
        reporter.diff(&old, &new, &opts)?;
    }

    Ok(())
}
