use crate::engine;
use crate::render;
use crate::text::tokenize;
use crate::{Granularity, OutputFormat};
use std::cell::{RefCell, RefMut};
use std::io::Write;

/// How one invocation tokenizes its inputs and shapes its report.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    pub granularity: Granularity,
    pub format: OutputFormat,
}

/// Writes diff reports to an injected sink (stdout, a pager, or a test
/// buffer).
pub struct Reporter {
    writer: RefCell<Box<dyn Write>>,
}

impl Reporter {
    pub fn new(writer: Box<dyn Write>) -> Self {
        Reporter {
            writer: RefCell::new(writer),
        }
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    /// Diffs two texts at the requested granularity and writes the report.
    pub fn diff(&self, old: &str, new: &str, opts: &DiffOptions) -> anyhow::Result<()> {
        match opts.granularity {
            Granularity::Words => {
                self.report(&tokenize::words(old), &tokenize::words(new), " ", opts)
            }
            Granularity::Lines => {
                self.report(&tokenize::lines(old), &tokenize::lines(new), "\n", opts)
            }
            Granularity::Graphemes => {
                self.report(&tokenize::graphemes(old), &tokenize::graphemes(new), "", opts)
            }
        }
    }

    fn report(&self, a: &[&str], b: &[&str], separator: &str, opts: &DiffOptions) -> anyhow::Result<()> {
        let script = engine::diff(a, b);
        let rendered = match opts.format {
            OutputFormat::Stream => render::render_stream(&script, separator),
            OutputFormat::Listing => render::render_listing(&script),
        };

        writeln!(self.writer(), "{rendered}")?;

        Ok(())
    }
}
