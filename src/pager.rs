//! Output plumbing for long reports
//!
//! Long diffs go through the minus pager when stdout is an interactive
//! terminal; otherwise, and whenever paging is disabled by flag or by the
//! `NO_PAGER` environment variable, output is written straight through.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Adapter that implements `Write` for the minus pager, so a command can
/// target a pager, stdout, or a test buffer through the same
/// `Box<dyn Write>` without knowing which it got.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn pager(&self) -> &Pager {
        &self.pager
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Whether output should go through the pager at all.
pub fn use_pager(no_pager_flag: bool) -> bool {
    !no_pager_flag && std::env::var_os("NO_PAGER").is_none() && io::stdout().is_terminal()
}

/// Drains the pager to the terminal, blocking until the user quits it.
pub fn page_all(pager: Pager) -> anyhow::Result<()> {
    minus::page_all(pager)?;
    Ok(())
}
