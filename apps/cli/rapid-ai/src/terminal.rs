use crate::presentation::{KeyTestStatus, KeyTestSurface, Presentation};

use std::io::{self, Write};

use log::warn;

/// Key test progress written to a terminal stream.
pub struct TerminalSurface<W: Write> {
    out: W,
    loading: bool,
    status_visible: bool,
    status: Option<KeyTestStatus>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            loading: false,
            status_visible: false,
            status: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_status_visible(&self) -> bool {
        self.status_visible
    }

    pub fn status(&self) -> Option<&KeyTestStatus> {
        self.status.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!("Failed to write to terminal: {e}");
        }
    }
}

impl<W: Write> KeyTestSurface for TerminalSurface<W> {
    fn set_loading_state(&mut self, loading: bool) {
        if loading && !self.loading {
            self.write_line("Testing API key...");
        }
        self.loading = loading;
    }

    fn set_status_visibility(&mut self, visible: bool) {
        self.status_visible = visible;
        if visible {
            if let Some(status) = self.status {
                self.write_line(&format!("[{}] {}", status.icon, status.message));
            }
        }
    }

    fn set_test_status(&mut self, status: &KeyTestStatus) {
        self.status = Some(*status);
    }
}

/// Write `presentation` for a terminal user.
///
/// Completion text goes to `out` untouched so it can be piped; notices and
/// dialogs go to `err`.
pub fn render<O: Write, E: Write>(
    presentation: &Presentation,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    match presentation {
        Presentation::Render(body) => {
            out.write_all(body.as_bytes())?;
            if !body.ends_with('\n') {
                writeln!(out)?;
            }
        }
        Presentation::Notice(message) => writeln!(err, "{message}")?,
        Presentation::Dialog {
            title,
            subtitle,
            action,
        } => {
            writeln!(err, "{title}")?;
            writeln!(err, "  {subtitle}")?;
            writeln!(err, "  -> {}", action.label())?;
        }
    }
    Ok(())
}
