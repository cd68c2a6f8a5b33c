//! Colored output using crossterm

use std::io::Write;

use crossterm::{
    queue,
    style::{Print, SetBackgroundColor, SetForegroundColor},
};

use crate::error::Result;
use crate::markup::{Color, Markup};

/// Writes resolved spans to an output in color.
///
/// The ambient color is applied at the end of every line and again when
/// the painter is dropped, so the terminal is left as it was found however
/// the run ends.
pub struct Painter<W: Write> {
    out: W,
    ambient: Color,
}

impl<W: Write> Painter<W> {
    pub fn new(out: W, ambient: Color) -> Self {
        Self { out, ambient }
    }

    /// Write one line from its resolved spans, followed by a newline
    pub fn paint_line(&mut self, line: &str, spans: &[Markup]) -> Result<()> {
        for span in spans {
            let text = line.get(span.run.index..span.run.end()).unwrap_or_default();
            if text.is_empty() {
                continue;
            }
            self.apply(span.color)?;
            queue!(self.out, Print(text))?;
        }
        self.apply(self.ambient)?;
        queue!(self.out, Print('\n'))?;
        Ok(())
    }

    /// Set the channels a color defines, leaving unset ones alone
    pub fn apply(&mut self, color: Color) -> Result<()> {
        if let Some(bg) = color.background {
            queue!(self.out, SetBackgroundColor(bg.into()))?;
        }
        if let Some(fg) = color.foreground {
            queue!(self.out, SetForegroundColor(fg.into()))?;
        }
        Ok(())
    }

    /// Flush output buffer to terminal
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for Painter<W> {
    fn drop(&mut self) {
        // Restore ambient color
        let _ = self.apply(self.ambient);
        let _ = self.out.flush();
    }
}
