use std::io::{self, Write};

use feed_core::{RenderTarget, ViewState};

/// Renders view states as plain text lines.
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderTarget for TextRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, state: &ViewState) -> Result<(), io::Error> {
        writeln!(self.out, "{}", state.header())?;
        match state {
            ViewState::Loaded { items, .. } => {
                for item in items {
                    let marker = if item.selected { "[x]" } else { "[ ]" };
                    match &item.subtitle {
                        Some(subtitle) => {
                            writeln!(self.out, "  {marker} {} - {subtitle}", item.title)?
                        }
                        None => writeln!(self.out, "  {marker} {}", item.title)?,
                    }
                }
            }
            ViewState::Loading => writeln!(self.out, "  (loading)")?,
            ViewState::Error { message } => writeln!(self.out, "  error: {message}")?,
            ViewState::Empty => {}
        }
        self.out.flush()
    }
}
