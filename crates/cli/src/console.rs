//! Line-based console input and output.
//!
//! The console reads one line per prompt from any [`BufRead`] and writes to
//! any [`Write`], so sessions can run against stdin/stdout or in-memory
//! buffers alike.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use log::{debug, warn};
use quotes_core::dispatcher::{NewQuotation, Outcome, QuotationInput};
use quotes_core::error::{Error, Result};
use quotes_core::messages::Messages;

use crate::render::{self, Tone};

pub struct Console<R, W> {
    reader: R,
    writer: W,
    messages: Messages,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W, messages: Messages, color: bool) -> Self {
        Self {
            reader,
            writer,
            messages,
            color,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Shows `prompt` and reads one line.
    ///
    /// The line ending is stripped but other whitespace is kept. Bytes that
    /// are not valid UTF-8 become U+FFFD. Returns `None` once input has ended.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        render::write_text(&mut self.writer, prompt, Tone::Plain, self.color)?;
        self.writer.flush()?;

        let mut buffer = Vec::new();
        if self.reader.read_until(b'\n', &mut buffer)? == 0 {
            debug!("Input ended at prompt `{prompt}`");
            return Ok(None);
        }

        let input = String::from_utf8_lossy(&buffer);
        if let Cow::Owned(_) = input {
            warn!("Replaced invalid UTF-8 in input at prompt `{prompt}`");
        }

        Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prints a template without placeholders on its own line.
    pub fn print_message(&mut self, template: &str, tone: Tone) -> Result<()> {
        let text = Messages::render_plain(template)?;
        render::write_line(&mut self.writer, &text, tone, self.color)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn render(&mut self, outcome: &Outcome) -> Result<()> {
        render::render_outcome(&mut self.writer, &self.messages, outcome, self.color)
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> QuotationInput for Console<R, W> {
    fn read_quotation(&mut self) -> Result<NewQuotation> {
        let content_prompt = Messages::render_plain(&self.messages.content_prompt)?;
        let content = self.prompt_line(&content_prompt)?.ok_or(Error::EndOfInput)?;

        let author_prompt = Messages::render_plain(&self.messages.author_prompt)?;
        let author_name = self.prompt_line(&author_prompt)?.ok_or(Error::EndOfInput)?;

        Ok(NewQuotation {
            content,
            author_name,
        })
    }
}
