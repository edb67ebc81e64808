//! The interactive read-dispatch-render loop.

use std::io::{BufRead, Write};

use itertools::Itertools;
use log::{debug, info};
use quotes_core::config::Config;
use quotes_core::dispatcher::{Dispatcher, Outcome};
use quotes_core::error::{Error, Result};
use quotes_core::messages::Messages;
use quotes_core::request::Request;

use crate::console::Console;
use crate::render::Tone;

/// One interactive session: a dispatcher with its store, plus the console
/// it talks through.
pub struct Session<R, W> {
    dispatcher: Dispatcher,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// # Errors
    ///
    /// Returns an error if the configured aliases are invalid.
    pub fn new(config: Config, reader: R, writer: W, color: bool) -> Result<Self> {
        let actions = config.action_table()?;
        if !actions.aliases().is_empty() {
            debug!("Aliases: {}", actions.aliases().keys().join(", "));
        }

        Ok(Self {
            dispatcher: Dispatcher::new(actions),
            console: Console::new(reader, writer, config.messages, color),
        })
    }

    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Runs until `quit` is entered or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading, writing or rendering a message fails.
    pub fn run(&mut self) -> Result<()> {
        let banner = self.console.messages().banner.clone();
        self.console.print_message(&banner, Tone::Heading)?;

        let prompt = Messages::render_plain(&self.console.messages().prompt)?;

        loop {
            let Some(line) = self.console.prompt_line(&prompt)? else {
                info!("Input ended, closing session");
                return Ok(());
            };

            let request = Request::parse(&line);
            let outcome = match self.dispatcher.dispatch(&request, &mut self.console) {
                Ok(outcome) => outcome,
                Err(Error::EndOfInput) => {
                    info!("Input ended during registration, closing session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            if let Outcome::Ignored(token) = &outcome {
                debug!("Ignoring unrecognised action `{token}`");
            }

            self.console.render(&outcome)?;

            if outcome == Outcome::Quit {
                info!("Quit requested, closing session");
                return Ok(());
            }
        }
    }

    pub fn into_writer(self) -> W {
        self.console.into_writer()
    }
}
