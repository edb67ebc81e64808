//! Rendering of dispatch outcomes to the terminal.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use quotes_core::dispatcher::Outcome;
use quotes_core::error::Result;
use quotes_core::messages::Messages;

/// How a line of output is emphasised when color is enabled.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tone {
    Plain,
    Heading,
    Success,
    Warning,
    Failure,
}

impl Tone {
    fn color(self) -> Option<Color> {
        match self {
            Tone::Plain | Tone::Heading => None,
            Tone::Success => Some(Color::DarkGreen),
            Tone::Warning => Some(Color::Yellow),
            Tone::Failure => Some(Color::Red),
        }
    }
}

/// Writes text without a line break, e.g. for prompts.
pub fn write_text<W: Write>(writer: &mut W, text: &str, tone: Tone, color: bool) -> Result<()> {
    if !color || tone == Tone::Plain {
        queue!(writer, Print(text))?;
        return Ok(());
    }

    if tone == Tone::Heading {
        queue!(writer, SetAttribute(Attribute::Bold))?;
    }
    if let Some(foreground) = tone.color() {
        queue!(writer, SetForegroundColor(foreground))?;
    }
    queue!(writer, Print(text), ResetColor, SetAttribute(Attribute::Reset))?;

    Ok(())
}

pub fn write_line<W: Write>(writer: &mut W, text: &str, tone: Tone, color: bool) -> Result<()> {
    write_text(writer, text, tone, color)?;
    queue!(writer, Print("\n"))?;
    Ok(())
}

/// Writes the user-facing text for one outcome.
///
/// Ignored actions and `quit` produce no output.
pub fn render_outcome<W: Write>(
    writer: &mut W,
    messages: &Messages,
    outcome: &Outcome,
    color: bool,
) -> Result<()> {
    match outcome {
        Outcome::Registered(quotation) => {
            let text = Messages::render_id(&messages.registered, quotation.id)?;
            write_line(writer, &text, Tone::Success, color)?;
        }
        Outcome::Listed(quotations) => {
            write_line(
                writer,
                &Messages::render_plain(&messages.list_header)?,
                Tone::Heading,
                color,
            )?;
            write_line(
                writer,
                &Messages::render_plain(&messages.list_separator)?,
                Tone::Plain,
                color,
            )?;

            if quotations.is_empty() {
                let text = Messages::render_plain(&messages.list_empty)?;
                write_line(writer, &text, Tone::Plain, color)?;
            }

            for quotation in quotations {
                let text = Messages::render_quotation(&messages.list_row, quotation)?;
                write_line(writer, &text, Tone::Plain, color)?;
            }
        }
        Outcome::Removed(id) => {
            let text = Messages::render_id(&messages.removed, *id)?;
            write_line(writer, &text, Tone::Success, color)?;
        }
        Outcome::NotFound(id) => {
            let text = Messages::render_id(&messages.not_found, *id)?;
            write_line(writer, &text, Tone::Warning, color)?;
        }
        Outcome::InvalidId => {
            let text = Messages::render_plain(&messages.invalid_id)?;
            write_line(writer, &text, Tone::Failure, color)?;
        }
        Outcome::Ignored(_) | Outcome::Quit => {}
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotes_core::quotation::Quotation;

    fn render(outcome: &Outcome) -> String {
        let mut buffer = Vec::new();
        render_outcome(&mut buffer, &Messages::default(), outcome, false).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(
            render(&Outcome::Listed(vec![])),
            "ID / Quotation / Author\n--------------------\nNo quotations registered.\n"
        );
    }

    #[test]
    fn test_render_list_rows() {
        let quotations = vec![
            Quotation {
                id: 2,
                content: "Carpe diem".to_string(),
                author_name: "Horace".to_string(),
            },
            Quotation {
                id: 1,
                content: "Stay hungry".to_string(),
                author_name: "Jobs".to_string(),
            },
        ];
        assert_eq!(
            render(&Outcome::Listed(quotations)),
            "ID / Quotation / Author\n--------------------\n2 / Carpe diem / Horace\n1 / Stay hungry / Jobs\n"
        );
    }

    #[test]
    fn test_render_delete_outcomes() {
        assert_eq!(render(&Outcome::Removed(3)), "Quotation 3 removed.\n");
        assert_eq!(render(&Outcome::NotFound(3)), "Quotation 3 does not exist.\n");
        assert_eq!(render(&Outcome::InvalidId), "Please enter a valid id.\n");
    }

    #[test]
    fn test_render_silent_outcomes() {
        assert_eq!(render(&Outcome::Ignored("dance".to_string())), "");
        assert_eq!(render(&Outcome::Quit), "");
    }

    #[test]
    fn test_render_with_color_wraps_text_in_escape_codes() {
        let mut buffer = Vec::new();
        render_outcome(&mut buffer, &Messages::default(), &Outcome::InvalidId, true).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("Please enter a valid id."));
        assert!(output.contains('\u{1b}'));
        assert!(output.ends_with('\n'));
    }
}
