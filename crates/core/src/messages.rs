//! User-facing message templates.
//!
//! Every message is a `leon` template so it can be translated through the
//! config file. Only `list_row` sees `{id}`, `{content}` and `{author}`.
//! The registered/removed/not-found messages see `{id}`, and the rest are
//! plain text.

use std::collections::HashMap;

use leon::Template;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::quotation::{Quotation, QuotationId};

/// Placeholders a message template may refer to
pub const PLACEHOLDERS: [&str; 3] = ["id", "content", "author"];
const NO_PLACEHOLDERS: &[&str] = &[];
const ID_ONLY: &[&str] = &["id"];
const ALL_PLACEHOLDERS: &[&str] = &PLACEHOLDERS;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Messages {
    pub banner: String,
    pub prompt: String,
    pub content_prompt: String,
    pub author_prompt: String,
    pub list_header: String,
    pub list_separator: String,
    pub list_row: String,
    pub list_empty: String,
    pub registered: String,
    pub removed: String,
    pub not_found: String,
    pub invalid_id: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            banner: "== Quotations ==".to_string(),
            prompt: "Command) ".to_string(),
            content_prompt: "Quotation : ".to_string(),
            author_prompt: "Author : ".to_string(),
            list_header: "ID / Quotation / Author".to_string(),
            list_separator: "--------------------".to_string(),
            list_row: "{id} / {content} / {author}".to_string(),
            list_empty: "No quotations registered.".to_string(),
            registered: "Quotation {id} registered.".to_string(),
            removed: "Quotation {id} removed.".to_string(),
            not_found: "Quotation {id} does not exist.".to_string(),
            invalid_id: "Please enter a valid id.".to_string(),
        }
    }
}

impl Messages {
    /// Each template with the placeholders it is rendered with.
    fn templates(&self) -> [(&'static str, &str, &'static [&'static str]); 12] {
        [
            ("banner", self.banner.as_str(), NO_PLACEHOLDERS),
            ("prompt", self.prompt.as_str(), NO_PLACEHOLDERS),
            ("content_prompt", self.content_prompt.as_str(), NO_PLACEHOLDERS),
            ("author_prompt", self.author_prompt.as_str(), NO_PLACEHOLDERS),
            ("list_header", self.list_header.as_str(), NO_PLACEHOLDERS),
            ("list_separator", self.list_separator.as_str(), NO_PLACEHOLDERS),
            ("list_row", self.list_row.as_str(), ALL_PLACEHOLDERS),
            ("list_empty", self.list_empty.as_str(), NO_PLACEHOLDERS),
            ("registered", self.registered.as_str(), ID_ONLY),
            ("removed", self.removed.as_str(), ID_ONLY),
            ("not_found", self.not_found.as_str(), ID_ONLY),
            ("invalid_id", self.invalid_id.as_str(), NO_PLACEHOLDERS),
        ]
    }

    /// Checks that every template parses and only uses the placeholders it
    /// is rendered with.
    ///
    /// `list_row` may use all of [`PLACEHOLDERS`]. `registered`, `removed`
    /// and `not_found` may use `{id}`. Every other message is plain text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed templates and
    /// [`Error::UnknownPlaceholder`] for placeholders a template cannot use.
    pub fn validate(&self) -> Result<()> {
        for (name, template, allowed) in self.templates() {
            let parsed = Template::parse(template)?;

            for key in parsed.keys() {
                let key = key.to_string();
                if !allowed.contains(&key.as_str()) {
                    return Err(Error::UnknownPlaceholder(name.to_string(), key));
                }
            }
        }

        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the template cannot be parsed or rendered.
    pub fn render_plain(template: &str) -> Result<String> {
        render(template, &HashMap::new())
    }

    /// # Errors
    ///
    /// Returns an error if the template cannot be parsed or rendered.
    pub fn render_id(template: &str, id: QuotationId) -> Result<String> {
        render(template, &HashMap::from([("id", id.to_string())]))
    }

    /// # Errors
    ///
    /// Returns an error if the template cannot be parsed or rendered.
    pub fn render_quotation(template: &str, quotation: &Quotation) -> Result<String> {
        render(
            template,
            &HashMap::from([
                ("id", quotation.id.to_string()),
                ("content", quotation.content.clone()),
                ("author", quotation.author_name.clone()),
            ]),
        )
    }
}

fn render(template: &str, values: &HashMap<&str, String>) -> Result<String> {
    let template = Template::parse(template)?;
    Ok(template.render(values)?)
}
