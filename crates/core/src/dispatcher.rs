//! Routing of parsed commands to quotation operations.
//!
//! The dispatcher owns the [`QuotationStore`] for the session. Each call to
//! [`Dispatcher::dispatch`] handles one command and reports what happened as
//! an [`Outcome`]; turning that into text is left to the caller.

use log::{debug, info};

use crate::action::{Action, ActionTable};
use crate::error::Result;
use crate::quotation::{Quotation, QuotationId};
use crate::request::{Param, Request};
use crate::store::QuotationStore;

/// Name of the parameter carrying the quotation id for `delete`
pub const ID_PARAM: &str = "id";

/// Content and author supplied for a quotation being registered.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NewQuotation {
    pub content: String,
    pub author_name: String,
}

impl NewQuotation {
    pub fn new(content: impl Into<String>, author_name: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author_name: author_name.into(),
        }
    }
}

/// Supplies the text of a quotation when a `register` command is handled.
pub trait QuotationInput {
    /// # Errors
    ///
    /// Returns an error if the text could not be obtained, e.g. because
    /// input ended.
    fn read_quotation(&mut self) -> Result<NewQuotation>;
}

impl<F> QuotationInput for F
where
    F: FnMut() -> Result<NewQuotation>,
{
    fn read_quotation(&mut self) -> Result<NewQuotation> {
        self()
    }
}

/// What handling a single command did.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Outcome {
    Registered(Quotation),
    /// Snapshot of the store, most recent first
    Listed(Vec<Quotation>),
    Removed(QuotationId),
    NotFound(QuotationId),
    /// The `id` parameter was missing, not a number, or 0
    InvalidId,
    /// The action token was not recognised; nothing happened
    Ignored(String),
    Quit,
}

#[derive(Debug, Default)]
pub struct Dispatcher {
    store: QuotationStore,
    actions: ActionTable,
}

impl Dispatcher {
    #[must_use]
    pub fn new(actions: ActionTable) -> Self {
        Self {
            store: QuotationStore::new(),
            actions,
        }
    }

    #[must_use]
    pub fn store(&self) -> &QuotationStore {
        &self.store
    }

    /// Handles one parsed command.
    ///
    /// # Errors
    ///
    /// Only fails when `input` fails to supply a quotation for `register`.
    /// The store is not modified in that case.
    pub fn dispatch<I: QuotationInput + ?Sized>(
        &mut self,
        request: &Request,
        input: &mut I,
    ) -> Result<Outcome> {
        let action = self.actions.resolve(request.action());
        debug!("Dispatching {action}");

        match action {
            Action::Quit => Ok(Outcome::Quit),
            Action::Register => self.register(input),
            Action::List => Ok(Outcome::Listed(self.store.list_all())),
            Action::Delete => Ok(self.delete(request)),
            Action::Unknown(token) => Ok(Outcome::Ignored(token)),
        }
    }

    fn register<I: QuotationInput + ?Sized>(&mut self, input: &mut I) -> Result<Outcome> {
        let NewQuotation {
            content,
            author_name,
        } = input.read_quotation()?;

        let quotation = self.store.add(content, author_name);
        info!("Registered quotation {}", quotation.id);

        Ok(Outcome::Registered(quotation))
    }

    fn delete(&mut self, request: &Request) -> Outcome {
        // 0 is never issued, so it is treated like a missing id
        let id = match request.param_parsed::<QuotationId>(ID_PARAM) {
            Param::Valid(0) => {
                debug!("Delete requested for id 0");
                return Outcome::InvalidId;
            }
            Param::Valid(id) => id,
            Param::Absent => {
                debug!("Delete requested without an `{ID_PARAM}` parameter");
                return Outcome::InvalidId;
            }
            Param::Invalid(raw) => {
                debug!("Delete requested with non-numeric id `{raw}`");
                return Outcome::InvalidId;
            }
        };

        if self.store.remove(id) {
            info!("Removed quotation {id}");
            Outcome::Removed(id)
        } else {
            Outcome::NotFound(id)
        }
    }
}
