//! The closed set of actions a command line can request.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use log::debug;

/// An action resolved from the action token of a [`crate::request::Request`].
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Action {
    Register,
    List,
    Delete,
    Quit,
    /// Any token that is neither a canonical name nor a configured alias
    Unknown(String),
}

impl Action {
    /// Canonical action names, listed in alias errors.
    pub const CANONICAL_NAMES: [&'static str; 4] = ["register", "list", "delete", "quit"];

    /// Maps a canonical action name to its action.
    #[must_use]
    pub fn from_canonical(name: &str) -> Option<Self> {
        match name {
            "register" => Some(Action::Register),
            "list" => Some(Action::List),
            "delete" => Some(Action::Delete),
            "quit" => Some(Action::Quit),
            _ => None,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Register => f.write_str("register"),
            Action::List => f.write_str("list"),
            Action::Delete => f.write_str("delete"),
            Action::Quit => f.write_str("quit"),
            Action::Unknown(token) => write!(f, "unknown `{token}`"),
        }
    }
}

/// Resolves action tokens, honouring user-defined aliases.
///
/// Canonical names always resolve, aliases are checked afterwards.
#[derive(Clone, Debug, Default)]
pub struct ActionTable {
    aliases: IndexMap<String, Action>,
}

impl ActionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_aliases(aliases: IndexMap<String, Action>) -> Self {
        Self { aliases }
    }

    pub fn insert_alias(&mut self, alias: String, action: Action) {
        self.aliases.insert(alias, action);
    }

    #[must_use]
    pub fn aliases(&self) -> &IndexMap<String, Action> {
        &self.aliases
    }

    #[must_use]
    pub fn resolve(&self, token: &str) -> Action {
        if let Some(action) = Action::from_canonical(token) {
            return action;
        }

        match self.aliases.get(token) {
            Some(action) => {
                debug!("Alias `{token}` resolved to {action}");
                action.clone()
            }
            None => Action::Unknown(token.to_string()),
        }
    }
}
