use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error parsing message template: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering message template: {}", .0)]
    Render(#[from] RenderError),

    #[error("Message template `{}` uses unknown placeholder `{}`", .0, .1)]
    UnknownPlaceholder(String, String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Invalid alias: alias may not be empty")]
    EmptyAlias,

    #[error("Invalid alias `{}`: alias may not contain `?`", .0)]
    AliasWithDelimiter(String),

    #[error("Invalid alias `{}`: alias may not start or end with whitespace", .0)]
    AliasWithWhitespace(String),

    #[error(
        "Alias `{}` refers to unknown action `{}`, expected one of: {}",
        .0,
        .1,
        crate::action::Action::CANONICAL_NAMES.join(", ")
    )]
    UnknownAction(String, String),

    #[error("Input ended before the quotation was complete.")]
    EndOfInput,
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
