use serde::Serialize;
use crate::books::dto::BookDto;
use crate::core::library::{ErrorKind, LibraryError};

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, LibraryError>;
}

// CommandReply is the outcome handed back to drivers: a success flag plus a
// human-readable message, and the matches for a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub books: Vec<(String, BookDto)>,
}

impl CommandReply {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            kind: None,
            message: message.to_string(),
            books: vec![],
        }
    }

    pub fn with_books(message: &str, books: Vec<(String, BookDto)>) -> Self {
        Self {
            books,
            ..Self::ok(message)
        }
    }
}

impl From<LibraryError> for CommandReply {
    fn from(err: LibraryError) -> Self {
        Self {
            success: false,
            kind: Some(err.kind()),
            message: err.to_string(),
            books: vec![],
        }
    }
}

impl From<Result<CommandReply, LibraryError>> for CommandReply {
    fn from(res: Result<CommandReply, LibraryError>) -> Self {
        res.unwrap_or_else(CommandReply::from)
    }
}
