use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::books::dto::BookPatch;
use crate::core::command::{Command, CommandReply};
use crate::core::library::LibraryError;
use crate::lending::domain::LendingService;

// LendingRequest is one operation against the store as a driver would submit it,
// e.g. {"op":"borrow_book","member_id":101,"isbn":"ISBN001"}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum LendingRequest {
    AddBook {
        isbn: String,
        title: String,
        author: String,
        genre: String,
        copies: i64,
    },
    AddMember {
        member_id: i64,
        name: String,
    },
    SearchBooks {
        query: String,
    },
    UpdateBook {
        isbn: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        author: Option<String>,
        #[serde(default)]
        genre: Option<String>,
        #[serde(default)]
        copies: Option<i64>,
    },
    UpdateMember {
        member_id: i64,
        #[serde(default)]
        name: Option<String>,
    },
    DeleteBook {
        isbn: String,
    },
    DeleteMember {
        member_id: i64,
    },
    BorrowBook {
        member_id: i64,
        isbn: String,
    },
    ReturnBook {
        member_id: i64,
        isbn: String,
    },
}

impl LendingRequest {
    pub fn name(&self) -> &'static str {
        match self {
            LendingRequest::AddBook { .. } => "add_book",
            LendingRequest::AddMember { .. } => "add_member",
            LendingRequest::SearchBooks { .. } => "search_books",
            LendingRequest::UpdateBook { .. } => "update_book",
            LendingRequest::UpdateMember { .. } => "update_member",
            LendingRequest::DeleteBook { .. } => "delete_book",
            LendingRequest::DeleteMember { .. } => "delete_member",
            LendingRequest::BorrowBook { .. } => "borrow_book",
            LendingRequest::ReturnBook { .. } => "return_book",
        }
    }

    pub fn run(self, service: &mut dyn LendingService) -> CommandReply {
        let name = self.name();
        let reply = CommandReply::from(LendingCommand::new(service).execute(self));
        if let Some(kind) = reply.kind {
            warn!(operation = name, kind = %kind, "{}", reply.message);
        }
        reply
    }

    pub fn parse_script(json: &str) -> Result<Vec<LendingRequest>, LibraryError> {
        Ok(serde_json::from_str(json)?)
    }
}

pub struct LendingCommand<'a> {
    lending_service: &'a mut dyn LendingService,
}

impl<'a> LendingCommand<'a> {
    pub fn new(lending_service: &'a mut dyn LendingService) -> Self {
        Self {
            lending_service,
        }
    }
}

impl Command<LendingRequest, CommandReply> for LendingCommand<'_> {
    fn execute(&mut self, req: LendingRequest) -> Result<CommandReply, LibraryError> {
        let svc = &mut *self.lending_service;
        let reply = match req {
            LendingRequest::AddBook { isbn, title, author, genre, copies } => {
                svc.add_book(&isbn, &title, &author, &genre, copies)?;
                CommandReply::ok(format!("Book '{}' added successfully with ISBN {}.", title, isbn).as_str())
            }
            LendingRequest::AddMember { member_id, name } => {
                svc.add_member(member_id, &name)?;
                CommandReply::ok(format!("Member '{}' added with ID {}.", name, member_id).as_str())
            }
            LendingRequest::SearchBooks { query } => {
                let books = svc.search_books(&query);
                if books.is_empty() {
                    CommandReply::ok(format!("No books found matching '{}'.", query).as_str())
                } else {
                    let message = format!("Found {} book(s) matching '{}'.", books.len(), query);
                    CommandReply::with_books(message.as_str(), books)
                }
            }
            LendingRequest::UpdateBook { isbn, title, author, genre, copies } => {
                let patch = BookPatch { title, author, genre, copies };
                let book = svc.update_book(&isbn, &patch)?;
                if patch.copies.is_some() {
                    let borrowed = svc.borrowed_count(&isbn);
                    CommandReply::ok(format!("Book ISBN {} updated successfully. (Borrowed: {}, Available now: {})",
                                             isbn, borrowed, book.available_copies).as_str())
                } else {
                    CommandReply::ok(format!("Book ISBN {} updated successfully.", isbn).as_str())
                }
            }
            LendingRequest::UpdateMember { member_id, name } => {
                let member = svc.update_member(member_id, name.as_deref())?;
                match name {
                    Some(_) => CommandReply::ok(format!("Member ID {} name updated to {}.", member_id, member.name).as_str()),
                    None => CommandReply::ok(format!("Member ID {} unchanged.", member_id).as_str()),
                }
            }
            LendingRequest::DeleteBook { isbn } => {
                svc.delete_book(&isbn)?;
                CommandReply::ok(format!("Book ISBN {} deleted successfully.", isbn).as_str())
            }
            LendingRequest::DeleteMember { member_id } => {
                svc.delete_member(member_id)?;
                CommandReply::ok(format!("Member ID {} deleted successfully.", member_id).as_str())
            }
            LendingRequest::BorrowBook { member_id, isbn } => {
                svc.borrow_book(member_id, &isbn)?;
                CommandReply::ok(format!("Member ID {} has borrowed book ISBN {}.", member_id, isbn).as_str())
            }
            LendingRequest::ReturnBook { member_id, isbn } => {
                svc.return_book(member_id, &isbn)?;
                CommandReply::ok(format!("Member ID {} has returned book ISBN {}.", member_id, isbn).as_str())
            }
        };
        Ok(reply)
    }
}
